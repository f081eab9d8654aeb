// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Whole-file replacement of a store.
//!
//! The file handle is owned for the duration of one save and is flushed
//! before the call returns, on success and on every error path. With
//! `atomic` set, records go to a sibling temporary file that is renamed over
//! the destination only after a successful flush, so readers never observe a
//! half-written store.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use innkeeper_core::InnkeeperError;
use tempfile::NamedTempFile;

use crate::codec::{self, FlatRecord};

/// Replace the store at `path` with `records`.
pub fn write_store<T: FlatRecord>(
    path: &Path,
    records: &[T],
    atomic: bool,
) -> Result<(), InnkeeperError> {
    if atomic {
        write_atomic(path, records)
    } else {
        write_in_place(path, records)
    }
}

/// Truncate and rewrite the destination file.
fn write_in_place<T: FlatRecord>(path: &Path, records: &[T]) -> Result<(), InnkeeperError> {
    let file = File::create(path).map_err(write_failed::<T>)?;
    let mut file = codec::encode(file, records)?;
    file.flush().map_err(write_failed::<T>)
}

/// Write to a temporary file in the same directory and rename it into place.
fn write_atomic<T: FlatRecord>(path: &Path, records: &[T]) -> Result<(), InnkeeperError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(write_failed::<T>)?;
    let tmp = codec::encode(tmp, records)?;
    tmp.as_file().sync_all().map_err(write_failed::<T>)?;
    tmp.persist(path).map_err(|e| write_failed::<T>(e.error))?;
    Ok(())
}

fn write_failed<T: FlatRecord>(source: std::io::Error) -> InnkeeperError {
    InnkeeperError::StoreWrite {
        store: T::STORE,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use innkeeper_core::{Room, StoreKind};

    #[test]
    fn in_place_write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.txt");
        std::fs::write(&path, "999,Old,true\n888,Old,true\n").unwrap();

        write_store(&path, &[Room::new(101, "Standard", true)], false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "101,Standard,true\n");
    }

    #[test]
    fn atomic_write_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.txt");

        write_store(&path, &[Room::new(101, "Standard", false)], true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "101,Standard,false\n");

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn writing_into_missing_directory_fails_with_store_kind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("rooms.txt");

        for atomic in [false, true] {
            let err = write_store(&path, &[Room::new(101, "Standard", true)], atomic).unwrap_err();
            assert!(
                matches!(err, InnkeeperError::StoreWrite { store: StoreKind::Rooms, .. }),
                "atomic={atomic}: {err:?}"
            );
        }
    }

    #[test]
    fn failed_atomic_write_keeps_old_content() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination cannot be replaced by a file rename.
        let path = dir.path().join("rooms.txt");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_store(&path, &[Room::new(101, "Standard", true)], true).unwrap_err();
        assert!(matches!(err, InnkeeperError::StoreWrite { .. }));
        assert!(path.join("keep").exists());
    }
}
