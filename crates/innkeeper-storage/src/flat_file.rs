// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat-file implementation of the [`RecordStore`] trait.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use innkeeper_config::model::StorageConfig;
use innkeeper_core::{Booking, InnkeeperError, RecordStore, Room};
use tracing::debug;

use crate::codec::{self, FlatRecord};
use crate::writer;

/// Store backed by two comma-delimited text files.
///
/// Holds no records itself; every call opens, reads or rewrites, and closes
/// the relevant file. Assumes it is the only process touching the files.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    rooms_path: PathBuf,
    bookings_path: PathBuf,
    atomic_writes: bool,
}

impl FlatFileStore {
    /// Create a store for the paths in `config`. No file is touched until first use.
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            rooms_path: PathBuf::from(&config.rooms_path),
            bookings_path: PathBuf::from(&config.bookings_path),
            atomic_writes: config.atomic_writes,
        }
    }

    pub fn rooms_path(&self) -> &Path {
        &self.rooms_path
    }

    pub fn bookings_path(&self) -> &Path {
        &self.bookings_path
    }

    fn load<T: FlatRecord>(&self, path: &Path) -> Result<Option<Vec<T>>, InnkeeperError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(store = %T::STORE, path = %path.display(), "store not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(InnkeeperError::StoreRead {
                    store: T::STORE,
                    source,
                });
            }
        };

        let records = codec::decode::<T, _>(file)?;
        debug!(
            store = %T::STORE,
            path = %path.display(),
            records = records.len(),
            "store loaded"
        );
        Ok(Some(records))
    }

    fn save<T: FlatRecord>(&self, path: &Path, records: &[T]) -> Result<(), InnkeeperError> {
        writer::write_store(path, records, self.atomic_writes)?;
        debug!(
            store = %T::STORE,
            path = %path.display(),
            records = records.len(),
            atomic = self.atomic_writes,
            "store saved"
        );
        Ok(())
    }
}

impl RecordStore for FlatFileStore {
    fn name(&self) -> &str {
        "flat-file"
    }

    fn load_rooms(&self) -> Result<Option<Vec<Room>>, InnkeeperError> {
        self.load(&self.rooms_path)
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<(), InnkeeperError> {
        self.save(&self.rooms_path, rooms)
    }

    fn load_bookings(&self) -> Result<Option<Vec<Booking>>, InnkeeperError> {
        self.load(&self.bookings_path)
    }

    fn save_bookings(&self, bookings: &[Booking]) -> Result<(), InnkeeperError> {
        self.save(&self.bookings_path, bookings)
    }
}
