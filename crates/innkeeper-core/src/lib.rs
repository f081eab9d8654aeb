// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Innkeeper booking desk.
//!
//! This crate provides the record types, error type, and the store trait
//! shared by the rest of the workspace. Persistence backends implement
//! [`RecordStore`]; the reservation service is generic over it.

pub mod error;
pub mod text;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::InnkeeperError;
pub use text::eq_ignore_case;
pub use traits::RecordStore;
pub use types::{Booking, Room, StoreKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn innkeeper_error_has_all_variants() {
        let _read = InnkeeperError::StoreRead {
            store: StoreKind::Rooms,
            source: std::io::Error::other("test"),
        };
        let _write = InnkeeperError::StoreWrite {
            store: StoreKind::Bookings,
            source: std::io::Error::other("test"),
        };
        let _malformed = InnkeeperError::MalformedRecord {
            store: StoreKind::Rooms,
            line: 3,
            reason: "test".into(),
        };
        let _room = InnkeeperError::NoMatchingRoom {
            category: "Suite".into(),
        };
        let _booking = InnkeeperError::NoMatchingBooking {
            room_number: 201,
            email: "a@x.com".into(),
        };
        let _field = InnkeeperError::InvalidField {
            field: "name",
            reason: "test".into(),
        };
        let _internal = InnkeeperError::Internal("test".into());
    }

    #[test]
    fn store_kind_display_and_parse() {
        use std::str::FromStr;

        for kind in [StoreKind::Rooms, StoreKind::Bookings] {
            let s = kind.to_string();
            assert_eq!(StoreKind::from_str(&s).expect("should parse back"), kind);
        }
        assert_eq!(StoreKind::Rooms.to_string(), "rooms");
    }

    #[test]
    fn store_write_error_names_the_store() {
        let err = InnkeeperError::StoreWrite {
            store: StoreKind::Bookings,
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.to_string(), "failed to write bookings store: disk full");
    }

    #[test]
    fn record_store_is_object_safe() {
        fn _assert_object_safe(_: &dyn RecordStore) {}
    }
}
