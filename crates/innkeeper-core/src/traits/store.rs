// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store trait for room and booking persistence backends.

use crate::error::InnkeeperError;
use crate::types::{Booking, Room};

/// Backend that loads and saves the two record collections.
///
/// Each collection lives in its own store and is always written whole.
/// Loaders return `Ok(None)` when the store does not exist yet, which the
/// caller treats as "initialize from defaults" rather than as a failure.
pub trait RecordStore {
    /// Human-readable backend name, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Loads all rooms in stored order.
    fn load_rooms(&self) -> Result<Option<Vec<Room>>, InnkeeperError>;

    /// Replaces the rooms store with `rooms`.
    fn save_rooms(&self, rooms: &[Room]) -> Result<(), InnkeeperError>;

    /// Loads all bookings in stored order.
    fn load_bookings(&self) -> Result<Option<Vec<Booking>>, InnkeeperError>;

    /// Replaces the bookings store with `bookings`.
    fn save_bookings(&self, bookings: &[Booking]) -> Result<(), InnkeeperError>;
}
