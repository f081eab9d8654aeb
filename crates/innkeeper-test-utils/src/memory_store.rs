// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory record store for deterministic testing.
//!
//! `MemoryStore` implements `RecordStore` over shared state, so a test can
//! hand one clone to the code under test and keep another to inspect what
//! was saved. Writes to either store can be made to fail.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use innkeeper_core::{Booking, InnkeeperError, RecordStore, Room, StoreKind};

#[derive(Debug, Default)]
struct State {
    rooms: Option<Vec<Room>>,
    bookings: Option<Vec<Booking>>,
    fail_room_writes: bool,
    fail_booking_writes: bool,
    corrupt: Option<StoreKind>,
    room_saves: usize,
    booking_saves: usize,
}

/// A mock store for testing. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<State>>,
}

impl MemoryStore {
    /// Create a store where neither collection exists yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `rooms` and `bookings`.
    pub fn with_records(rooms: Vec<Room>, bookings: Vec<Booking>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.borrow_mut();
            state.rooms = Some(rooms);
            state.bookings = Some(bookings);
        }
        store
    }

    /// Create a store that holds `rooms` but has no bookings store yet.
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        let store = Self::new();
        store.state.borrow_mut().rooms = Some(rooms);
        store
    }

    /// Make subsequent writes of `store` fail (or succeed again).
    pub fn fail_writes(&self, store: StoreKind, fail: bool) {
        let mut state = self.state.borrow_mut();
        match store {
            StoreKind::Rooms => state.fail_room_writes = fail,
            StoreKind::Bookings => state.fail_booking_writes = fail,
        }
    }

    /// Make loads of `store` report a malformed first line.
    pub fn corrupt(&self, store: StoreKind) {
        self.state.borrow_mut().corrupt = Some(store);
    }

    /// Rooms as last saved, or `None` if the rooms store does not exist.
    pub fn saved_rooms(&self) -> Option<Vec<Room>> {
        self.state.borrow().rooms.clone()
    }

    /// Bookings as last saved, or `None` if the bookings store does not exist.
    pub fn saved_bookings(&self) -> Option<Vec<Booking>> {
        self.state.borrow().bookings.clone()
    }

    /// Number of successful saves of `store`.
    pub fn save_count(&self, store: StoreKind) -> usize {
        let state = self.state.borrow();
        match store {
            StoreKind::Rooms => state.room_saves,
            StoreKind::Bookings => state.booking_saves,
        }
    }

    fn check_corrupt(&self, store: StoreKind) -> Result<(), InnkeeperError> {
        if self.state.borrow().corrupt == Some(store) {
            return Err(InnkeeperError::MalformedRecord {
                store,
                line: 1,
                reason: "injected corruption".to_string(),
            });
        }
        Ok(())
    }
}

fn injected_write_failure(store: StoreKind) -> InnkeeperError {
    InnkeeperError::StoreWrite {
        store,
        source: io::Error::new(io::ErrorKind::PermissionDenied, "injected write failure"),
    }
}

impl RecordStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load_rooms(&self) -> Result<Option<Vec<Room>>, InnkeeperError> {
        self.check_corrupt(StoreKind::Rooms)?;
        Ok(self.saved_rooms())
    }

    fn save_rooms(&self, rooms: &[Room]) -> Result<(), InnkeeperError> {
        let mut state = self.state.borrow_mut();
        if state.fail_room_writes {
            return Err(injected_write_failure(StoreKind::Rooms));
        }
        state.rooms = Some(rooms.to_vec());
        state.room_saves += 1;
        Ok(())
    }

    fn load_bookings(&self) -> Result<Option<Vec<Booking>>, InnkeeperError> {
        self.check_corrupt(StoreKind::Bookings)?;
        Ok(self.saved_bookings())
    }

    fn save_bookings(&self, bookings: &[Booking]) -> Result<(), InnkeeperError> {
        let mut state = self.state.borrow_mut();
        if state.fail_booking_writes {
            return Err(injected_write_failure(StoreKind::Bookings));
        }
        state.bookings = Some(bookings.to_vec());
        state.booking_saves += 1;
        Ok(())
    }
}
