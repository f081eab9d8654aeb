// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The reservation service and its four front-desk operations.

use innkeeper_config::model::RoomBlockConfig;
use innkeeper_core::text::unstorable_reason;
use innkeeper_core::{Booking, InnkeeperError, RecordStore, Room};
use tracing::{debug, info, warn};

use crate::consistency::{self, ConsistencyIssue};
use crate::inventory;
use crate::payment::{self, PaymentReceipt};

/// Where the rooms came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomsSource {
    /// Read from the rooms store.
    Loaded,
    /// The rooms store did not exist; rooms were generated from the inventory.
    Generated,
}

/// Where the bookings came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingsSource {
    /// Read from the bookings store.
    Loaded,
    /// The bookings store did not exist; starting with no bookings.
    Fresh,
}

/// What happened while opening the service.
#[derive(Debug)]
pub struct OpenReport {
    pub rooms: RoomsSource,
    pub bookings: BookingsSource,
    /// Failures persisting generated rooms.
    pub write_failures: Vec<InnkeeperError>,
    /// Invariant violations found in the loaded records.
    pub issues: Vec<ConsistencyIssue>,
}

/// The result of a mutating operation together with any store writes that failed.
///
/// A failed write never undoes the operation: memory stays authoritative
/// for the rest of the run.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub write_failures: Vec<InnkeeperError>,
}

impl<T> Committed<T> {
    /// True when both stores were written.
    pub fn is_durable(&self) -> bool {
        self.write_failures.is_empty()
    }
}

/// A successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub payment: PaymentReceipt,
}

/// Owns the room and booking collections and the store they persist to.
pub struct ReservationService<S: RecordStore> {
    store: S,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl<S: RecordStore> ReservationService<S> {
    /// Load both collections from `store`.
    ///
    /// A missing rooms store is filled from `inventory` and written back
    /// immediately; a missing bookings store starts empty. Unreadable or
    /// malformed stores are returned as errors.
    pub fn open(store: S, inventory: &[RoomBlockConfig]) -> Result<(Self, OpenReport), InnkeeperError> {
        let mut write_failures = Vec::new();

        let (rooms, rooms_source) = match store.load_rooms()? {
            Some(rooms) => (rooms, RoomsSource::Loaded),
            None => {
                let rooms = inventory::generate(inventory);
                info!(
                    store = store.name(),
                    rooms = rooms.len(),
                    "rooms store not found, generated default inventory"
                );
                if let Err(e) = store.save_rooms(&rooms) {
                    warn!(error = %e, "could not persist generated rooms");
                    write_failures.push(e);
                }
                (rooms, RoomsSource::Generated)
            }
        };

        let (bookings, bookings_source) = match store.load_bookings()? {
            Some(bookings) => (bookings, BookingsSource::Loaded),
            None => {
                info!(store = store.name(), "bookings store not found, starting fresh");
                (Vec::new(), BookingsSource::Fresh)
            }
        };

        let service = Self {
            store,
            rooms,
            bookings,
        };

        let issues = service.consistency_issues();
        for issue in &issues {
            warn!(%issue, "stored records are inconsistent");
        }

        debug!(
            rooms = service.rooms.len(),
            bookings = service.bookings.len(),
            "reservation service ready"
        );

        let report = OpenReport {
            rooms: rooms_source,
            bookings: bookings_source,
            write_failures,
            issues,
        };
        Ok((service, report))
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Available rooms in `category` (case-insensitive), in stored order.
    ///
    /// An unknown category simply yields no rooms.
    pub fn available_rooms(&self, category: &str) -> Vec<&Room> {
        self.rooms
            .iter()
            .filter(|room| room.is_available_in(category))
            .collect()
    }

    /// Book the first available room in `category` for the guest.
    ///
    /// Selection is first-fit over stored room order. On success the room is
    /// marked unavailable, the booking is appended, both stores are
    /// rewritten, and the payment simulation runs.
    pub fn book_room(
        &mut self,
        guest_name: &str,
        email: &str,
        category: &str,
    ) -> Result<Committed<BookingConfirmation>, InnkeeperError> {
        check_field("name", guest_name)?;
        check_field("email", email)?;
        check_field("category", category)?;

        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.is_available_in(category))
            .ok_or_else(|| InnkeeperError::NoMatchingRoom {
                category: category.to_string(),
            })?;

        room.available = false;
        let booking = Booking::new(guest_name, email, room.room_number, room.category.as_str());
        self.bookings.push(booking.clone());

        info!(
            room_number = booking.room_number,
            category = %booking.category,
            "room booked"
        );

        let write_failures = self.persist();
        let payment = payment::simulate_payment(guest_name);

        Ok(Committed {
            value: BookingConfirmation { booking, payment },
            write_failures,
        })
    }

    /// Cancel the first booking of `room_number` made with `email` (case-insensitive).
    ///
    /// The room becomes available again and both stores are rewritten.
    pub fn cancel_booking(
        &mut self,
        room_number: u32,
        email: &str,
    ) -> Result<Committed<Booking>, InnkeeperError> {
        let index = self
            .bookings
            .iter()
            .position(|booking| booking.matches(room_number, email))
            .ok_or_else(|| InnkeeperError::NoMatchingBooking {
                room_number,
                email: email.to_string(),
            })?;

        let booking = self.bookings.remove(index);

        match self.rooms.iter_mut().find(|room| room.room_number == room_number) {
            Some(room) => room.available = true,
            None => warn!(room_number, "cancelled booking referenced an unknown room"),
        }

        info!(room_number, "booking cancelled");

        let write_failures = self.persist();
        Ok(Committed {
            value: booking,
            write_failures,
        })
    }

    /// Bookings made with `email` (case-insensitive), in stored order.
    pub fn bookings_for(&self, email: &str) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.belongs_to(email))
            .collect()
    }

    /// Invariant violations in the current in-memory state.
    pub fn consistency_issues(&self) -> Vec<ConsistencyIssue> {
        consistency::audit(&self.rooms, &self.bookings)
    }

    /// Rewrite both stores, rooms first. Each failure is logged and returned.
    fn persist(&self) -> Vec<InnkeeperError> {
        let results = [
            self.store.save_rooms(&self.rooms),
            self.store.save_bookings(&self.bookings),
        ];

        results
            .into_iter()
            .filter_map(Result::err)
            .inspect(|e| warn!(error = %e, "store write failed, keeping in-memory state"))
            .collect()
    }
}

fn check_field(field: &'static str, value: &str) -> Result<(), InnkeeperError> {
    match unstorable_reason(value) {
        Some(reason) => Err(InnkeeperError::InvalidField { field, reason }),
        None => Ok(()),
    }
}
