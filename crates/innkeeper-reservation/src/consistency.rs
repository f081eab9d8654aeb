// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cross-collection invariant checks.
//!
//! The two stores are written one after the other with no transaction, so
//! they can disagree after a failed write or a manual edit. The audit
//! reports every disagreement; it never repairs anything.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use innkeeper_core::{Booking, Room};

/// One violated invariant between rooms and bookings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// More than one room carries this number.
    DuplicateRoom { room_number: u32, count: usize },
    /// A booking references a room that does not exist.
    UnknownRoom { room_number: u32, email: String },
    /// More than one booking holds this room.
    DoubleBooked { room_number: u32, count: usize },
    /// The room is marked available but a booking holds it.
    BookedButAvailable { room_number: u32 },
    /// The room is marked unavailable but no booking holds it.
    UnavailableWithoutBooking { room_number: u32 },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRoom { room_number, count } => {
                write!(f, "room {room_number} appears {count} times in the rooms store")
            }
            Self::UnknownRoom { room_number, email } => {
                write!(f, "booking for {email} references unknown room {room_number}")
            }
            Self::DoubleBooked { room_number, count } => {
                write!(f, "room {room_number} is held by {count} bookings")
            }
            Self::BookedButAvailable { room_number } => {
                write!(f, "room {room_number} is marked available but has a booking")
            }
            Self::UnavailableWithoutBooking { room_number } => {
                write!(f, "room {room_number} is marked unavailable but has no booking")
            }
        }
    }
}

/// Check that every unavailable room has exactly one booking and every
/// available room has none.
///
/// Issues are grouped by kind; within a kind they follow stored order.
pub fn audit(rooms: &[Room], bookings: &[Booking]) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();

    let mut room_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for room in rooms {
        *room_counts.entry(room.room_number).or_default() += 1;
    }
    issues.extend(
        room_counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&room_number, &count)| ConsistencyIssue::DuplicateRoom { room_number, count }),
    );

    let mut booking_counts: BTreeMap<u32, usize> = BTreeMap::new();
    for booking in bookings {
        *booking_counts.entry(booking.room_number).or_default() += 1;
        if !room_counts.contains_key(&booking.room_number) {
            issues.push(ConsistencyIssue::UnknownRoom {
                room_number: booking.room_number,
                email: booking.email.clone(),
            });
        }
    }
    issues.extend(
        booking_counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&room_number, &count)| ConsistencyIssue::DoubleBooked { room_number, count }),
    );

    let mut seen = BTreeSet::new();
    for room in rooms.iter().filter(|r| seen.insert(r.room_number)) {
        let booked = booking_counts.contains_key(&room.room_number);
        if room.available && booked {
            issues.push(ConsistencyIssue::BookedButAvailable {
                room_number: room.room_number,
            });
        } else if !room.available && !booked {
            issues.push(ConsistencyIssue::UnavailableWithoutBooking {
                room_number: room.room_number,
            });
        }
    }

    issues
}
