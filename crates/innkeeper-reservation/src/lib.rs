// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reservation service for the Innkeeper booking desk.
//!
//! [`ReservationService`] owns the room and booking collections for the
//! life of the process. It loads them once from a [`RecordStore`], answers
//! queries from memory, and rewrites both stores after every booking or
//! cancellation. Operations return structured results; rendering them for
//! a human is left to the caller.
//!
//! [`RecordStore`]: innkeeper_core::RecordStore

pub mod consistency;
pub mod inventory;
pub mod payment;
pub mod service;

pub use consistency::ConsistencyIssue;
pub use payment::PaymentReceipt;
pub use service::{
    BookingConfirmation, BookingsSource, Committed, OpenReport, ReservationService, RoomsSource,
};
