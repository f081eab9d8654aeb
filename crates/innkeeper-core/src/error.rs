// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Innkeeper booking desk.

use thiserror::Error;

use crate::types::StoreKind;

/// The primary error type used across the store trait and the reservation service.
///
/// A missing store is not an error: loaders report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum InnkeeperError {
    /// A store exists but could not be read.
    #[error("failed to read {store} store: {source}")]
    StoreRead {
        store: StoreKind,
        source: std::io::Error,
    },

    /// A store could not be written. The in-memory state stays authoritative.
    #[error("failed to write {store} store: {source}")]
    StoreWrite {
        store: StoreKind,
        source: std::io::Error,
    },

    /// A stored line could not be decoded into a record.
    #[error("malformed record in {store} store at line {line}: {reason}")]
    MalformedRecord {
        store: StoreKind,
        line: u64,
        reason: String,
    },

    /// No available room matches the requested category.
    #[error("no available rooms in category: {category}")]
    NoMatchingRoom { category: String },

    /// No active booking matches the room number and email.
    #[error("booking not found for room {room_number} and email {email}")]
    NoMatchingBooking { room_number: u32, email: String },

    /// A free-text field cannot be stored as given.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
