// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat-file persistence layer for the Innkeeper booking desk.
//!
//! Rooms and bookings each live in their own text file, one record per line,
//! fields joined by commas with no header, quoting, or escaping:
//!
//! ```text
//! 101,Standard,true            rooms: room_number,category,available
//! Alice,a@x.com,201,Deluxe     bookings: guest_name,email,room_number,category
//! ```
//!
//! Every save rewrites the whole file.

pub mod codec;
pub mod flat_file;
pub mod writer;

pub use codec::FlatRecord;
pub use flat_file::FlatFileStore;
