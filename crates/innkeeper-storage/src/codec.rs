// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line codec for the comma-delimited store format.
//!
//! Fields are positional. A value containing a comma cannot round-trip: it
//! is written verbatim and shifts every following field on reload. Such a
//! line is reported as [`InnkeeperError::MalformedRecord`].

use std::io;

use innkeeper_core::{Booking, InnkeeperError, Room, StoreKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type stored one-per-line in a flat file.
pub trait FlatRecord: Serialize + DeserializeOwned {
    /// Which store holds this record type.
    const STORE: StoreKind;
    /// Number of comma-separated fields per line.
    const FIELDS: usize;
}

impl FlatRecord for Room {
    const STORE: StoreKind = StoreKind::Rooms;
    const FIELDS: usize = 3;
}

impl FlatRecord for Booking {
    const STORE: StoreKind = StoreKind::Bookings;
    const FIELDS: usize = 4;
}

/// Decode every line of `reader` into a record, in order.
pub fn decode<T: FlatRecord, R: io::Read>(reader: R) -> Result<Vec<T>, InnkeeperError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| read_error(T::STORE, e))?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() != T::FIELDS {
            return Err(InnkeeperError::MalformedRecord {
                store: T::STORE,
                line,
                reason: format!("expected {} fields, found {}", T::FIELDS, record.len()),
            });
        }

        let value = record
            .deserialize::<T>(None)
            .map_err(|e| InnkeeperError::MalformedRecord {
                store: T::STORE,
                line,
                reason: e.to_string(),
            })?;
        records.push(value);
    }

    Ok(records)
}

/// Encode `records` into `writer`, one line each, and hand the flushed writer back.
pub fn encode<T: FlatRecord, W: io::Write>(writer: W, records: &[T]) -> Result<W, InnkeeperError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in records {
        wtr.serialize(record).map_err(|e| write_error(T::STORE, e))?;
    }

    wtr.into_inner().map_err(|e| InnkeeperError::StoreWrite {
        store: T::STORE,
        source: e.into_error(),
    })
}

fn read_error(store: StoreKind, err: csv::Error) -> InnkeeperError {
    let line = err.position().map_or(0, |p| p.line());
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => InnkeeperError::StoreRead { store, source },
        _ => InnkeeperError::MalformedRecord {
            store,
            line,
            reason,
        },
    }
}

fn write_error(store: StoreKind, err: csv::Error) -> InnkeeperError {
    let reason = err.to_string();
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        _ => io::Error::new(io::ErrorKind::InvalidData, reason),
    };
    InnkeeperError::StoreWrite { store, source }
}
