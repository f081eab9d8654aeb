// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types shared by the stores and the reservation service.
//!
//! Field declaration order is the on-disk column order of each store.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::text::eq_ignore_case;

/// Identifies one of the two persisted collections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Rooms,
    Bookings,
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Positive room number, unique among rooms.
    pub room_number: u32,
    /// Free-text category label such as `Standard` or `Suite`.
    pub category: String,
    /// `false` while exactly one booking references this room.
    pub available: bool,
}

impl Room {
    pub fn new(room_number: u32, category: impl Into<String>, available: bool) -> Self {
        Self {
            room_number,
            category: category.into(),
            available,
        }
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, category: &str) -> bool {
        eq_ignore_case(&self.category, category)
    }

    /// True when the room is free and in `category`.
    pub fn is_available_in(&self, category: &str) -> bool {
        self.available && self.in_category(category)
    }
}

/// An active booking of one room by one guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub guest_name: String,
    /// Guest identifier; compared case-insensitively.
    pub email: String,
    pub room_number: u32,
    /// Category label of the room at booking time.
    pub category: String,
}

impl Booking {
    pub fn new(
        guest_name: impl Into<String>,
        email: impl Into<String>,
        room_number: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            email: email.into(),
            room_number,
            category: category.into(),
        }
    }

    /// Case-insensitive email match.
    pub fn belongs_to(&self, email: &str) -> bool {
        eq_ignore_case(&self.email, email)
    }

    /// True when this booking holds `room_number` for `email`.
    pub fn matches(&self, room_number: u32, email: &str) -> bool {
        self.room_number == room_number && self.belongs_to(email)
    }
}
