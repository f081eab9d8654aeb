// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record fixtures shared by service and shell tests.

use innkeeper_config::model::{InnkeeperConfig, RoomBlockConfig};
use innkeeper_core::{Booking, Room};

/// The inventory blocks a default configuration generates.
pub fn default_inventory() -> Vec<RoomBlockConfig> {
    InnkeeperConfig::default().inventory
}

/// The ten rooms generated from the default inventory, all available.
pub fn default_rooms() -> Vec<Room> {
    [
        (101, "Standard"),
        (102, "Standard"),
        (103, "Standard"),
        (104, "Standard"),
        (105, "Standard"),
        (201, "Deluxe"),
        (202, "Deluxe"),
        (203, "Deluxe"),
        (301, "Suite"),
        (302, "Suite"),
    ]
    .into_iter()
    .map(|(number, category)| Room::new(number, category, true))
    .collect()
}

/// `Alice <a@x.com>` holding room 201.
pub fn alice_in_deluxe() -> Booking {
    Booking::new("Alice", "a@x.com", 201, "Deluxe")
}
