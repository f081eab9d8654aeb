// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Innkeeper booking desk.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Innkeeper configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InnkeeperConfig {
    /// Front-desk presentation settings.
    #[serde(default)]
    pub hotel: HotelConfig,

    /// Flat-file store settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Room blocks generated when the rooms store does not exist yet.
    #[serde(default = "default_inventory")]
    pub inventory: Vec<RoomBlockConfig>,
}

impl Default for InnkeeperConfig {
    fn default() -> Self {
        Self {
            hotel: HotelConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            inventory: default_inventory(),
        }
    }
}

/// Front-desk presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HotelConfig {
    /// Title shown above the menu.
    #[serde(default = "default_hotel_name")]
    pub name: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: default_hotel_name(),
        }
    }
}

fn default_hotel_name() -> String {
    "Hotel Booking System".to_string()
}

/// Flat-file store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the rooms store.
    #[serde(default = "default_rooms_path")]
    pub rooms_path: String,

    /// Path of the bookings store.
    #[serde(default = "default_bookings_path")]
    pub bookings_path: String,

    /// Write each store to a temporary file and rename it into place.
    #[serde(default)]
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            rooms_path: default_rooms_path(),
            bookings_path: default_bookings_path(),
            atomic_writes: false,
        }
    }
}

fn default_rooms_path() -> String {
    "rooms.txt".to_string()
}

fn default_bookings_path() -> String {
    "bookings.txt".to_string()
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Largest number of rooms the inventory blocks may generate in total.
pub const MAX_INVENTORY_ROOMS: u64 = 10_000;

/// A run of consecutive room numbers sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoomBlockConfig {
    /// Category label given to every room in the block.
    pub category: String,

    /// First room number of the block.
    pub first_room: u32,

    /// Number of rooms in the block.
    pub count: u32,
}

impl RoomBlockConfig {
    pub fn new(category: impl Into<String>, first_room: u32, count: u32) -> Self {
        Self {
            category: category.into(),
            first_room,
            count,
        }
    }

    /// Room numbers in this block, or `None` if the block runs past `u32::MAX`.
    pub fn room_numbers(&self) -> Option<std::ops::RangeInclusive<u32>> {
        let last = self.first_room.checked_add(self.count.checked_sub(1)?)?;
        Some(self.first_room..=last)
    }
}

fn default_inventory() -> Vec<RoomBlockConfig> {
    vec![
        RoomBlockConfig::new("Standard", 101, 5),
        RoomBlockConfig::new("Deluxe", 201, 3),
        RoomBlockConfig::new("Suite", 301, 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inventory_matches_classic_layout() {
        let config = InnkeeperConfig::default();
        let numbers: Vec<u32> = config
            .inventory
            .iter()
            .flat_map(|b| b.room_numbers().expect("default blocks fit"))
            .collect();
        assert_eq!(
            numbers,
            vec![101, 102, 103, 104, 105, 201, 202, 203, 301, 302]
        );
    }

    #[test]
    fn empty_block_has_no_room_numbers() {
        assert!(RoomBlockConfig::new("Suite", 301, 0).room_numbers().is_none());
    }

    #[test]
    fn block_past_u32_max_has_no_room_numbers() {
        assert!(RoomBlockConfig::new("Suite", u32::MAX, 2).room_numbers().is_none());
        assert_eq!(
            RoomBlockConfig::new("Suite", u32::MAX, 1).room_numbers(),
            Some(u32::MAX..=u32::MAX)
        );
    }
}
