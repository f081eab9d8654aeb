// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as non-empty store paths and non-overlapping inventory blocks.

use std::ops::RangeInclusive;

use innkeeper_core::text::unstorable_reason;

use crate::diagnostic::ConfigError;
use crate::model::{InnkeeperConfig, MAX_INVENTORY_ROOMS};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &InnkeeperConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.rooms_path.trim().is_empty() {
        errors.push(validation("storage.rooms_path must not be empty"));
    }

    if config.storage.bookings_path.trim().is_empty() {
        errors.push(validation("storage.bookings_path must not be empty"));
    }

    if !config.storage.rooms_path.trim().is_empty()
        && config.storage.rooms_path == config.storage.bookings_path
    {
        errors.push(validation(format!(
            "storage.rooms_path and storage.bookings_path must differ, both are `{}`",
            config.storage.rooms_path
        )));
    }

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(validation(format!(
            "logging.level `{}` is not one of: {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    // Ranges of the well-formed blocks seen so far, with their index.
    let mut claimed: Vec<(usize, RangeInclusive<u32>)> = Vec::new();
    let mut total_rooms: u64 = 0;
    for (i, block) in config.inventory.iter().enumerate() {
        if block.category.trim().is_empty() {
            errors.push(validation(format!(
                "inventory[{i}].category must not be empty"
            )));
        } else if let Some(reason) = unstorable_reason(&block.category) {
            errors.push(validation(format!("inventory[{i}].category {reason}")));
        }

        if block.first_room == 0 {
            errors.push(validation(format!(
                "inventory[{i}].first_room must be at least 1"
            )));
        }

        if block.count == 0 {
            errors.push(validation(format!("inventory[{i}].count must be at least 1")));
            continue;
        }
        total_rooms += u64::from(block.count);

        let Some(range) = block.room_numbers() else {
            errors.push(validation(format!(
                "inventory[{i}] runs past the largest room number {}",
                u32::MAX
            )));
            continue;
        };

        let overlap = claimed.iter().find_map(|(j, other)| {
            let start = (*range.start()).max(*other.start());
            let end = (*range.end()).min(*other.end());
            (start <= end).then_some((*j, start))
        });
        if let Some((first, number)) = overlap {
            errors.push(validation(format!(
                "inventory[{i}] repeats room {number} already generated by inventory[{first}]"
            )));
        }
        claimed.push((i, range));
    }

    if total_rooms > MAX_INVENTORY_ROOMS {
        errors.push(validation(format!(
            "inventory generates {total_rooms} rooms, more than the limit of {MAX_INVENTORY_ROOMS}"
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}
