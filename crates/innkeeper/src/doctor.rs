// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `innkeeper doctor` command implementation.
//!
//! Reads the configured stores without creating or rewriting them and
//! reports record counts and cross-store consistency problems.

use std::io::IsTerminal;

use innkeeper_config::model::InnkeeperConfig;
use innkeeper_core::{Booking, InnkeeperError, RecordStore, Room};
use innkeeper_reservation::{consistency, inventory};
use innkeeper_storage::FlatFileStore;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
        }
    }
}

/// Run the `innkeeper doctor` command.
///
/// Returns `Ok(true)` when no check failed. With `--plain`, disables colored output.
pub fn run_doctor(config: &InnkeeperConfig, plain: bool) -> Result<bool, InnkeeperError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let store = FlatFileStore::new(&config.storage);

    let mut results = vec![check_config(config)];
    results.extend(run_checks(&store, config));

    println!();
    println!("  innkeeper doctor");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", render_line(result, use_color));
    }
    println!();

    let fail_count = count(&results, CheckStatus::Fail);
    let warn_count = count(&results, CheckStatus::Warn);
    if fail_count + warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }
    println!();

    Ok(fail_count == 0)
}

fn count(results: &[CheckResult], status: CheckStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

/// Store checks followed by the consistency audit. Never writes to `store`.
pub fn run_checks<S: RecordStore>(store: &S, config: &InnkeeperConfig) -> Vec<CheckResult> {
    let rooms = store.load_rooms();
    let bookings = store.load_bookings();

    let mut results = vec![
        check_rooms(&rooms, &config.storage.rooms_path),
        check_bookings(&bookings, &config.storage.bookings_path),
    ];

    // A store that cannot be read leaves nothing meaningful to audit.
    if let (Ok(rooms), Ok(bookings)) = (rooms, bookings) {
        let rooms = rooms.unwrap_or_else(|| inventory::generate(&config.inventory));
        let bookings = bookings.unwrap_or_default();
        results.push(check_consistency(&rooms, &bookings));
    }

    results
}

fn check_config(config: &InnkeeperConfig) -> CheckResult {
    let blocks = config.inventory.len();
    let rooms: u64 = config
        .inventory
        .iter()
        .map(|block| u64::from(block.count))
        .sum();
    CheckResult::new(
        "Configuration",
        CheckStatus::Pass,
        format!("valid ({blocks} inventory blocks, {rooms} rooms)"),
    )
}

fn check_rooms(loaded: &Result<Option<Vec<Room>>, InnkeeperError>, path: &str) -> CheckResult {
    match loaded {
        Ok(Some(rooms)) => {
            let available = rooms.iter().filter(|room| room.available).count();
            CheckResult::new(
                "Rooms store",
                CheckStatus::Pass,
                format!("{} rooms, {available} available", rooms.len()),
            )
        }
        Ok(None) => CheckResult::new(
            "Rooms store",
            CheckStatus::Warn,
            format!("not found: {path} (default rooms will be created on first run)"),
        ),
        Err(e) => CheckResult::new("Rooms store", CheckStatus::Fail, e.to_string()),
    }
}

fn check_bookings(
    loaded: &Result<Option<Vec<Booking>>, InnkeeperError>,
    path: &str,
) -> CheckResult {
    match loaded {
        Ok(Some(bookings)) => CheckResult::new(
            "Bookings store",
            CheckStatus::Pass,
            format!("{} bookings", bookings.len()),
        ),
        Ok(None) => CheckResult::new(
            "Bookings store",
            CheckStatus::Warn,
            format!("not found: {path} (will start empty)"),
        ),
        Err(e) => CheckResult::new("Bookings store", CheckStatus::Fail, e.to_string()),
    }
}

fn check_consistency(rooms: &[Room], bookings: &[Booking]) -> CheckResult {
    let issues = consistency::audit(rooms, bookings);
    match issues.as_slice() {
        [] => CheckResult::new("Consistency", CheckStatus::Pass, "rooms and bookings agree"),
        [only] => CheckResult::new("Consistency", CheckStatus::Warn, only.to_string()),
        [first, rest @ ..] => CheckResult::new(
            "Consistency",
            CheckStatus::Warn,
            format!("{first} (and {} more)", rest.len()),
        ),
    }
}

fn render_line(result: &CheckResult, use_color: bool) -> String {
    use colored::Colorize;

    let (tag, message) = match result.status {
        CheckStatus::Pass if use_color => ("[OK]  ".green(), result.message.normal()),
        CheckStatus::Warn if use_color => ("[WARN]".yellow(), result.message.yellow()),
        CheckStatus::Fail if use_color => ("[FAIL]".red(), result.message.red()),
        CheckStatus::Pass => ("[OK]  ".normal(), result.message.normal()),
        CheckStatus::Warn => ("[WARN]".normal(), result.message.normal()),
        CheckStatus::Fail => ("[FAIL]".normal(), result.message.normal()),
    };
    format!("    {tag} {:<16} {message}", result.name)
}
