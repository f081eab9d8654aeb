// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `innkeeper shell` command implementation.
//!
//! Opens the flat-file stores, then runs the numbered front-desk menu until
//! the operator picks `0` or input ends. All operator-facing text is written
//! here; the reservation service only returns structured results.

use std::io::{self, Write};

use colored::Colorize;
use innkeeper_config::model::InnkeeperConfig;
use innkeeper_core::{InnkeeperError, RecordStore};
use innkeeper_reservation::{BookingsSource, OpenReport, ReservationService, RoomsSource};
use innkeeper_storage::FlatFileStore;
use tracing::debug;

use crate::input::{self, InputSource};

const CATEGORY_PROMPT: &str = "Enter room category (Standard/Deluxe/Suite): ";
const EMAIL_PROMPT: &str = "Enter your email: ";

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    ShowAvailable,
    Book,
    Cancel,
    ViewBookings,
}

impl MenuChoice {
    /// Parse an operator selection; anything but `0`..=`4` is `None`.
    fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<i64>().ok()? {
            0 => Some(Self::Exit),
            1 => Some(Self::ShowAvailable),
            2 => Some(Self::Book),
            3 => Some(Self::Cancel),
            4 => Some(Self::ViewBookings),
            _ => None,
        }
    }
}

/// Whether the menu loop keeps going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs the `innkeeper shell` interactive menu against the configured stores.
pub fn run_shell(config: &InnkeeperConfig) -> Result<(), InnkeeperError> {
    let store = FlatFileStore::new(&config.storage);
    debug!(
        rooms = %store.rooms_path().display(),
        bookings = %store.bookings_path().display(),
        "opening flat-file stores"
    );

    let (mut service, report) = ReservationService::open(store, &config.inventory)?;

    let mut out = io::stdout();
    let mut input = input::stdin_source().map_err(console_error)?;

    report_startup(&mut out, &report).map_err(console_error)?;
    run_menu(&config.hotel.name, &mut service, input.as_mut(), &mut out).map_err(console_error)
}

fn console_error(e: io::Error) -> InnkeeperError {
    InnkeeperError::Internal(format!("console I/O failed: {e}"))
}

/// Tell the operator how the stores were initialized.
pub fn report_startup<W: Write>(out: &mut W, report: &OpenReport) -> io::Result<()> {
    if report.rooms == RoomsSource::Generated {
        writeln!(out, "No rooms file found. Creating default rooms...")?;
    }
    if report.bookings == BookingsSource::Fresh {
        writeln!(out, "No bookings file found. Starting fresh.")?;
    }
    write_failures(out, &report.write_failures)?;
    for issue in &report.issues {
        writeln!(out, "{}", format!("warning: {issue}").yellow())?;
    }
    Ok(())
}

/// Show the menu and dispatch selections until exit or end of input.
pub fn run_menu<S: RecordStore, W: Write>(
    title: &str,
    service: &mut ReservationService<S>,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<()> {
    loop {
        write_menu(out, title)?;

        let Some(line) = input.read_line("Choose an option: ")? else {
            return farewell(out);
        };

        let flow = match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => Flow::Exit,
            Some(MenuChoice::ShowAvailable) => show_available(service, input, out)?,
            Some(MenuChoice::Book) => book(service, input, out)?,
            Some(MenuChoice::Cancel) => cancel(service, input, out)?,
            Some(MenuChoice::ViewBookings) => view_bookings(service, input, out)?,
            None => {
                writeln!(out, "{}", "Invalid option. Please try again.".red())?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            return farewell(out);
        }
    }
}

fn write_menu<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("=== {title} ===").bold())?;
    writeln!(out, "1. Show Available Rooms")?;
    writeln!(out, "2. Book a Room")?;
    writeln!(out, "3. Cancel Booking")?;
    writeln!(out, "4. View My Bookings")?;
    writeln!(out, "0. Exit")?;
    out.flush()
}

fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting the system. Goodbye!")?;
    out.flush()
}

fn show_available<S: RecordStore, W: Write>(
    service: &ReservationService<S>,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<Flow> {
    let Some(category) = input.read_line(CATEGORY_PROMPT)? else {
        return Ok(Flow::Exit);
    };

    let rooms = service.available_rooms(&category);
    if rooms.is_empty() {
        writeln!(
            out,
            "{}",
            format!("No available rooms in category: {category}").yellow()
        )?;
    }
    for room in rooms {
        writeln!(out, "Room {} is available.", room.room_number)?;
    }
    Ok(Flow::Continue)
}

fn book<S: RecordStore, W: Write>(
    service: &mut ReservationService<S>,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<Flow> {
    let Some(name) = input.read_line("Enter your name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(email) = input.read_line(EMAIL_PROMPT)? else {
        return Ok(Flow::Exit);
    };
    let Some(category) = input.read_line(CATEGORY_PROMPT)? else {
        return Ok(Flow::Exit);
    };

    match service.book_room(&name, &email, &category) {
        Ok(committed) => {
            let confirmation = &committed.value;
            writeln!(
                out,
                "Processing payment for {}...",
                confirmation.payment.guest_name
            )?;
            if confirmation.payment.approved {
                writeln!(out, "Payment successful.")?;
            }
            writeln!(
                out,
                "{}",
                format!(
                    "Room {} booked successfully!",
                    confirmation.booking.room_number
                )
                .green()
            )?;
            write_failures(out, &committed.write_failures)?;
        }
        Err(e) => write_error(out, &e)?,
    }
    Ok(Flow::Continue)
}

fn cancel<S: RecordStore, W: Write>(
    service: &mut ReservationService<S>,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<Flow> {
    let Some(room) = input.read_line("Enter room number to cancel: ")? else {
        return Ok(Flow::Exit);
    };
    let Ok(room_number) = room.trim().parse::<u32>() else {
        writeln!(out, "{}", "Invalid room number.".red())?;
        return Ok(Flow::Continue);
    };
    let Some(email) = input.read_line(EMAIL_PROMPT)? else {
        return Ok(Flow::Exit);
    };

    match service.cancel_booking(room_number, &email) {
        Ok(committed) => {
            writeln!(out, "{}", "Booking canceled successfully.".green())?;
            write_failures(out, &committed.write_failures)?;
        }
        Err(e) => write_error(out, &e)?,
    }
    Ok(Flow::Continue)
}

fn view_bookings<S: RecordStore, W: Write>(
    service: &ReservationService<S>,
    input: &mut dyn InputSource,
    out: &mut W,
) -> io::Result<Flow> {
    let Some(email) = input.read_line(EMAIL_PROMPT)? else {
        return Ok(Flow::Exit);
    };

    let bookings = service.bookings_for(&email);
    if bookings.is_empty() {
        writeln!(
            out,
            "{}",
            format!("No bookings found for email: {email}").yellow()
        )?;
    }
    for booking in bookings {
        writeln!(
            out,
            "Booking -> Room: {}, Category: {}",
            booking.room_number, booking.category
        )?;
    }
    Ok(Flow::Continue)
}

/// One line per failed store write; the operation itself already succeeded in memory.
fn write_failures<W: Write>(out: &mut W, failures: &[InnkeeperError]) -> io::Result<()> {
    for failure in failures {
        let line = match failure {
            InnkeeperError::StoreWrite { store, .. } => format!("Error saving {store}."),
            other => format!("error: {other}"),
        };
        writeln!(out, "{}", line.red())?;
    }
    Ok(())
}

fn write_error<W: Write>(out: &mut W, err: &InnkeeperError) -> io::Result<()> {
    match err {
        InnkeeperError::NoMatchingRoom { category } => writeln!(
            out,
            "{}",
            format!("No available rooms in category: {category}").yellow()
        ),
        InnkeeperError::NoMatchingBooking { room_number, email } => writeln!(
            out,
            "{}",
            format!("Booking not found for room {room_number} and email {email}").yellow()
        ),
        InnkeeperError::InvalidField { field, reason } => {
            writeln!(out, "{}", format!("Invalid {field}: {reason}").red())
        }
        other => writeln!(out, "{}", format!("error: {other}").red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LineInput;
    use innkeeper_core::{Booking, StoreKind};
    use innkeeper_test_utils::{MemoryStore, fixtures};

    /// Run a scripted session against a fresh default inventory.
    fn session(script: &str) -> (String, ReservationService<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let (service, _) =
            ReservationService::open(store.clone(), &fixtures::default_inventory()).unwrap();
        session_with(service, store, script)
    }

    fn session_with(
        mut service: ReservationService<MemoryStore>,
        store: MemoryStore,
        script: &str,
    ) -> (String, ReservationService<MemoryStore>, MemoryStore) {
        colored::control::set_override(false);
        let mut input = LineInput::new(script.as_bytes(), io::sink());
        let mut out = Vec::new();
        run_menu("Hotel Booking System", &mut service, &mut input, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), service, store)
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Book));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::ViewBookings));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("book"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_prints_menu_once_and_says_goodbye() {
        let (out, _, _) = session("0\n");
        assert_eq!(out.matches("=== Hotel Booking System ===").count(), 1);
        assert!(out.contains("1. Show Available Rooms"));
        assert!(out.contains("0. Exit"));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, _, _) = session("");
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn invalid_options_loop_back_to_menu() {
        let (out, _, _) = session("9\nabc\n0\n");
        assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
        assert_eq!(out.matches("=== Hotel Booking System ===").count(), 3);
    }

    #[test]
    fn undecodable_menu_choice_is_an_invalid_option() {
        colored::control::set_override(false);
        let store = MemoryStore::new();
        let (mut service, _) =
            ReservationService::open(store, &fixtures::default_inventory()).unwrap();
        let mut input = LineInput::new(&b"\xff\n0\n"[..], io::sink());
        let mut out = Vec::new();

        run_menu("Hotel Booking System", &mut service, &mut input, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Invalid option. Please try again."));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn show_available_lists_rooms_in_order() {
        let (out, _, _) = session("1\nsuite\n0\n");
        let first = out.find("Room 301 is available.").expect("301 listed");
        let second = out.find("Room 302 is available.").expect("302 listed");
        assert!(first < second);
        assert!(!out.contains("Room 101 is available."));
    }

    #[test]
    fn show_available_for_unknown_category() {
        let (out, _, _) = session("1\nPenthouse\n0\n");
        assert!(out.contains("No available rooms in category: Penthouse"));
    }

    #[test]
    fn booking_prints_payment_then_confirmation() {
        let (out, service, store) = session("2\nAlice\na@x.com\nDeluxe\n0\n");

        let payment = out.find("Processing payment for Alice...").expect("payment line");
        let approved = out.find("Payment successful.").expect("approval line");
        let booked = out.find("Room 201 booked successfully!").expect("confirmation");
        assert!(payment < approved && approved < booked);

        assert_eq!(service.bookings(), &[fixtures::alice_in_deluxe()]);
        assert_eq!(store.saved_bookings(), Some(vec![fixtures::alice_in_deluxe()]));
    }

    #[test]
    fn booking_sold_out_category_reports_miss() {
        let (out, service, _) = session("2\nA\na@x.com\nSuite\n2\nB\nb@x.com\nSuite\n2\nC\nc@x.com\nSuite\n0\n");
        assert_eq!(out.matches("booked successfully!").count(), 2);
        assert!(out.contains("No available rooms in category: Suite"));
        assert_eq!(service.bookings().len(), 2);
    }

    #[test]
    fn booking_reports_each_failed_store_write() {
        let store = MemoryStore::new();
        let (service, _) =
            ReservationService::open(store.clone(), &fixtures::default_inventory()).unwrap();
        store.fail_writes(StoreKind::Rooms, true);
        store.fail_writes(StoreKind::Bookings, true);

        let (out, service, _) = session_with(service, store, "2\nAlice\na@x.com\nDeluxe\n0\n");

        assert!(out.contains("Room 201 booked successfully!"));
        assert!(out.contains("Error saving rooms."));
        assert!(out.contains("Error saving bookings."));
        assert_eq!(service.bookings().len(), 1);
    }

    #[test]
    fn booking_name_with_comma_is_refused() {
        let (out, service, _) = session("2\nSmith, John\nj@x.com\nStandard\n0\n");
        assert!(out.contains("Invalid name: must not contain `,`"));
        assert!(service.bookings().is_empty());
    }

    #[test]
    fn cancel_round_trip() {
        let (out, service, _) = session("2\nAlice\na@x.com\nDeluxe\n3\n201\nA@X.COM\n0\n");
        assert!(out.contains("Booking canceled successfully."));
        assert!(service.bookings().is_empty());
        assert!(service.rooms().iter().all(|r| r.available));
    }

    #[test]
    fn cancel_unknown_booking_reports_room_and_email() {
        let (out, _, _) = session("3\n201\na@x.com\n0\n");
        assert!(out.contains("Booking not found for room 201 and email a@x.com"));
    }

    #[test]
    fn cancel_with_non_numeric_room_returns_to_menu() {
        let (out, _, _) = session("3\ntwo-oh-one\n0\n");
        assert!(out.contains("Invalid room number."));
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
    }

    #[test]
    fn view_bookings_lists_matches() {
        let store = MemoryStore::with_records(
            vec![
                innkeeper_core::Room::new(201, "Deluxe", false),
                innkeeper_core::Room::new(301, "Suite", false),
            ],
            vec![
                fixtures::alice_in_deluxe(),
                Booking::new("Bob", "b@x.com", 301, "Suite"),
            ],
        );
        let (service, _) = ReservationService::open(store.clone(), &[]).unwrap();

        let (out, _, _) = session_with(service, store, "4\nA@x.com\n0\n");

        assert!(out.contains("Booking -> Room: 201, Category: Deluxe"));
        assert!(!out.contains("Room: 301"));
    }

    #[test]
    fn view_bookings_with_none_present() {
        let (out, _, _) = session("4\na@x.com\n0\n");
        assert!(out.contains("No bookings found for email: a@x.com"));
    }

    #[test]
    fn end_of_input_mid_booking_changes_nothing() {
        let (out, service, _) = session("2\nAlice\n");
        assert!(out.ends_with("Exiting the system. Goodbye!\n"));
        assert!(service.bookings().is_empty());
    }

    #[test]
    fn startup_report_for_first_run() {
        colored::control::set_override(false);
        let report = OpenReport {
            rooms: RoomsSource::Generated,
            bookings: BookingsSource::Fresh,
            write_failures: vec![InnkeeperError::StoreWrite {
                store: StoreKind::Rooms,
                source: io::Error::other("read-only"),
            }],
            issues: vec![],
        };
        let mut out = Vec::new();
        report_startup(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No rooms file found. Creating default rooms...\n\
             No bookings file found. Starting fresh.\n\
             Error saving rooms.\n"
        );
    }

    #[test]
    fn startup_report_is_silent_when_everything_loaded() {
        let report = OpenReport {
            rooms: RoomsSource::Loaded,
            bookings: BookingsSource::Loaded,
            write_failures: vec![],
            issues: vec![],
        };
        let mut out = Vec::new();
        report_startup(&mut out, &report).unwrap();
        assert!(out.is_empty());
    }
}
