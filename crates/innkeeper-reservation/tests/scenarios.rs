// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios against the flat-file store.
//!
//! Each test works in its own temporary directory and reopens the service
//! to check what actually reached disk.

use std::path::Path;

use innkeeper_config::model::{InnkeeperConfig, StorageConfig};
use innkeeper_core::{Booking, InnkeeperError, Room};
use innkeeper_reservation::{BookingsSource, ReservationService, RoomsSource};
use innkeeper_storage::FlatFileStore;

fn store_in(dir: &Path) -> FlatFileStore {
    FlatFileStore::new(&StorageConfig {
        rooms_path: dir.join("rooms.txt").display().to_string(),
        bookings_path: dir.join("bookings.txt").display().to_string(),
        atomic_writes: false,
    })
}

fn open(dir: &Path) -> ReservationService<FlatFileStore> {
    let inventory = InnkeeperConfig::default().inventory;
    let (service, _) = ReservationService::open(store_in(dir), &inventory).expect("stores open");
    service
}

#[test]
fn first_run_writes_default_rooms_file() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = InnkeeperConfig::default().inventory;

    let (service, report) = ReservationService::open(store_in(dir.path()), &inventory).unwrap();

    assert_eq!(report.rooms, RoomsSource::Generated);
    assert_eq!(report.bookings, BookingsSource::Fresh);
    assert_eq!(service.rooms().len(), 10);

    let text = std::fs::read_to_string(dir.path().join("rooms.txt")).unwrap();
    assert_eq!(
        text,
        "101,Standard,true\n102,Standard,true\n103,Standard,true\n104,Standard,true\n\
         105,Standard,true\n201,Deluxe,true\n202,Deluxe,true\n203,Deluxe,true\n\
         301,Suite,true\n302,Suite,true\n"
    );
    assert!(!dir.path().join("bookings.txt").exists());
}

#[test]
fn alice_books_deluxe_then_cancels() {
    let dir = tempfile::tempdir().unwrap();

    let mut service = open(dir.path());
    let committed = service.book_room("Alice", "a@x.com", "Deluxe").unwrap();
    assert!(committed.is_durable());
    assert_eq!(committed.value.booking.room_number, 201);

    let bookings = std::fs::read_to_string(dir.path().join("bookings.txt")).unwrap();
    assert_eq!(bookings, "Alice,a@x.com,201,Deluxe\n");

    // A second run sees the booking and the unavailable room.
    let mut service = open(dir.path());
    assert_eq!(
        service.bookings(),
        &[Booking::new("Alice", "a@x.com", 201, "Deluxe")]
    );
    assert!(service.rooms().contains(&Room::new(201, "Deluxe", false)));
    assert!(service.consistency_issues().is_empty());

    service.cancel_booking(201, "a@x.com").unwrap();

    let service = open(dir.path());
    assert!(service.bookings().is_empty());
    assert!(service.rooms().iter().all(|r| r.available));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("bookings.txt")).unwrap(),
        ""
    );
}

#[test]
fn viewing_bookings_with_none_present() {
    let dir = tempfile::tempdir().unwrap();
    let service = open(dir.path());
    assert!(service.bookings_for("a@x.com").is_empty());
}

#[test]
fn booking_a_sold_out_category_leaves_files_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut service = open(dir.path());
    service.book_room("A", "a@x.com", "Suite").unwrap();
    service.book_room("B", "b@x.com", "Suite").unwrap();

    let rooms_before = std::fs::read_to_string(dir.path().join("rooms.txt")).unwrap();
    let bookings_before = std::fs::read_to_string(dir.path().join("bookings.txt")).unwrap();

    let err = service.book_room("C", "c@x.com", "suite").unwrap_err();
    assert!(matches!(err, InnkeeperError::NoMatchingRoom { .. }));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("rooms.txt")).unwrap(),
        rooms_before
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("bookings.txt")).unwrap(),
        bookings_before
    );
}

#[test]
fn hand_edited_store_with_bad_line_refuses_to_open() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("rooms.txt"), "101,Standard,true\nnot a room\n").unwrap();

    let inventory = InnkeeperConfig::default().inventory;
    let err = ReservationService::open(store_in(dir.path()), &inventory)
        .err()
        .expect("malformed store must not open");
    assert_eq!(
        err.to_string(),
        "malformed record in rooms store at line 2: expected 3 fields, found 1"
    );
}
