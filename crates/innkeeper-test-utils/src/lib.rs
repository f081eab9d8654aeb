// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Innkeeper tests.
//!
//! Provides an in-memory store and record fixtures for fast, deterministic
//! tests that never touch the filesystem.
//!
//! # Components
//!
//! - [`MemoryStore`] - In-memory `RecordStore` with shared state and write-failure injection
//! - [`fixtures`] - The classic room inventory and sample bookings

pub mod fixtures;
pub mod memory_store;

pub use memory_store::MemoryStore;
