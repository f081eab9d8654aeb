// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for pluggable persistence backends.

pub mod store;

pub use store::RecordStore;
