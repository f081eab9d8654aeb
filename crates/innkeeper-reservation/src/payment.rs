// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Simulated payment step run after each booking.
//!
//! No amount is computed and nothing is charged; the step always approves.

use tracing::info;

/// Outcome of a simulated payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Guest the payment was taken for.
    pub guest_name: String,
    pub approved: bool,
}

/// Run the payment simulation for `guest_name`.
pub fn simulate_payment(guest_name: &str) -> PaymentReceipt {
    info!(guest = guest_name, "simulated payment approved");
    PaymentReceipt {
        guest_name: guest_name.to_string(),
        approved: true,
    }
}
