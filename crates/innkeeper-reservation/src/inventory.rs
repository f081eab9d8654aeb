// SPDX-FileCopyrightText: 2026 Innkeeper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default room generation from configured inventory blocks.

use innkeeper_config::model::{MAX_INVENTORY_ROOMS, RoomBlockConfig};
use innkeeper_core::Room;

/// Expand `blocks` into available rooms, block by block, in ascending room order.
///
/// Blocks with no rooms or running past `u32::MAX` contribute nothing, and
/// generation stops at `MAX_INVENTORY_ROOMS`; config validation rejects all
/// three before this is reached.
pub fn generate(blocks: &[RoomBlockConfig]) -> Vec<Room> {
    let limit = usize::try_from(MAX_INVENTORY_ROOMS).unwrap_or(usize::MAX);
    blocks
        .iter()
        .filter_map(|block| {
            block
                .room_numbers()
                .map(|numbers| numbers.map(move |n| Room::new(n, block.category.as_str(), true)))
        })
        .flatten()
        .take(limit)
        .collect()
}
