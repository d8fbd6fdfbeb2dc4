// Copyright 2026 the Pythonium contributors
//
// This file is part of Pythonium.
//
// Pythonium is free software: you can redistribute it and/or modify it under
// the terms of the GNU Affero General Public License as published by the Free
// Software Foundation, either version 3 of the License, or (at your option)
// any later version.
//
// Pythonium is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License
// for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with Pythonium. If not, see <https://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Orders that ships ask the engine to carry out
//!
//! Ships do not act on their own; at the end of a turn each ship turns its
//! player-set intent into a sequence of order requests, and the engine
//! applies, rejects, or queues them during turn resolution.

use serde::{Deserialize, Serialize};

use crate::{PlayerId, Position, ship::ShipId, transfer::Transfer};

/// A single order request, tagged with who issued it and for which ship
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShipOrderRequest {
    /// The player the order belongs to
    pub player: PlayerId,
    /// The ship the order applies to
    pub id: ShipId,
    /// What the ship should do
    #[serde(flatten)]
    pub order: ShipOrder,
}

impl ShipOrderRequest {
    /// The wire name of the order, e.g. `"ship_move"`
    pub fn name(&self) -> &'static str {
        self.order.name()
    }
}

/// What a ship can be ordered to do
///
/// Serialized as a `name` tag plus a `kwargs` payload, which is the shape
/// the turn-resolution engine dispatches on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "name", content = "kwargs")]
pub enum ShipOrder {
    /// Move resources between the ship and whatever shares its position
    #[serde(rename = "ship_transfer")]
    Transfer {
        /// What to move, signed by direction
        transfer: Transfer,
    },
    /// Set course for a target position
    #[serde(rename = "ship_move")]
    Move {
        /// Where to go
        target: Position,
    },
}

impl ShipOrder {
    /// The wire name of this order kind
    pub fn name(&self) -> &'static str {
        match self {
            ShipOrder::Transfer { .. } => "ship_transfer",
            ShipOrder::Move { .. } => "ship_move",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_names() {
        let transfer = ShipOrder::Transfer {
            transfer: Transfer::new(10, 0, 0),
        };
        let movement = ShipOrder::Move {
            target: Position::new(3, 4, 0),
        };
        assert_eq!(transfer.name(), "ship_transfer");
        assert_eq!(movement.name(), "ship_move");
    }

    #[test]
    fn wire_shape_tags_name_and_kwargs() {
        let request = ShipOrderRequest {
            player: PlayerId::from("P1"),
            id: ShipId::from(7),
            order: ShipOrder::Move {
                target: Position::new(3, 4, 0),
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "player": "P1",
                "id": 7,
                "name": "ship_move",
                "kwargs": {"target": {"x": 3, "y": 4, "z": 0}},
            })
        );
    }

    #[test]
    fn wire_round_trip() {
        let request = ShipOrderRequest {
            player: PlayerId::from("P2"),
            id: ShipId::from(42),
            order: ShipOrder::Transfer {
                transfer: Transfer::new(-5, 0, 250),
            },
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: ShipOrderRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
