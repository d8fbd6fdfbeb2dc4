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

//! Ships: the mobile game pieces
//!
//! A ship belongs to a player, sits somewhere in the galaxy, and carries
//! resources. Each turn its owner may set at most two intents - a movement
//! target and a resource transfer - which [`Ship::orders`] turns into the
//! order requests the engine resolves.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    PlayerId, Position, StellarThing,
    order::{ShipOrder, ShipOrderRequest},
    ship_type::ShipType,
    transfer::Transfer,
};

/// Refers to a ship; unique within a game
#[repr(transparent)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(u32);

impl From<u32> for ShipId {
    fn from(value: u32) -> Self {
        ShipId(value)
    }
}

impl From<ShipId> for u32 {
    fn from(value: ShipId) -> Self {
        value.0
    }
}

impl Display for ShipId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ship that belongs to a player
///
/// It can be moved from one point to another, it can move any resource, and
/// armed classes can attack planets or other ships.
///
/// Live resource state is mutated by turn resolution, which is also expected
/// to keep it within the class limits: `pythonium + clans <= max_cargo` and
/// `megacredits <= max_mc`. Intent is mutated only through [`Ship::move_to`],
/// [`Ship::stop`], [`Ship::set_transfer`], and [`Ship::clear_transfer`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "ShipRecord", into = "ShipRecord")]
pub struct Ship {
    /// This ship's id
    pub id: ShipId,
    /// The owning player
    pub owner: PlayerId,
    /// Where the ship is; written only by turn resolution
    pub position: Position,
    class: ShipType,
    /// Megacredits aboard
    pub megacredits: u32,
    /// Pythonium aboard
    pub pythonium: u32,
    /// Clans aboard
    pub clans: u32,
    target: Option<Position>,
    transfer: Transfer,
}

impl Ship {
    /// Create a newly built ship of the given class, empty and with no intent
    pub fn new(id: ShipId, owner: PlayerId, position: Position, class: ShipType) -> Self {
        Self {
            id,
            owner,
            position,
            class,
            megacredits: 0,
            pythonium: 0,
            clans: 0,
            target: None,
            transfer: Transfer::default(),
        }
    }

    /// The catalog entry this ship was built from
    pub fn class(&self) -> &ShipType {
        &self.class
    }

    /// How much pythonium and clans (together) the ship can carry
    pub fn max_cargo(&self) -> u32 {
        self.class.max_cargo
    }

    /// How many megacredits the ship can carry
    pub fn max_mc(&self) -> u32 {
        self.class.max_mc
    }

    /// Attack strength; zero for unarmed classes
    pub fn attack(&self) -> u32 {
        self.class.attack
    }

    /// Speed in light-years per turn
    pub fn speed(&self) -> u32 {
        self.class.speed
    }

    /// Set course for a position, overwriting any previous course
    ///
    /// Whether the ship can get there, and how long it takes, is the
    /// engine's problem.
    pub fn move_to(&mut self, position: Position) {
        self.target = Some(position);
    }

    /// Cancel any ordered movement
    pub fn stop(&mut self) {
        self.target = None;
    }

    /// Where the ship has been told to go, if anywhere
    pub fn target(&self) -> Option<Position> {
        self.target
    }

    /// Set the resources to move this turn, overwriting any previous intent
    pub fn set_transfer(&mut self, transfer: Transfer) {
        self.transfer = transfer;
    }

    /// Cancel any ordered transfer
    pub fn clear_transfer(&mut self) {
        self.transfer = Transfer::default();
    }

    /// The resources the ship intends to move this turn; empty if none
    pub fn transfer(&self) -> Transfer {
        self.transfer
    }

    /// Turn the player-set intent into order requests for the engine
    ///
    /// Emits a `ship_transfer` request if the transfer is non-empty, then a
    /// `ship_move` request if a target is set. The engine relies on that
    /// order: cargo is moved before the ship departs. Reading intent does
    /// not clear it; the engine owns any reset after resolution.
    pub fn orders(&self) -> Vec<ShipOrderRequest> {
        let mut orders = Vec::new();
        if !self.transfer.is_empty() {
            orders.push(ShipOrderRequest {
                player: self.owner.clone(),
                id: self.id,
                order: ShipOrder::Transfer {
                    transfer: self.transfer,
                },
            });
        }

        if let Some(target) = self.target {
            orders.push(ShipOrderRequest {
                player: self.owner.clone(),
                id: self.id,
                order: ShipOrder::Move { target },
            });
        }

        orders
    }
}

impl StellarThing for Ship {
    type Id = ShipId;

    fn id(&self) -> ShipId {
        self.id
    }

    fn owner(&self) -> &PlayerId {
        &self.owner
    }

    fn position(&self) -> Position {
        self.position
    }
}

impl Display for Ship {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship(id={}, position={}, player={})",
            self.id, self.position, self.owner
        )
    }
}

/// The persisted shape of a [`Ship`]
///
/// Flat except for the nested `transfer` and `type` maps; `type` itself
/// nests the class cost. The class stats are duplicated at the top level for
/// the benefit of readers that do not follow the nesting; on load they must
/// agree with the class or the record is rejected.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShipRecord {
    /// Ship id
    pub id: ShipId,
    /// Owning player
    pub player: PlayerId,
    /// Current position
    pub position: Position,
    /// Cargo capacity; must match `type`
    pub max_cargo: u32,
    /// Megacredit capacity; must match `type`
    pub max_mc: u32,
    /// Attack strength; must match `type`
    pub attack: u32,
    /// Speed; must match `type`
    pub speed: u32,
    /// Megacredits aboard
    pub megacredits: u32,
    /// Pythonium aboard
    pub pythonium: u32,
    /// Clans aboard
    pub clans: u32,
    /// Ordered movement target, if any
    pub target: Option<Position>,
    /// Ordered transfer; all-zero if none
    pub transfer: Transfer,
    /// The class the ship was built from, cost included
    #[serde(rename = "type")]
    pub class: ShipType,
}

impl TryFrom<ShipRecord> for Ship {
    type Error = ShipError;

    fn try_from(record: ShipRecord) -> Result<Self, Self::Error> {
        let mismatch = |field| ShipError::ClassMismatch {
            id: record.id,
            field,
        };
        if record.max_cargo != record.class.max_cargo {
            return Err(mismatch("max_cargo"));
        }
        if record.max_mc != record.class.max_mc {
            return Err(mismatch("max_mc"));
        }
        if record.attack != record.class.attack {
            return Err(mismatch("attack"));
        }
        if record.speed != record.class.speed {
            return Err(mismatch("speed"));
        }
        Ok(Self {
            id: record.id,
            owner: record.player,
            position: record.position,
            class: record.class,
            megacredits: record.megacredits,
            pythonium: record.pythonium,
            clans: record.clans,
            target: record.target,
            transfer: record.transfer,
        })
    }
}

impl From<Ship> for ShipRecord {
    fn from(ship: Ship) -> Self {
        Self {
            id: ship.id,
            player: ship.owner,
            position: ship.position,
            max_cargo: ship.class.max_cargo,
            max_mc: ship.class.max_mc,
            attack: ship.class.attack,
            speed: ship.class.speed,
            megacredits: ship.megacredits,
            pythonium: ship.pythonium,
            clans: ship.clans,
            target: ship.target,
            transfer: ship.transfer,
            class: ship.class,
        }
    }
}

/// Why a ship record was rejected on load
///
/// Structural problems (missing or ill-typed fields) surface as
/// deserialization errors from the format layer instead; neither kind is
/// recovered here - the loader decides whether to skip the record or abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// A class stat duplicated on the record disagrees with the class itself
    #[error("ship {id}: {field} disagrees with the ship's class")]
    ClassMismatch {
        /// The ship whose record was rejected
        id: ShipId,
        /// Which duplicated stat disagreed
        field: &'static str,
    },
}
