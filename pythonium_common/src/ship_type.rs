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

use serde::{Deserialize, Serialize};

use crate::transfer::Transfer;

/// A class of ship, as listed in the shipyard catalog
///
/// Catalog entries are fixed for a whole game; a [`crate::ship::Ship`] keeps
/// the entry it was built from and reads its stats through it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShipType {
    /// Catalog name, e.g. `"carrier"`
    pub name: String,
    /// How much pythonium and clans (together) ships of this class can carry
    pub max_cargo: u32,
    /// How many megacredits ships of this class can carry
    pub max_mc: u32,
    /// Attack strength; zero for unarmed classes
    pub attack: u32,
    /// Speed in light-years per turn
    pub speed: u32,
    /// What building one of these costs
    pub cost: Transfer,
}

impl ShipType {
    /// Cargo capacity of a carrier, in tonnes
    const CARRIER_MAX_CARGO: u32 = 1200;
    /// Megacredit capacity of a carrier
    const CARRIER_MAX_MC: u32 = 10_000;
    /// Speed of a carrier, in ly per turn
    const CARRIER_SPEED: u32 = 80;
    /// Pythonium cost of a carrier
    const CARRIER_COST_PYTHONIUM: i32 = 300;
    /// Megacredit cost of a carrier
    const CARRIER_COST_MC: i32 = 600;

    /// Cargo capacity of a war ship, in tonnes
    const WAR_SHIP_MAX_CARGO: u32 = 100;
    /// Megacredit capacity of a war ship
    const WAR_SHIP_MAX_MC: u32 = 1_000;
    /// Attack strength of a war ship
    const WAR_SHIP_ATTACK: u32 = 100;
    /// Speed of a war ship, in ly per turn
    const WAR_SHIP_SPEED: u32 = 80;
    /// Pythonium cost of a war ship
    const WAR_SHIP_COST_PYTHONIUM: i32 = 500;
    /// Megacredit cost of a war ship
    const WAR_SHIP_COST_MC: i32 = 1_000;

    /// The carrier: unarmed bulk hauler
    pub fn carrier() -> Self {
        Self {
            name: "carrier".to_string(),
            max_cargo: Self::CARRIER_MAX_CARGO,
            max_mc: Self::CARRIER_MAX_MC,
            attack: 0,
            speed: Self::CARRIER_SPEED,
            cost: Transfer::new(Self::CARRIER_COST_PYTHONIUM, 0, Self::CARRIER_COST_MC),
        }
    }

    /// The war ship: armed, with a token hold
    pub fn war_ship() -> Self {
        Self {
            name: "war ship".to_string(),
            max_cargo: Self::WAR_SHIP_MAX_CARGO,
            max_mc: Self::WAR_SHIP_MAX_MC,
            attack: Self::WAR_SHIP_ATTACK,
            speed: Self::WAR_SHIP_SPEED,
            cost: Transfer::new(Self::WAR_SHIP_COST_PYTHONIUM, 0, Self::WAR_SHIP_COST_MC),
        }
    }

    /// Look a class up by catalog name
    ///
    /// Returns None if the name does not correspond to a known class.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "carrier" => Some(Self::carrier()),
            "war ship" => Some(Self::war_ship()),
            _ => None,
        }
    }
}
