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

//! Game pieces and order vocabulary for Pythonium
//!
//! Turn resolution itself lives in the engine; this crate only defines the
//! data the engine and its players exchange.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

pub mod order;
pub mod ship;
pub mod ship_type;
pub mod transfer;

/// Refers to a player
///
/// Opaque to this crate; the engine assigns the underlying names when a game
/// is created.
#[repr(transparent)]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// The player name as assigned by the engine
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        PlayerId(value.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        PlayerId(value)
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in the galaxy
///
/// Used both for where a thing is and for where a ship has been told to go.
/// Distances and travel times are the engine's concern, not this crate's.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// x coordinate, in light-years
    pub x: i32,
    /// y coordinate, in light-years
    pub y: i32,
    /// z coordinate, in light-years
    pub z: i32,
}

impl Position {
    /// Create a position from its coordinates
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create the origin position
    pub fn origin() -> Self {
        Self { x: 0, y: 0, z: 0 }
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}
impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Anything that occupies a point in space
///
/// Ships, planets, and anything else the engine tracks share this contract:
/// an identity, an owning player, and a position.
pub trait StellarThing {
    /// Identifier type; unique within a game among things of the same kind
    type Id: Copy;

    /// This thing's id
    fn id(&self) -> Self::Id;

    /// The owning player
    fn owner(&self) -> &PlayerId;

    /// Where this thing currently is
    ///
    /// Only turn resolution moves things; the player-facing API never writes
    /// this.
    fn position(&self) -> Position;
}
