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

//! Resource transfers

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// A quantity of each resource to move between a ship and something else
///
/// Signs carry direction: positive quantities flow onto the thing executing
/// the transfer, negative quantities flow off of it. The all-zero transfer
/// means "no transfer"; see [`Transfer::is_empty`].
///
/// No capacity limit applies at this layer - holds enforce their limits when
/// the transfer is resolved.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    /// Pythonium, in tonnes; shares hold space with clans
    pub pythonium: i32,
    /// Clans; share hold space with pythonium
    pub clans: i32,
    /// Megacredits; stored separately from cargo
    pub megacredits: i32,
}

impl Transfer {
    /// Create a transfer from its quantities
    pub fn new(pythonium: i32, clans: i32, megacredits: i32) -> Self {
        Self {
            pythonium,
            clans,
            megacredits,
        }
    }

    /// Does this transfer move nothing at all?
    ///
    /// Empty transfers are skipped during order synthesis.
    pub fn is_empty(&self) -> bool {
        self.pythonium == 0 && self.clans == 0 && self.megacredits == 0
    }
}

impl Add for Transfer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            pythonium: self.pythonium + rhs.pythonium,
            clans: self.clans + rhs.clans,
            megacredits: self.megacredits + rhs.megacredits,
        }
    }
}
impl AddAssign for Transfer {
    fn add_assign(&mut self, rhs: Self) {
        self.pythonium += rhs.pythonium;
        self.clans += rhs.clans;
        self.megacredits += rhs.megacredits;
    }
}
impl Sub for Transfer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            pythonium: self.pythonium - rhs.pythonium,
            clans: self.clans - rhs.clans,
            megacredits: self.megacredits - rhs.megacredits,
        }
    }
}
impl SubAssign for Transfer {
    fn sub_assign(&mut self, rhs: Self) {
        self.pythonium -= rhs.pythonium;
        self.clans -= rhs.clans;
        self.megacredits -= rhs.megacredits;
    }
}
impl Neg for Transfer {
    type Output = Self;

    /// The same transfer seen from the other side
    fn neg(self) -> Self::Output {
        Self {
            pythonium: -self.pythonium,
            clans: -self.clans,
            megacredits: -self.megacredits,
        }
    }
}

impl Display for Transfer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer(pythonium={}, clans={}, megacredits={})",
            self.pythonium, self.clans, self.megacredits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(Transfer::default().is_empty());
        assert_eq!(Transfer::default(), Transfer::new(0, 0, 0));
    }

    #[test]
    fn any_nonzero_quantity_is_not_empty() {
        assert!(!Transfer::new(1, 0, 0).is_empty());
        assert!(!Transfer::new(0, 1, 0).is_empty());
        assert!(!Transfer::new(0, 0, 1).is_empty());
        // direction does not matter
        assert!(!Transfer::new(-1, 0, 0).is_empty());
    }

    #[test]
    fn arithmetic() {
        let load = Transfer::new(10, 5, 100);
        let unload = Transfer::new(-10, 0, 0);
        assert_eq!(load + unload, Transfer::new(0, 5, 100));
        assert_eq!(load - load, Transfer::default());
        assert_eq!(-load, Transfer::new(-10, -5, -100));

        let mut total = Transfer::default();
        total += load;
        total += load;
        assert_eq!(total, Transfer::new(20, 10, 200));
        total -= load;
        assert_eq!(total, load);
    }

    #[test]
    fn wire_shape() {
        let json = serde_json::to_value(Transfer::new(100, 0, 50)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pythonium": 100, "clans": 0, "megacredits": 50})
        );
    }
}
