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

use proptest::prelude::*;
use pythonium_common::ship::{Ship, ShipId};
use pythonium_common::ship_type::ShipType;
use pythonium_common::transfer::Transfer;
use pythonium_common::{PlayerId, Position};

fn position() -> impl Strategy<Value = Position> {
    (-1000..1000i32, -1000..1000i32, -1000..1000i32)
        .prop_map(|(x, y, z)| Position::new(x, y, z))
}

fn transfer() -> impl Strategy<Value = Transfer> {
    (-500..500i32, -500..500i32, -10_000..10_000i32)
        .prop_map(|(pythonium, clans, megacredits)| Transfer::new(pythonium, clans, megacredits))
}

fn ship_type() -> impl Strategy<Value = ShipType> {
    (
        "[a-z][a-z ]{0,11}",
        0..2000u32,
        0..20_000u32,
        0..200u32,
        1..100u32,
        transfer(),
    )
        .prop_map(|(name, max_cargo, max_mc, attack, speed, cost)| ShipType {
            name,
            max_cargo,
            max_mc,
            attack,
            speed,
            cost,
        })
}

fn ship() -> impl Strategy<Value = Ship> {
    (
        any::<u32>(),
        "P[1-9]",
        position(),
        ship_type(),
        proptest::option::of(position()),
        transfer(),
    )
        .prop_map(|(id, player, position, class, target, transfer)| {
            let mut ship = Ship::new(ShipId::from(id), PlayerId::from(player), position, class);
            ship.megacredits = ship.max_mc() / 2;
            ship.pythonium = ship.max_cargo() / 2;
            ship.clans = ship.max_cargo() / 2 - ship.pythonium / 2;
            if let Some(target) = target {
                ship.move_to(target);
            }
            ship.set_transfer(transfer);
            ship
        })
}

proptest! {
    /// Property: order count matches exactly which intents are set
    #[test]
    fn order_count_matches_intent(ship in ship()) {
        let expected =
            usize::from(!ship.transfer().is_empty()) + usize::from(ship.target().is_some());
        prop_assert_eq!(ship.orders().len(), expected);
    }

    /// Property: transfer orders always come before move orders
    #[test]
    fn transfer_always_precedes_move(ship in ship()) {
        let names: Vec<_> = ship.orders().iter().map(|order| order.name()).collect();
        match names.as_slice() {
            [] => prop_assert!(ship.transfer().is_empty() && ship.target().is_none()),
            ["ship_transfer"] => prop_assert!(ship.target().is_none()),
            ["ship_move"] => prop_assert!(ship.transfer().is_empty()),
            ["ship_transfer", "ship_move"] => {}
            other => prop_assert!(false, "unexpected order sequence {:?}", other),
        }
    }

    /// Property: every emitted order carries this ship's player and id
    #[test]
    fn orders_are_tagged_with_owner_and_id(ship in ship()) {
        for order in ship.orders() {
            prop_assert_eq!(&order.player, &ship.owner);
            prop_assert_eq!(order.id, ship.id);
        }
    }

    /// Property: synthesizing orders never mutates the ship
    #[test]
    fn order_synthesis_is_pure(ship in ship()) {
        let before = ship.clone();
        let _ = ship.orders();
        prop_assert_eq!(ship, before);
    }

    /// Property: a ship survives a trip through its persisted record
    #[test]
    fn record_round_trip(ship in ship()) {
        let json = serde_json::to_string(&ship).unwrap();
        let back: Ship = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, ship);
    }

    /// Property: the last course set is the one that sticks
    #[test]
    fn move_to_overwrites(mut ship in ship(), first in position(), second in position()) {
        ship.move_to(first);
        ship.move_to(second);
        prop_assert_eq!(ship.target(), Some(second));
    }

    /// Property: a transfer is empty exactly when every quantity is zero
    #[test]
    fn transfer_emptiness(transfer in transfer()) {
        prop_assert_eq!(
            transfer.is_empty(),
            transfer.pythonium == 0 && transfer.clans == 0 && transfer.megacredits == 0
        );
    }
}
