// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, IndexSource, StorefrontState, apply};
use raffle_shop_domain::{
    NumberStatus, Order, OrderId, OrderStatus, Raffle, RaffleNumber,
};

pub const TEST_RAFFLE_EID: &str = "acff1926-703a-11ef-adb4-028b968b3f3d";

/// A raffle numbered `1..=count`, everything available.
pub fn create_test_raffle(count: u32) -> Raffle {
    Raffle {
        name: String::from("Charity Bike"),
        description: String::from("A brand new bike"),
        price: String::from("10.00"),
        total_numbers: count,
        status: String::from("active"),
        external_id: String::from(TEST_RAFFLE_EID),
        numbers: (1..=count)
            .map(|n| RaffleNumber::new(u64::from(n), n, NumberStatus::Available, &format!("n-{n}")))
            .collect(),
    }
}

/// A storefront with the test raffle loaded.
pub fn create_loaded_state(count: u32) -> StorefrontState {
    let state: StorefrontState = StorefrontState::new(TEST_RAFFLE_EID);
    apply(
        &state,
        Command::RaffleLoaded {
            raffle: create_test_raffle(count),
        },
    )
    .unwrap()
    .new_state
}

/// Applies a command that is expected to succeed.
pub fn step(state: &StorefrontState, command: Command) -> StorefrontState {
    apply(state, command).unwrap().new_state
}

/// A storefront with `numbers` selected.
pub fn create_state_with_selection(count: u32, numbers: &[u32]) -> StorefrontState {
    numbers
        .iter()
        .fold(create_loaded_state(count), |state, &number| {
            step(&state, Command::ToggleNumber { number })
        })
}

pub fn create_test_order(id: u64, name: &str, status: OrderStatus) -> Order {
    Order {
        id: OrderId::from(id),
        external_id: Some(format!("order-{id}")),
        customer_name: name.to_string(),
        customer_phone: None,
        status,
        order_date: Some(String::from("2024-09-12T10:00:00Z")),
        numbers: vec![1, 2],
        numbers_count: Some(2),
    }
}

/// Replays a fixed sequence of indices, wrapping each into range.
pub struct ScriptedSource {
    indices: Vec<usize>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(indices: &[usize]) -> Self {
        Self {
            indices: indices.to_vec(),
            next: 0,
        }
    }
}

impl IndexSource for ScriptedSource {
    fn index_below(&mut self, upper: usize) -> usize {
        let value: usize = self.indices.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        value % upper
    }
}
