// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod types;

use crate::{NumberStatus, Raffle, RaffleNumber};

/// Builds a raffle numbered `1..=count` where every number is available.
pub fn create_test_raffle(count: u32) -> Raffle {
    Raffle {
        name: String::from("Charity Bike"),
        description: String::from("A brand new bike"),
        price: String::from("10.00"),
        total_numbers: count,
        status: String::from("active"),
        external_id: String::from("raffle-eid-1"),
        numbers: (1..=count)
            .map(|n| {
                RaffleNumber::new(
                    u64::from(n),
                    n,
                    NumberStatus::Available,
                    &format!("num-{n}"),
                )
            })
            .collect(),
    }
}
