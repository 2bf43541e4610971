// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Random-assist selection.
//!
//! Randomness is kept out of `apply`: a draw produces a
//! `Command::ReplaceSelection` that the reducer validates like any other
//! command.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CheckoutPhase, StorefrontState};
use raffle_shop_domain::DomainError;

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an index in `0..upper`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

/// `IndexSource` backed by the thread-local generator.
///
/// Draws are non-deterministic and not reproducible across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl IndexSource for ThreadRandom {
    fn index_below(&mut self, upper: usize) -> usize {
        rand::random_range(0..upper)
    }
}

/// Draws `count` distinct values from `pool` without replacement.
///
/// Partial Fisher-Yates: each step swaps a uniformly chosen remaining
/// element into the next slot, so the cost is `O(count)` swaps after one
/// copy of the pool. A `count` larger than the pool yields the whole pool.
pub fn sample_without_replacement<S: IndexSource + ?Sized>(
    pool: &[u32],
    count: usize,
    source: &mut S,
) -> Vec<u32> {
    let mut pool: Vec<u32> = pool.to_vec();
    let count: usize = count.min(pool.len());

    for i in 0..count {
        let remaining: usize = pool.len() - i;
        let offset: usize = source.index_below(remaining).min(remaining - 1);
        pool.swap(i, i + offset);
    }

    pool.truncate(count);
    pool
}

/// Draws a random selection of `count` available numbers.
///
/// # Arguments
///
/// * `state` - The current storefront state
/// * `count` - How many numbers to draw
/// * `source` - The index source
///
/// # Returns
///
/// A `Command::ReplaceSelection` carrying the drawn numbers.
///
/// # Errors
///
/// Returns an error if:
/// - The board is not in the browsing phase or no raffle is loaded
/// - `count` is zero or exceeds the number of available numbers
pub fn draw_random_selection<S: IndexSource + ?Sized>(
    state: &StorefrontState,
    count: usize,
    source: &mut S,
) -> Result<Command, CoreError> {
    if !matches!(state.phase, CheckoutPhase::Browsing) {
        return Err(CoreError::InvalidTransition {
            phase: state.phase.name(),
            action: "draw random numbers",
        });
    }
    let raffle = state.raffle.as_ref().ok_or(CoreError::RaffleNotLoaded)?;
    let available: Vec<u32> = raffle.available_numbers();

    if count == 0 || count > available.len() {
        return Err(CoreError::DomainViolation(DomainError::InvalidRandomCount {
            requested: count,
            available: available.len(),
        }));
    }

    Ok(Command::ReplaceSelection {
        numbers: sample_without_replacement(&available, count, source),
    })
}
