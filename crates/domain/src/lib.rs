// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handoff;
mod ranking;
mod selection;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use handoff::{HANDOFF_BASE_URL, compose_handoff_message, handoff_link};
pub use ranking::{RankingEntry, compute_ranking};
pub use selection::Selection;
pub use types::{
    NumberStatus, Order, OrderDraft, OrderId, OrderStatus, Price, Raffle, RaffleNumber,
};
pub use validation::{
    build_order_draft, normalize_phone, validate_customer_name, validate_number_selectable,
    validate_order_draft, validate_selection_not_empty,
};
