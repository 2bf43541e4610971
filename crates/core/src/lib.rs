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

mod apply;
mod command;
mod error;
mod event;
mod sampling;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_admin, ensure_actionable, prepare_order};
pub use command::{AdminCommand, Command};
pub use error::CoreError;
pub use event::StoreEvent;
pub use sampling::{IndexSource, ThreadRandom, draw_random_selection, sample_without_replacement};
pub use state::{
    AdminState, AdminTransitionResult, CheckoutPhase, LoadState, Notice, StorefrontState,
    TransitionResult,
};
