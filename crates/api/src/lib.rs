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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Boundary between the storefront screens and the collaborator service.
//!
//! The collaborator owns every raffle and order; this crate only reads
//! and writes through it. Sessions wrap the core reducers, run the
//! network calls each action needs, and turn every failure into state.

mod admin;
mod client;
mod config;
mod error;
mod live;
mod request_response;
mod storefront;

#[cfg(test)]
mod tests;

pub use admin::{AdminAction, AdminSession, ORDERS_LOAD_FAILED_MESSAGE, load_ranking};
pub use client::{HttpRaffleService, RaffleService};
pub use config::{DEFAULT_BASE_URL, DEFAULT_NOTICE_DURATION, ServiceConfig};
pub use error::{ApiError, ApiResult};
pub use live::StoreEventBroadcaster;
pub use request_response::{
    CreateOrderRequest, CreateOrderResponse, LooseScalar, MISSING_PHONE_MARKER,
    OrderNumberEntry, OrderResponse, RaffleNumberResponse, RaffleResponse,
};
pub use storefront::{
    Clipboard, LOAD_FAILED_MESSAGE, PAYMENT_KEY_COPIED_MESSAGE, StorefrontSession,
};
