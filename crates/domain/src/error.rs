// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Customer name is empty or invalid.
    InvalidCustomerName(String),
    /// An order or confirmation was requested with nothing selected.
    EmptySelection,
    /// A number does not exist in the raffle.
    NumberNotInRaffle {
        /// The raffle external identifier.
        raffle_eid: String,
        /// The display number that was not found.
        number: u32,
    },
    /// A number exists but is not in the `available` state.
    NumberNotAvailable {
        /// The display number.
        number: u32,
        /// The status the number is currently in.
        status: String,
    },
    /// A random selection was requested with an impossible count.
    InvalidRandomCount {
        /// The requested count.
        requested: usize,
        /// The number of available numbers in the pool.
        available: usize,
    },
    /// A price string could not be parsed.
    InvalidPrice(String),
    /// The order references a different raffle than the one loaded.
    RaffleMismatch {
        /// The raffle the board holds.
        expected: String,
        /// The raffle the order references.
        actual: String,
    },
    /// Order not found in the loaded listing.
    OrderNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCustomerName(msg) => write!(f, "Invalid customer name: {msg}"),
            Self::EmptySelection => write!(f, "At least one number must be selected"),
            Self::NumberNotInRaffle { raffle_eid, number } => {
                write!(f, "Number {number} does not belong to raffle '{raffle_eid}'")
            }
            Self::NumberNotAvailable { number, status } => {
                write!(f, "Number {number} is not available (status: {status})")
            }
            Self::InvalidRandomCount {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Invalid random selection count: {requested}. Must be between 1 and {available}"
                )
            }
            Self::InvalidPrice(raw) => write!(f, "Invalid price: '{raw}'"),
            Self::RaffleMismatch { expected, actual } => {
                write!(
                    f,
                    "Order references raffle '{actual}' but raffle '{expected}' is loaded"
                )
            }
            Self::OrderNotFound(id) => write!(f, "Order {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
