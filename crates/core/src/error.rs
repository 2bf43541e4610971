// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use raffle_shop_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command is not accepted in the current phase.
    InvalidTransition {
        /// The phase the screen was in.
        phase: &'static str,
        /// The command that was attempted.
        action: &'static str,
    },
    /// The command needs a loaded raffle and none is loaded.
    RaffleNotLoaded,
    /// The order is settled and can no longer be approved or rejected.
    OrderNotActionable {
        /// The order identifier.
        order_id: String,
        /// The order's current status.
        status: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidTransition { phase, action } => {
                write!(f, "Cannot {action} while {phase}")
            }
            Self::RaffleNotLoaded => write!(f, "No raffle is loaded"),
            Self::OrderNotActionable { order_id, status } => {
                write!(f, "Order {order_id} is already {status}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
