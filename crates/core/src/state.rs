// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::event::StoreEvent;
use raffle_shop_domain::{Order, OrderId, Price, Raffle, Selection};
use time::OffsetDateTime;

/// Progress of the screen's initial fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// Data is available.
    Ready,
    /// The fetch failed; the screen shows a blocking error.
    Failed(String),
}

/// Where the visitor is in the purchase flow.
///
/// `Browsing → ConfirmationOpen → SuccessShown → HandoffSent`, with
/// `ConfirmationOpen → Browsing` on cancel and `ConfirmationOpen →
/// ConfirmationOpen` (error set) on a failed submit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    /// Building a selection on the board.
    #[default]
    Browsing,
    /// Collecting customer details for the current selection.
    ConfirmationOpen {
        /// A creation request is in flight.
        submitting: bool,
        /// The last submit failure, if any.
        error: Option<String>,
    },
    /// The order was created.
    SuccessShown {
        /// The server-assigned identifier.
        order_id: OrderId,
        /// The numbers that were ordered.
        numbers: Selection,
    },
    /// The visitor was handed off to the messaging channel. Terminal.
    HandoffSent {
        /// The server-assigned identifier.
        order_id: OrderId,
    },
}

impl CheckoutPhase {
    /// Returns the phase name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Browsing => "browsing",
            Self::ConfirmationOpen { .. } => "confirming",
            Self::SuccessShown { .. } => "showing success",
            Self::HandoffSent { .. } => "handed off",
        }
    }
}

/// A transient message with an expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The notice text.
    pub message: String,
    /// When the notice stops being shown.
    pub expires_at: OffsetDateTime,
}

/// Complete state of one storefront page session.
///
/// Each session is an independent read of one raffle; nothing is shared
/// between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontState {
    /// The raffle this session was opened for.
    pub raffle_eid: String,
    /// Progress of the initial fetch.
    pub load: LoadState,
    /// The fetched raffle, once loaded.
    pub raffle: Option<Raffle>,
    /// The visitor's in-progress selection.
    pub selection: Selection,
    /// Checkout progress.
    pub phase: CheckoutPhase,
    /// Transient notice (payment key copied).
    pub notice: Option<Notice>,
}

impl StorefrontState {
    /// Creates the state of a freshly opened page for a raffle.
    #[must_use]
    pub fn new(raffle_eid: &str) -> Self {
        Self {
            raffle_eid: raffle_eid.to_string(),
            load: LoadState::Loading,
            raffle: None,
            selection: Selection::new(),
            phase: CheckoutPhase::Browsing,
            notice: None,
        }
    }

    /// Returns whether `number` can currently be toggled on.
    #[must_use]
    pub fn is_selectable(&self, number: u32) -> bool {
        self.raffle
            .as_ref()
            .and_then(|r| r.find_number(number))
            .is_some_and(|n| n.status.is_available())
    }

    /// Returns whether the confirm control is enabled.
    #[must_use]
    pub fn can_open_confirmation(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Browsing)
            && self.raffle.is_some()
            && !self.selection.is_empty()
    }

    /// Returns the price of the current selection, if the raffle price parses.
    #[must_use]
    pub fn selection_total(&self) -> Option<Price> {
        self.raffle
            .as_ref()
            .and_then(Raffle::unit_price)
            .and_then(|price| price.times(self.selection.len()))
    }

    /// Returns the confirmation error, if one is showing.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        match &self.phase {
            CheckoutPhase::ConfirmationOpen { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Returns whether the success step is showing.
    #[must_use]
    pub const fn is_success_shown(&self) -> bool {
        matches!(self.phase, CheckoutPhase::SuccessShown { .. })
    }
}

/// State of the administrative approval screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminState {
    /// Progress of the order list fetch.
    pub load: LoadState,
    /// Every order, in the order the collaborator listed them.
    pub orders: Vec<Order>,
    /// Customer-name filter.
    pub filter: String,
    /// Last success message.
    pub message: Option<String>,
    /// Last failure message.
    pub error: Option<String>,
}

impl AdminState {
    /// Creates an empty admin screen state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an order by identifier.
    #[must_use]
    pub fn find_order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == order_id)
    }

    /// Returns the orders whose customer name contains the filter,
    /// ignoring case.
    #[must_use]
    pub fn visible_orders(&self) -> Vec<&Order> {
        let needle: String = self.filter.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|o| needle.is_empty() || o.customer_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Returns whether the approve control is enabled for an order.
    ///
    /// Orders absent from the listing are approvable by id.
    #[must_use]
    pub fn can_approve(&self, order_id: &OrderId) -> bool {
        self.find_order(order_id)
            .is_none_or(|o| o.status.is_actionable())
    }

    /// Returns whether the reject control is enabled for an order.
    ///
    /// Shares the approve rule: only unsettled orders can change.
    #[must_use]
    pub fn can_reject(&self, order_id: &OrderId) -> bool {
        self.can_approve(order_id)
    }
}

/// The result of a successful storefront transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: StorefrontState,
    /// What changed, or `None` when the command was a no-op.
    pub event: Option<StoreEvent>,
}

/// The result of a successful admin transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminTransitionResult {
    /// The new state after the transition.
    pub new_state: AdminState,
    /// What changed.
    pub event: StoreEvent,
}
