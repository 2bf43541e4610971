// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A fact about a state change, produced by every effective transition.
///
/// Events are informational only. Subscribers use them to re-render; the
/// state returned by the transition stays the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A raffle was loaded onto the board.
    RaffleLoaded {
        /// The raffle external identifier.
        raffle_eid: String,
        /// How many numbers are selectable.
        available: usize,
        /// How many numbers the board shows.
        total: usize,
    },
    /// Loading the raffle failed.
    RaffleLoadFailed {
        /// The raffle external identifier.
        raffle_eid: String,
        /// The failure message.
        message: String,
    },
    /// The selection changed.
    SelectionChanged {
        /// The selected numbers, ascending.
        numbers: Vec<u32>,
    },
    /// The confirmation step opened.
    ConfirmationOpened {
        /// The numbers being confirmed.
        numbers: Vec<u32>,
    },
    /// The confirmation step was closed without submitting.
    ConfirmationCancelled,
    /// An order creation request was sent.
    SubmitStarted {
        /// The customer name on the order.
        customer_name: String,
        /// The numbers being ordered.
        numbers: Vec<u32>,
    },
    /// The order was created.
    OrderSubmitted {
        /// The server-assigned identifier.
        order_id: String,
        /// The ordered numbers.
        numbers: Vec<u32>,
    },
    /// The order was not created.
    SubmitFailed {
        /// The failure message.
        message: String,
    },
    /// The confirmation error was dismissed.
    ErrorDismissed,
    /// The visitor was handed off to the messaging channel.
    HandoffSent {
        /// The server-assigned identifier.
        order_id: String,
    },
    /// A transient notice is showing.
    NoticeShown {
        /// The notice text.
        message: String,
    },
    /// The transient notice expired.
    NoticeCleared,
    /// The admin order list was loaded.
    OrdersLoaded {
        /// Number of orders listed.
        count: usize,
    },
    /// Loading the admin order list failed.
    OrdersLoadFailed {
        /// The failure message.
        message: String,
    },
    /// The admin filter changed.
    FilterChanged {
        /// The new filter text.
        filter: String,
        /// How many orders match it.
        visible: usize,
    },
    /// An order's status changed after an admin action.
    OrderStatusChanged {
        /// The order identifier.
        order_id: String,
        /// The new status.
        status: String,
    },
    /// An admin action failed.
    AdminActionFailed {
        /// The failure message.
        message: String,
    },
    /// The admin message was dismissed.
    MessageDismissed,
}
