// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use raffle_shop_domain::{Order, OrderDraft, OrderId, Raffle};
use time::OffsetDateTime;

/// A command represents user intent or an observed outcome as data only.
///
/// Commands are the only way to change storefront state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The raffle was fetched from the collaborator service.
    RaffleLoaded {
        /// The fetched raffle, including its numbers.
        raffle: Raffle,
    },
    /// Fetching the raffle failed.
    RaffleLoadFailed {
        /// A user-facing description of the failure.
        message: String,
    },
    /// Add a number to the selection, or remove it if already selected.
    ToggleNumber {
        /// The display number.
        number: u32,
    },
    /// Replace the whole selection (random assist).
    ReplaceSelection {
        /// The new numbers.
        numbers: Vec<u32>,
    },
    /// Empty the selection.
    ClearSelection,
    /// Open the confirmation step for the current selection.
    OpenConfirmation,
    /// Close the confirmation step and return to browsing.
    CancelConfirmation,
    /// An order creation request is about to be sent.
    BeginSubmit {
        /// The validated order being submitted.
        draft: OrderDraft,
    },
    /// The collaborator created the order.
    SubmitSucceeded {
        /// The server-assigned identifier.
        order_id: OrderId,
    },
    /// The order could not be created or failed validation.
    SubmitFailed {
        /// A user-facing description of the failure.
        message: String,
    },
    /// Hide the confirmation error.
    DismissError,
    /// Leave the success step; the handoff has been issued.
    DismissSuccess,
    /// Show a transient notice.
    ShowNotice {
        /// The notice text.
        message: String,
        /// When the notice stops being shown.
        expires_at: OffsetDateTime,
    },
    /// Drop the notice if it has expired by `now`.
    ExpireNotice {
        /// The current time.
        now: OffsetDateTime,
    },
}

impl Command {
    /// Returns a short name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RaffleLoaded { .. } => "load raffle",
            Self::RaffleLoadFailed { .. } => "record load failure",
            Self::ToggleNumber { .. } => "toggle number",
            Self::ReplaceSelection { .. } => "replace selection",
            Self::ClearSelection => "clear selection",
            Self::OpenConfirmation => "open confirmation",
            Self::CancelConfirmation => "cancel confirmation",
            Self::BeginSubmit { .. } => "submit order",
            Self::SubmitSucceeded { .. } => "record submitted order",
            Self::SubmitFailed { .. } => "record submit failure",
            Self::DismissError => "dismiss error",
            Self::DismissSuccess => "dismiss success",
            Self::ShowNotice { .. } => "show notice",
            Self::ExpireNotice { .. } => "expire notice",
        }
    }
}

/// Commands for the administrative approval screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// The order list was fetched.
    OrdersLoaded {
        /// Every order the collaborator returned.
        orders: Vec<Order>,
    },
    /// Fetching the order list failed.
    OrdersLoadFailed {
        /// A user-facing description of the failure.
        message: String,
    },
    /// Change the customer-name filter.
    SetFilter {
        /// The substring to match.
        text: String,
    },
    /// The collaborator approved an order.
    OrderApproved {
        /// The approved order.
        order_id: OrderId,
    },
    /// The collaborator rejected an order.
    OrderRejected {
        /// The rejected order.
        order_id: OrderId,
    },
    /// An approve or reject call failed.
    ActionFailed {
        /// A user-facing description of the failure.
        message: String,
    },
    /// Hide the current success or error message.
    DismissMessage,
}
