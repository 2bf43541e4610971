// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Messaging handoff composition.
//!
//! After an order is created the customer is sent to a messaging app to
//! settle payment out of band. Nothing here performs I/O; the caller opens
//! the resulting link.

use crate::selection::Selection;
use crate::types::OrderId;

/// Base of the messaging deep link.
pub const HANDOFF_BASE_URL: &str = "https://wa.me";

/// Composes the message the customer sends to the raffle contact.
#[must_use]
pub fn compose_handoff_message(
    order_id: &OrderId,
    raffle_name: &str,
    numbers: &Selection,
) -> String {
    format!(
        "Hello! I just placed order #{order_id} for the raffle \"{raffle_name}\". \
         Numbers: {}. I would like to arrange the payment.",
        numbers.display_list()
    )
}

/// Builds the deep link `https://wa.me/{phone}?text={message}`.
///
/// Non-digit characters are stripped from the phone so that formatted
/// input such as `+55 (11) 99999-0000` still addresses the right contact.
#[must_use]
pub fn handoff_link(contact_phone: &str, message: &str) -> String {
    let digits: String = contact_phone.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{HANDOFF_BASE_URL}/{digits}?text={}",
        urlencoding::encode(message)
    )
}
