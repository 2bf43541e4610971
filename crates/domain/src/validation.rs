// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::selection::Selection;
use crate::types::{OrderDraft, Raffle};

/// Validates and normalizes a customer name.
///
/// The name is required on every submission path.
///
/// # Arguments
///
/// * `name` - The name as typed by the customer
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed name
/// * `Err(DomainError::InvalidCustomerName)` if nothing is left after trimming
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_customer_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCustomerName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional phone number.
///
/// A missing or blank phone becomes `None`.
#[must_use]
pub fn normalize_phone(phone: Option<&str>) -> Option<String> {
    phone
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(ToString::to_string)
}

/// Validates that something is selected.
///
/// # Errors
///
/// Returns `DomainError::EmptySelection` if the selection is empty.
pub fn validate_selection_not_empty(selection: &Selection) -> Result<(), DomainError> {
    if selection.is_empty() {
        return Err(DomainError::EmptySelection);
    }
    Ok(())
}

/// Validates that a number exists in the raffle and is currently available.
///
/// # Errors
///
/// Returns an error if:
/// - The number does not belong to the raffle
/// - The number is not in the `available` state
pub fn validate_number_selectable(raffle: &Raffle, number: u32) -> Result<(), DomainError> {
    let entry = raffle
        .find_number(number)
        .ok_or_else(|| DomainError::NumberNotInRaffle {
            raffle_eid: raffle.external_id.clone(),
            number,
        })?;

    if !entry.status.is_available() {
        return Err(DomainError::NumberNotAvailable {
            number,
            status: entry.status.to_string(),
        });
    }
    Ok(())
}

/// Builds an `OrderDraft` from a selection and validates it against the raffle.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `raffle` - The raffle the selection was made on
/// * `selection` - The numbers to buy
/// * `customer_name` - The buyer's name (required)
/// * `customer_phone` - The buyer's phone (optional)
///
/// # Errors
///
/// Returns an error if:
/// - The customer name is empty
/// - The selection is empty
/// - Any selected number does not belong to the raffle
pub fn build_order_draft(
    raffle: &Raffle,
    selection: &Selection,
    customer_name: &str,
    customer_phone: Option<&str>,
) -> Result<OrderDraft, DomainError> {
    let customer_name: String = validate_customer_name(customer_name)?;
    validate_selection_not_empty(selection)?;

    let draft: OrderDraft = OrderDraft {
        customer_name,
        customer_phone: normalize_phone(customer_phone),
        numbers: selection.to_vec(),
        raffle_eid: raffle.external_id.clone(),
    };
    validate_order_draft(raffle, &draft)?;
    Ok(draft)
}

/// Validates the order invariants of a draft against a raffle.
///
/// # Errors
///
/// Returns an error if:
/// - The customer name is empty
/// - The number list is empty
/// - The draft references another raffle
/// - Any number does not belong to the raffle
pub fn validate_order_draft(raffle: &Raffle, draft: &OrderDraft) -> Result<(), DomainError> {
    validate_customer_name(&draft.customer_name)?;

    if draft.numbers.is_empty() {
        return Err(DomainError::EmptySelection);
    }

    if draft.raffle_eid != raffle.external_id {
        return Err(DomainError::RaffleMismatch {
            expected: raffle.external_id.clone(),
            actual: draft.raffle_eid.clone(),
        });
    }

    if let Some(&number) = draft
        .numbers
        .iter()
        .find(|&&n| raffle.find_number(n).is_none())
    {
        return Err(DomainError::NumberNotInRaffle {
            raffle_eid: raffle.external_id.clone(),
            number,
        });
    }

    Ok(())
}
