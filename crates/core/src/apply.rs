// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{AdminCommand, Command};
use crate::error::CoreError;
use crate::event::StoreEvent;
use crate::state::{
    AdminState, AdminTransitionResult, CheckoutPhase, LoadState, Notice, StorefrontState,
    TransitionResult,
};
use raffle_shop_domain::{
    DomainError, OrderDraft, OrderId, OrderStatus, Raffle, Selection, build_order_draft,
    validate_number_selectable, validate_order_draft,
};

/// Applies a command to the storefront state, producing a new state and event.
///
/// This function is pure: it never performs I/O and never mutates its input.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the event, if any
/// * `Err(CoreError)` if the command is invalid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - The command is not accepted in the current checkout phase
/// - The command needs a loaded raffle and none is loaded
/// - The command violates domain rules
#[allow(clippy::too_many_lines)]
pub fn apply(state: &StorefrontState, command: Command) -> Result<TransitionResult, CoreError> {
    let action: &'static str = command.name();
    let mut new_state: StorefrontState = state.clone();

    let event: Option<StoreEvent> = match command {
        Command::RaffleLoaded { raffle } => {
            // The collaborator may normalize the eid; state keeps the requested one.
            let event: StoreEvent = StoreEvent::RaffleLoaded {
                raffle_eid: raffle.external_id.clone(),
                available: raffle.available_numbers().len(),
                total: raffle.numbers.len(),
            };
            new_state.load = LoadState::Ready;
            new_state.raffle = Some(raffle);
            new_state.selection.clear();
            new_state.phase = CheckoutPhase::Browsing;
            Some(event)
        }
        Command::RaffleLoadFailed { message } => {
            new_state.load = LoadState::Failed(message.clone());
            new_state.raffle = None;
            new_state.selection.clear();
            Some(StoreEvent::RaffleLoadFailed {
                raffle_eid: state.raffle_eid.clone(),
                message,
            })
        }
        Command::ToggleNumber { number } => {
            let raffle: &Raffle = require_browsing(state, action)?;

            if new_state.selection.contains(number) {
                new_state.selection.remove(number);
            } else {
                match validate_number_selectable(raffle, number) {
                    Ok(()) => {
                        new_state.selection.insert(number);
                    }
                    // Taken numbers ignore clicks; the server may have sold
                    // them after the board was loaded.
                    Err(DomainError::NumberNotAvailable { .. }) => {
                        return Ok(TransitionResult {
                            new_state,
                            event: None,
                        });
                    }
                    Err(err) => return Err(err.into()),
                }
            }

            Some(StoreEvent::SelectionChanged {
                numbers: new_state.selection.to_vec(),
            })
        }
        Command::ReplaceSelection { numbers } => {
            let raffle: &Raffle = require_browsing(state, action)?;

            if numbers.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptySelection));
            }
            for &number in &numbers {
                validate_number_selectable(raffle, number)?;
            }

            new_state.selection.replace(numbers);
            Some(StoreEvent::SelectionChanged {
                numbers: new_state.selection.to_vec(),
            })
        }
        Command::ClearSelection => {
            require_browsing(state, action)?;
            if state.selection.is_empty() {
                None
            } else {
                new_state.selection.clear();
                Some(StoreEvent::SelectionChanged {
                    numbers: Vec::new(),
                })
            }
        }
        Command::OpenConfirmation => {
            require_browsing(state, action)?;
            if state.selection.is_empty() {
                return Err(CoreError::DomainViolation(DomainError::EmptySelection));
            }

            new_state.phase = CheckoutPhase::ConfirmationOpen {
                submitting: false,
                error: None,
            };
            Some(StoreEvent::ConfirmationOpened {
                numbers: state.selection.to_vec(),
            })
        }
        Command::CancelConfirmation => {
            match state.phase {
                CheckoutPhase::ConfirmationOpen {
                    submitting: false, ..
                } => {}
                _ => return Err(invalid(state, action)),
            }
            new_state.phase = CheckoutPhase::Browsing;
            Some(StoreEvent::ConfirmationCancelled)
        }
        Command::BeginSubmit { draft } => {
            match state.phase {
                CheckoutPhase::ConfirmationOpen {
                    submitting: false, ..
                } => {}
                _ => return Err(invalid(state, action)),
            }
            let raffle: &Raffle = state.raffle.as_ref().ok_or(CoreError::RaffleNotLoaded)?;
            validate_order_draft(raffle, &draft)?;
            if draft.numbers != state.selection.to_vec() {
                return Err(invalid(state, action));
            }

            new_state.phase = CheckoutPhase::ConfirmationOpen {
                submitting: true,
                error: None,
            };
            Some(StoreEvent::SubmitStarted {
                customer_name: draft.customer_name,
                numbers: draft.numbers,
            })
        }
        Command::SubmitSucceeded { order_id } => {
            if !matches!(
                state.phase,
                CheckoutPhase::ConfirmationOpen {
                    submitting: true,
                    ..
                }
            ) {
                return Err(invalid(state, action));
            }

            let numbers: Selection = state.selection.clone();
            if let Some(raffle) = new_state.raffle.as_mut() {
                raffle.mark_reserved(&numbers.to_vec());
            }
            new_state.selection.clear();
            new_state.phase = CheckoutPhase::SuccessShown {
                order_id: order_id.clone(),
                numbers: numbers.clone(),
            };
            Some(StoreEvent::OrderSubmitted {
                order_id: order_id.to_string(),
                numbers: numbers.to_vec(),
            })
        }
        Command::SubmitFailed { message } => {
            if !matches!(state.phase, CheckoutPhase::ConfirmationOpen { .. }) {
                return Err(invalid(state, action));
            }

            // Selection is kept so the visitor can retry without reselecting.
            new_state.phase = CheckoutPhase::ConfirmationOpen {
                submitting: false,
                error: Some(message.clone()),
            };
            Some(StoreEvent::SubmitFailed { message })
        }
        Command::DismissError => match &state.phase {
            CheckoutPhase::ConfirmationOpen {
                submitting,
                error: Some(_),
            } => {
                new_state.phase = CheckoutPhase::ConfirmationOpen {
                    submitting: *submitting,
                    error: None,
                };
                Some(StoreEvent::ErrorDismissed)
            }
            _ => None,
        },
        Command::DismissSuccess => {
            let CheckoutPhase::SuccessShown { order_id, .. } = &state.phase else {
                return Err(invalid(state, action));
            };

            new_state.phase = CheckoutPhase::HandoffSent {
                order_id: order_id.clone(),
            };
            Some(StoreEvent::HandoffSent {
                order_id: order_id.to_string(),
            })
        }
        Command::ShowNotice {
            message,
            expires_at,
        } => {
            new_state.notice = Some(Notice {
                message: message.clone(),
                expires_at,
            });
            Some(StoreEvent::NoticeShown { message })
        }
        Command::ExpireNotice { now } => match &state.notice {
            Some(notice) if notice.expires_at <= now => {
                new_state.notice = None;
                Some(StoreEvent::NoticeCleared)
            }
            _ => None,
        },
    };

    Ok(TransitionResult { new_state, event })
}

/// Builds the order for the current selection without changing state.
///
/// The caller submits the returned draft with `Command::BeginSubmit`.
///
/// # Errors
///
/// Returns an error if:
/// - The confirmation step is not open, or a submit is already in flight
/// - No raffle is loaded
/// - The customer name is empty or the selection is empty
pub fn prepare_order(
    state: &StorefrontState,
    customer_name: &str,
    customer_phone: Option<&str>,
) -> Result<OrderDraft, CoreError> {
    match state.phase {
        CheckoutPhase::ConfirmationOpen {
            submitting: false, ..
        } => {}
        _ => return Err(invalid(state, "submit order")),
    }
    let raffle: &Raffle = state.raffle.as_ref().ok_or(CoreError::RaffleNotLoaded)?;
    Ok(build_order_draft(
        raffle,
        &state.selection,
        customer_name,
        customer_phone,
    )?)
}

/// Applies a command to the admin screen state.
///
/// Status changes are applied only after the collaborator confirmed them,
/// so every admin command is accepted.
#[must_use]
pub fn apply_admin(state: &AdminState, command: AdminCommand) -> AdminTransitionResult {
    let mut new_state: AdminState = state.clone();

    let event: StoreEvent = match command {
        AdminCommand::OrdersLoaded { orders } => {
            let count: usize = orders.len();
            new_state.orders = orders;
            new_state.load = LoadState::Ready;
            StoreEvent::OrdersLoaded { count }
        }
        AdminCommand::OrdersLoadFailed { message } => {
            new_state.load = LoadState::Failed(message.clone());
            StoreEvent::OrdersLoadFailed { message }
        }
        AdminCommand::SetFilter { text } => {
            new_state.filter = text;
            StoreEvent::FilterChanged {
                filter: new_state.filter.clone(),
                visible: new_state.visible_orders().len(),
            }
        }
        AdminCommand::OrderApproved { order_id } => {
            patch_status(&mut new_state, &order_id, OrderStatus::Paid);
            new_state.message = Some(format!("Order {order_id} approved successfully!"));
            new_state.error = None;
            StoreEvent::OrderStatusChanged {
                order_id: order_id.to_string(),
                status: OrderStatus::Paid.to_string(),
            }
        }
        AdminCommand::OrderRejected { order_id } => {
            patch_status(&mut new_state, &order_id, OrderStatus::Rejected);
            new_state.message = Some(format!("Order {order_id} rejected successfully!"));
            new_state.error = None;
            StoreEvent::OrderStatusChanged {
                order_id: order_id.to_string(),
                status: OrderStatus::Rejected.to_string(),
            }
        }
        AdminCommand::ActionFailed { message } => {
            new_state.error = Some(message.clone());
            new_state.message = None;
            StoreEvent::AdminActionFailed { message }
        }
        AdminCommand::DismissMessage => {
            new_state.message = None;
            new_state.error = None;
            StoreEvent::MessageDismissed
        }
    };

    AdminTransitionResult { new_state, event }
}

/// Checks that an admin action is still allowed for an order.
///
/// # Errors
///
/// Returns `CoreError::OrderNotActionable` if the listed order is settled.
pub fn ensure_actionable(state: &AdminState, order_id: &OrderId) -> Result<(), CoreError> {
    match state.find_order(order_id) {
        Some(order) if !order.status.is_actionable() => Err(CoreError::OrderNotActionable {
            order_id: order_id.to_string(),
            status: order.status.to_string(),
        }),
        _ => Ok(()),
    }
}

fn patch_status(state: &mut AdminState, order_id: &OrderId, status: OrderStatus) {
    if let Some(order) = state.orders.iter_mut().find(|o| &o.id == order_id) {
        order.status = status;
    }
}

fn require_browsing<'a>(
    state: &'a StorefrontState,
    action: &'static str,
) -> Result<&'a Raffle, CoreError> {
    if !matches!(state.phase, CheckoutPhase::Browsing) {
        return Err(invalid(state, action));
    }
    state.raffle.as_ref().ok_or(CoreError::RaffleNotLoaded)
}

const fn invalid(state: &StorefrontState, action: &'static str) -> CoreError {
    CoreError::InvalidTransition {
        phase: state.phase.name(),
        action,
    }
}
