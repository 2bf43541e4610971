// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storefront session: the board and the checkout flow of one raffle page.
//!
//! Each user action runs against the collaborator (when it needs to),
//! feeds the outcome to the core reducer, and publishes the resulting
//! event. Failures are recorded in the session state before being returned,
//! so the screen always has something to show.

use crate::client::RaffleService;
use crate::config::ServiceConfig;
use crate::error::ApiResult;
use crate::live::StoreEventBroadcaster;
use raffle_shop::{
    CheckoutPhase, Command, CoreError, IndexSource, StoreEvent, StorefrontState, ThreadRandom,
    TransitionResult, apply, draw_random_selection, prepare_order,
};
use raffle_shop_domain::{OrderDraft, OrderId, compose_handoff_message, handoff_link};
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::{Mutex, broadcast};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Blocking error shown when the raffle cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load raffle data";

/// Notice shown after the payment key was copied.
pub const PAYMENT_KEY_COPIED_MESSAGE: &str = "Payment key copied!";

/// Destination for the payment key copy action.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Clipboard` if the clipboard cannot be written.
    fn copy(&mut self, text: &str) -> ApiResult<()>;
}

/// Drives one storefront page against a [`RaffleService`].
pub struct StorefrontSession<S> {
    service: S,
    config: ServiceConfig,
    state: Arc<Mutex<StorefrontState>>,
    broadcaster: StoreEventBroadcaster,
    notice_timer: Option<JoinHandle<()>>,
}

impl<S: RaffleService> StorefrontSession<S> {
    /// Opens a page for a raffle. Nothing is fetched until [`Self::load`].
    #[must_use]
    pub fn new(service: S, config: ServiceConfig, raffle_eid: &str) -> Self {
        Self {
            service,
            config,
            state: Arc::new(Mutex::new(StorefrontState::new(raffle_eid))),
            broadcaster: StoreEventBroadcaster::new(),
            notice_timer: None,
        }
    }

    /// Publishes events on a shared broadcaster instead of a private one.
    #[must_use]
    pub fn with_broadcaster(mut self, broadcaster: StoreEventBroadcaster) -> Self {
        self.broadcaster = broadcaster;
        self
    }

    /// Subscribes to this session's events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.broadcaster.subscribe()
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> StorefrontState {
        self.state.lock().await.clone()
    }

    /// Fetches the raffle and populates the board.
    ///
    /// # Errors
    ///
    /// Returns the collaborator failure after recording it as a blocking
    /// load error. The selection is left empty.
    pub async fn load(&self) -> ApiResult<()> {
        let raffle_eid: String = self.state.lock().await.raffle_eid.clone();
        info!(raffle_eid = %raffle_eid, "Loading raffle");

        match self.service.fetch_raffle(&raffle_eid).await {
            Ok(raffle) => {
                if raffle.external_id != raffle_eid {
                    warn!(
                        raffle_eid = %raffle_eid,
                        returned = %raffle.external_id,
                        "Raffle payload carries a different eid"
                    );
                }
                if let Some((listed, declared)) = raffle.count_mismatch() {
                    warn!(
                        raffle_eid = %raffle_eid,
                        listed,
                        declared,
                        "Raffle number list does not match its declared total"
                    );
                }
                match self.dispatch(Command::RaffleLoaded { raffle }).await {
                    Ok(_) => Ok(()),
                    Err(err) => {
                        error!(raffle_eid = %raffle_eid, %err, "Rejected raffle payload");
                        self.dispatch(Command::RaffleLoadFailed {
                            message: String::from(LOAD_FAILED_MESSAGE),
                        })
                        .await?;
                        Err(err.into())
                    }
                }
            }
            Err(err) => {
                error!(raffle_eid = %raffle_eid, %err, "Failed to load raffle");
                self.dispatch(Command::RaffleLoadFailed {
                    message: String::from(LOAD_FAILED_MESSAGE),
                })
                .await?;
                Err(err)
            }
        }
    }

    /// Toggles one number in or out of the selection.
    ///
    /// Clicking a number that is not available does nothing.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the number is not on the board or the
    /// selection is frozen.
    pub async fn toggle(&self, number: u32) -> ApiResult<()> {
        self.dispatch(Command::ToggleNumber { number }).await?;
        Ok(())
    }

    /// Replaces the selection with `count` random available numbers.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `count` is zero or exceeds the
    /// available numbers; the selection is unchanged.
    pub async fn random_select(&self, count: usize) -> ApiResult<Vec<u32>> {
        self.random_select_with(count, &mut ThreadRandom).await
    }

    /// Like [`Self::random_select`], drawing indices from `source`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::random_select`].
    pub async fn random_select_with<R: IndexSource + Send>(
        &self,
        count: usize,
        source: &mut R,
    ) -> ApiResult<Vec<u32>> {
        let mut state = self.state.lock().await;
        let command: Command = draw_random_selection(&state, count, source)?;
        commit(&mut state, &self.broadcaster, command)?;
        let numbers: Vec<u32> = state.selection.to_vec();
        drop(state);

        info!(count, ?numbers, "Random selection drawn");
        Ok(numbers)
    }

    /// Empties the selection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the selection is frozen.
    pub async fn clear_selection(&self) -> ApiResult<()> {
        self.dispatch(Command::ClearSelection).await?;
        Ok(())
    }

    /// Opens the confirmation step for the current selection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the selection is empty.
    pub async fn open_confirmation(&self) -> ApiResult<()> {
        self.dispatch(Command::OpenConfirmation).await?;
        Ok(())
    }

    /// Closes the confirmation step and returns to the board.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no confirmation is open or a submit is
    /// in flight.
    pub async fn cancel(&self) -> ApiResult<()> {
        self.dispatch(Command::CancelConfirmation).await?;
        Ok(())
    }

    /// Clears the confirmation error, if any.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other actions.
    pub async fn dismiss_error(&self) -> ApiResult<()> {
        self.dispatch(Command::DismissError).await?;
        Ok(())
    }

    /// Creates an order for the confirmed selection.
    ///
    /// On failure the confirmation stays open with an error and the
    /// selection is kept for a retry.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a missing name, or the collaborator
    /// failure.
    pub async fn submit(
        &self,
        customer_name: &str,
        customer_phone: Option<&str>,
    ) -> ApiResult<OrderId> {
        let draft: OrderDraft = {
            let mut state = self.state.lock().await;
            match prepare_order(&state, customer_name, customer_phone) {
                Ok(draft) => draft,
                Err(err) => {
                    if matches!(
                        state.phase,
                        CheckoutPhase::ConfirmationOpen {
                            submitting: false,
                            ..
                        }
                    ) {
                        commit(
                            &mut state,
                            &self.broadcaster,
                            Command::SubmitFailed {
                                message: err.to_string(),
                            },
                        )?;
                    }
                    return Err(err.into());
                }
            }
        };

        self.dispatch(Command::BeginSubmit {
            draft: draft.clone(),
        })
        .await?;
        info!(
            raffle_eid = %draft.raffle_eid,
            numbers = ?draft.numbers,
            "Submitting order"
        );

        match self.service.create_order(&draft).await {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order created");
                self.dispatch(Command::SubmitSucceeded {
                    order_id: order_id.clone(),
                })
                .await?;
                Ok(order_id)
            }
            Err(err) => {
                error!(raffle_eid = %draft.raffle_eid, %err, "Failed to create order");
                self.dispatch(Command::SubmitFailed {
                    message: format!("Failed to submit order: {err}"),
                })
                .await?;
                Err(err)
            }
        }
    }

    /// Dismisses the success step and returns the messaging deep link.
    ///
    /// Opening the link is left to the caller; delivery is never confirmed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the success step is not showing.
    pub async fn dismiss_success(&self) -> ApiResult<String> {
        let mut state = self.state.lock().await;
        let CheckoutPhase::SuccessShown { order_id, numbers } = &state.phase else {
            return Err(CoreError::InvalidTransition {
                phase: state.phase.name(),
                action: "hand off",
            }
            .into());
        };
        let raffle_name: &str = state.raffle.as_ref().map_or("", |r| r.name.as_str());
        let message: String = compose_handoff_message(order_id, raffle_name, numbers);
        let link: String = handoff_link(&self.config.contact_phone, &message);

        commit(&mut state, &self.broadcaster, Command::DismissSuccess)?;
        drop(state);

        info!(%link, "Handing off to messaging channel");
        Ok(link)
    }

    /// Copies the payment key and shows a notice for the configured time.
    ///
    /// A newer notice replaces the older one and its pending expiry.
    ///
    /// # Errors
    ///
    /// Returns the clipboard failure; no notice is shown in that case.
    pub async fn copy_payment_key<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
    ) -> ApiResult<()> {
        clipboard.copy(&self.config.payment_key)?;

        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + self.config.notice_duration;
        self.dispatch(Command::ShowNotice {
            message: String::from(PAYMENT_KEY_COPIED_MESSAGE),
            expires_at,
        })
        .await?;

        if let Some(timer) = self.notice_timer.take() {
            timer.abort();
        }
        let state: Arc<Mutex<StorefrontState>> = Arc::clone(&self.state);
        let broadcaster: StoreEventBroadcaster = self.broadcaster.clone();
        let delay: Duration = self.config.notice_duration;
        self.notice_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            if let Err(err) = commit(
                &mut state,
                &broadcaster,
                Command::ExpireNotice { now: expires_at },
            ) {
                warn!(%err, "Failed to expire notice");
            }
        }));
        Ok(())
    }

    /// Clears the notice if it has expired by `now`.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches the other actions.
    pub async fn expire_notice(&self, now: OffsetDateTime) -> ApiResult<()> {
        self.dispatch(Command::ExpireNotice { now }).await?;
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> Result<Option<StoreEvent>, CoreError> {
        let mut state = self.state.lock().await;
        commit(&mut state, &self.broadcaster, command)
    }
}

impl<S> Drop for StorefrontSession<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.notice_timer.take() {
            timer.abort();
        }
    }
}

/// Applies a command in place and publishes its event.
fn commit(
    state: &mut StorefrontState,
    broadcaster: &StoreEventBroadcaster,
    command: Command,
) -> Result<Option<StoreEvent>, CoreError> {
    let action: &'static str = command.name();
    let TransitionResult { new_state, event } = apply(state, command).inspect_err(|err| {
        debug!(action, %err, "Storefront command rejected");
    })?;
    *state = new_state;
    if let Some(event) = &event {
        broadcaster.broadcast(event);
    }
    Ok(event)
}

