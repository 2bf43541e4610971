// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrative approval session and the ranking read.

use crate::client::RaffleService;
use crate::error::ApiResult;
use crate::live::StoreEventBroadcaster;
use raffle_shop::{
    AdminCommand, AdminState, AdminTransitionResult, StoreEvent, apply_admin, ensure_actionable,
};
use raffle_shop_domain::{Order, OrderId, RankingEntry, compute_ranking};
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::{error, info};

/// Blocking error shown when the order list cannot be loaded.
pub const ORDERS_LOAD_FAILED_MESSAGE: &str = "Failed to load orders";

/// Which admin action is being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    /// Approve the order.
    Approve,
    /// Reject the order.
    Reject,
}

impl AdminAction {
    const fn verb(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
        }
    }
}

/// Drives the admin screen against a [`RaffleService`].
///
/// Concurrent actions are not serialized: two approvals of the same order
/// both reach the collaborator.
pub struct AdminSession<S> {
    service: S,
    state: Arc<Mutex<AdminState>>,
    broadcaster: StoreEventBroadcaster,
}

impl<S: RaffleService> AdminSession<S> {
    /// Opens the admin screen. Nothing is fetched until [`Self::load_orders`].
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(AdminState::new())),
            broadcaster: StoreEventBroadcaster::new(),
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
    pub async fn snapshot(&self) -> AdminState {
        self.state.lock().await.clone()
    }

    /// Fetches every order.
    ///
    /// # Errors
    ///
    /// Returns the collaborator failure after recording it as a blocking
    /// load error.
    pub async fn load_orders(&self) -> ApiResult<()> {
        info!("Loading orders");
        match self.service.list_orders().await {
            Ok(orders) => {
                self.dispatch(AdminCommand::OrdersLoaded { orders }).await;
                Ok(())
            }
            Err(err) => {
                error!(%err, "Failed to load orders");
                self.dispatch(AdminCommand::OrdersLoadFailed {
                    message: String::from(ORDERS_LOAD_FAILED_MESSAGE),
                })
                .await;
                Err(err)
            }
        }
    }

    /// Sets the customer-name filter.
    pub async fn set_filter(&self, text: &str) {
        self.dispatch(AdminCommand::SetFilter {
            text: text.to_string(),
        })
        .await;
    }

    /// Returns the orders matching the current filter.
    pub async fn visible_orders(&self) -> Vec<Order> {
        self.state
            .lock()
            .await
            .visible_orders()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns whether the approve control is enabled for an order.
    pub async fn can_approve(&self, order_id: &OrderId) -> bool {
        self.state.lock().await.can_approve(order_id)
    }

    /// Returns whether the reject control is enabled for an order.
    pub async fn can_reject(&self, order_id: &OrderId) -> bool {
        self.state.lock().await.can_reject(order_id)
    }

    /// Approves an order and marks it paid locally.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the listed order is already settled,
    /// or the collaborator failure.
    pub async fn approve(&self, order_id: &OrderId) -> ApiResult<()> {
        self.run(AdminAction::Approve, order_id).await
    }

    /// Rejects an order and marks it rejected locally.
    ///
    /// # Errors
    ///
    /// Same as [`Self::approve`].
    pub async fn reject(&self, order_id: &OrderId) -> ApiResult<()> {
        self.run(AdminAction::Reject, order_id).await
    }

    /// Clears the success or failure message.
    pub async fn dismiss_message(&self) {
        self.dispatch(AdminCommand::DismissMessage).await;
    }

    async fn run(&self, action: AdminAction, order_id: &OrderId) -> ApiResult<()> {
        ensure_actionable(&*self.state.lock().await, order_id)?;
        info!(order_id = %order_id, action = action.verb(), "Running admin action");

        let outcome: ApiResult<()> = match action {
            AdminAction::Approve => self.service.approve_order(order_id).await,
            AdminAction::Reject => self.service.reject_order(order_id).await,
        };

        match outcome {
            Ok(()) => {
                let command: AdminCommand = match action {
                    AdminAction::Approve => AdminCommand::OrderApproved {
                        order_id: order_id.clone(),
                    },
                    AdminAction::Reject => AdminCommand::OrderRejected {
                        order_id: order_id.clone(),
                    },
                };
                self.dispatch(command).await;
                Ok(())
            }
            Err(err) => {
                error!(order_id = %order_id, action = action.verb(), %err, "Admin action failed");
                self.dispatch(AdminCommand::ActionFailed {
                    message: format!("Failed to {} order {order_id}.", action.verb()),
                })
                .await;
                Err(err)
            }
        }
    }

    async fn dispatch(&self, command: AdminCommand) {
        let mut state = self.state.lock().await;
        let AdminTransitionResult { new_state, event } = apply_admin(&state, command);
        *state = new_state;
        drop(state);
        self.broadcaster.broadcast(&event);
    }
}

/// Fetches every order and aggregates the buyer ranking.
///
/// # Errors
///
/// Returns the collaborator failure.
pub async fn load_ranking<S: RaffleService>(service: &S) -> ApiResult<Vec<RankingEntry>> {
    info!("Loading ranking");
    let orders: Vec<Order> = service.list_orders().await.inspect_err(|err| {
        error!(%err, "Failed to load orders for ranking");
    })?;
    Ok(compute_ranking(&orders))
}
