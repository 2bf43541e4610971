// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store event fan-out.
//!
//! Sessions publish every [`StoreEvent`] they produce here. Subscribers
//! (renderers, loggers, tests) receive facts about what changed; the
//! session state stays the source of truth.
//!
//! - Events are delivered to every subscriber present when they are sent
//! - Slow subscribers lose the oldest events instead of blocking sessions
//! - Nothing is ever sent back to a session through this channel

use raffle_shop::StoreEvent;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events buffered per subscriber.
const EVENT_BUFFER_SIZE: usize = 100;

/// Broadcaster for store events.
///
/// Cloning shares the channel, so one broadcaster can serve the storefront
/// and admin sessions of the same process.
#[derive(Debug, Clone)]
pub struct StoreEventBroadcaster {
    tx: broadcast::Sender<StoreEvent>,
}

impl StoreEventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all current subscribers.
    ///
    /// If nobody is subscribed, the event is dropped.
    pub fn broadcast(&self, event: &StoreEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast store event");
            }
            Err(_) => {
                debug!(?event, "No receivers for store event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Returns how many subscribers are attached.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for StoreEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
