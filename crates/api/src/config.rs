// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client configuration.

use crate::error::{ApiError, ApiResult};
use std::time::Duration;

/// Default collaborator base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// How long the "payment key copied" notice stays visible.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Settings shared by every session.
///
/// No request timeout is configured; calls rely on the transport default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the order/raffle collaborator service.
    pub base_url: String,
    /// Messaging contact the handoff link is addressed to.
    pub contact_phone: String,
    /// Payment reference copied by the payment key action.
    pub payment_key: String,
    /// Lifetime of transient notices.
    pub notice_duration: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            contact_phone: String::new(),
            payment_key: String::new(),
            notice_duration: DEFAULT_NOTICE_DURATION,
        }
    }
}

impl ServiceConfig {
    /// Creates a configuration for the given collaborator.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Sets the handoff contact.
    #[must_use]
    pub fn with_contact_phone(mut self, contact_phone: &str) -> Self {
        self.contact_phone = contact_phone.to_string();
        self
    }

    /// Sets the payment reference.
    #[must_use]
    pub fn with_payment_key(mut self, payment_key: &str) -> Self {
        self.payment_key = payment_key.to_string();
        self
    }

    /// Sets the notice lifetime.
    #[must_use]
    pub const fn with_notice_duration(mut self, notice_duration: Duration) -> Self {
        self.notice_duration = notice_duration;
        self
    }

    /// Checks that the configuration can be used.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL is not an http(s) URL.
    pub fn validate(&self) -> ApiResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        Ok(())
    }
}
