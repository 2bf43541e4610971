// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the service boundary.

use raffle_shop::CoreError;
use raffle_shop_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by collaborator calls and session actions.
///
/// Every variant except `Validation` is a network failure in the sense of
/// the storefront's error taxonomy.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The collaborator answered with a non-success status.
    #[error("Service returned HTTP {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The response body, as text.
        body: String,
    },

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The collaborator answered with a payload this client cannot read.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The action was refused locally before anything was sent.
    #[error("{0}")]
    Validation(#[from] CoreError),

    /// The client configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The clipboard could not be written.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

impl ApiError {
    /// Returns whether the error is a local validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether the error came from talking to the collaborator.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Status { .. } | Self::NotFound(_) | Self::Decode(_)
        )
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Validation(CoreError::DomainViolation(err))
    }
}

/// Result type for service and session operations.
pub type ApiResult<T> = Result<T, ApiError>;
