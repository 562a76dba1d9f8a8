use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned to callers for any failure that is not an input validation error.
pub const RETRIEVAL_ERROR: &str = "There was an error retrieving this launch";

/// Unified error type for the launchpad workspace.
///
/// Validation variants carry the exact caller-facing wording; every other
/// variant is collapsed into [`RETRIEVAL_ERROR`] at the public boundary.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LaunchError {
    /// The year token is malformed or lies in the future.
    #[error("invalid year")]
    InvalidYear,

    /// The range start is malformed or lies after today.
    #[error("invalid start year")]
    InvalidRangeStart,

    /// The range end is malformed or lies before today.
    #[error("invalid end year")]
    InvalidRangeEnd,

    /// Invalid construction argument (builders, configuration).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned data (undecodable body, unexpected shape).
    #[error("data issue: {0}")]
    Data(String),

    /// The upstream call exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl LaunchError {
    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// True for errors caused by the caller's query arguments.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear | Self::InvalidRangeStart | Self::InvalidRangeEnd
        )
    }

    /// The message exposed to callers of the list-returning operations.
    ///
    /// Validation errors keep their own wording; transport, decode and timeout
    /// failures all read as [`RETRIEVAL_ERROR`] so the underlying cause stays internal.
    #[must_use]
    pub fn caller_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            RETRIEVAL_ERROR.to_string()
        }
    }
}
