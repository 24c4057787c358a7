//! Error types for payflow.
//!
//! - [`PayflowError`] - Top-level error type
//! - [`GatewayError`] - Errors produced while dispatching a request
//! - [`RegistryError`] - Errors from named gateway lookup

use thiserror::Error;

/// A boxed error type for failures raised by actions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all payflow operations.
#[derive(Error, Debug)]
pub enum PayflowError {
    /// An error occurred while executing a request.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// An error occurred while looking up a gateway.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can end a dispatch.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No registered action supports the request.
    #[error("request not supported: no action supports `{request}`")]
    RequestNotSupported {
        /// Name of the rejected request type.
        request: &'static str,
    },

    /// The same request was dispatched more often than the cycle threshold
    /// allows within one top-level call.
    #[error("the action `{action}` is called {count} times; possible requests infinite loop detected")]
    CycleDetected {
        /// Name of the action that keeps being invoked.
        action: &'static str,
        /// Number of dispatches of the request, including the rejected one.
        count: usize,
    },

    /// Nested dispatches went deeper than the configured limit.
    #[error("dispatch depth exceeded the limit of {limit} nested calls")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// A failure raised by an action, passed through untouched.
    #[error(transparent)]
    Action(BoxError),
}

impl GatewayError {
    /// Wrap an action failure.
    pub fn action(err: impl Into<BoxError>) -> Self {
        GatewayError::Action(err.into())
    }

    /// Returns `true` for [`GatewayError::RequestNotSupported`].
    pub fn is_not_supported(&self) -> bool {
        matches!(self, GatewayError::RequestNotSupported { .. })
    }

    /// Returns `true` for [`GatewayError::CycleDetected`].
    pub fn is_cycle(&self) -> bool {
        matches!(self, GatewayError::CycleDetected { .. })
    }
}

impl From<BoxError> for GatewayError {
    fn from(err: BoxError) -> Self {
        GatewayError::Action(err)
    }
}

/// Errors that can occur in a gateway registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No gateway is registered under the name.
    #[error("gateway not found: {0}")]
    GatewayNotFound(String),

    /// A gateway is already registered under the name.
    #[error("gateway already exists: {0}")]
    AlreadyExists(String),
}
