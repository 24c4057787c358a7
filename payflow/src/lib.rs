//! # payflow - Re-entrant Request Dispatch for Payment Flows
//!
//! A [`Gateway`] routes each request to the first registered [`Action`] that
//! supports it. Actions build multi-step flows by dispatching further requests
//! through the [`Executor`] they are handed, to any depth. Two things make the
//! dispatcher more than a lookup table:
//!
//! - **Interactive replies.** An action that needs the payer (a 3-D Secure
//!   page, a wallet login) returns a [`Reply`]. It passes through every nested
//!   level with `?` and reaches the original caller as
//!   [`Outcome::Suspended`], never as an error.
//! - **Cycle detection.** A request dispatched more often than the configured
//!   threshold (100 by default) within one top-level call aborts the call with
//!   [`GatewayError::CycleDetected`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payflow::prelude::*;
//!
//! let gateway = Gateway::builder()
//!     .action(RequestAction::new(|capture: &mut Capture<Order>, gateway: &mut dyn Executor| {
//!         gateway.execute(&mut Synchronize::new(capture.model().id))?;
//!         if capture.model().needs_3ds {
//!             return Err(Reply::redirect(capture.model().acs_url.clone()).into());
//!         }
//!         Ok(())
//!     }))
//!     .action(SyncAction::new(client))
//!     .build();
//!
//! match gateway.execute(&mut Capture::new(order))? {
//!     Outcome::Completed => { /* done */ }
//!     Outcome::Suspended(reply) => { /* send the payer to reply.url() */ }
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use payflow_core::{
    // Action
    Action,
    // Results
    ActionResult,
    // Request
    AsAny,
    // Error types
    BoxError,
    Executor,
    // Extension
    Extension,
    GatewayError,
    Interrupt,
    Outcome,
    PayflowError,
    RegistryError,
    Reply,
    Request,
    RequestId,
};

// Gateway
pub use payflow_std::{
    config::{DEFAULT_CYCLE_THRESHOLD, DEFAULT_MAX_DEPTH, GatewayConfig},
    gateway::{Gateway, GatewayBuilder},
    registry::GatewayRegistry,
};

/// Ready-made action adapters.
pub mod actions {
    pub use payflow_std::actions::{FnAction, RequestAction};
}

/// Provider-agnostic payment requests.
pub mod requests {
    pub use payflow_std::requests::{
        Authorize, Cancel, Capture, Generic, GetHumanStatus, Notify, Refund, Status, Synchronize,
    };
}

/// Standard extension implementations.
pub mod extensions {
    #![allow(clippy::wildcard_imports)]
    pub use payflow_std::extensions::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use payflow_std::testing::*;
}

/// Prelude module - common imports for payflow.
///
/// # Usage
///
/// ```rust,ignore
/// use payflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Core traits
        Action,
        ActionResult,
        Executor,
        Extension,
        // Gateway
        Gateway,
        GatewayConfig,
        // Errors
        GatewayError,
        Interrupt,
        Outcome,
        Reply,
        Request,
        actions::{FnAction, RequestAction},
        requests::{
            Authorize, Cancel, Capture, Generic, GetHumanStatus, Notify, Refund, Status,
            Synchronize,
        },
    };
}

#[cfg(feature = "macros")]
pub use payflow_macros::Request;
