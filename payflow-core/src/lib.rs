//! # payflow-core
//!
//! Core traits for the payflow payment request dispatcher.
//!
//! This crate only depends on `thiserror` and is meant to be imported by
//! crates that ship actions or extensions without pulling in the gateway.
//!
//! # Moving Parts
//!
//! - [`Request`]: an opaque value describing the desired operation. The
//!   gateway matches it by type and never reads its contents.
//! - [`Action`]: claims requests with `supports` and performs them with
//!   `execute`. Actions receive an [`Executor`] to dispatch further requests.
//! - [`Reply`]: the payload of an interactive suspension, such as a redirect.
//! - [`Interrupt`] / [`Outcome`]: nested dispatches return
//!   `Result<(), Interrupt>`; the top-level call returns an `Outcome`.
//! - [`Extension`]: hooks run around every dispatch.
//!
//! # Error Types
//!
//! - [`PayflowError`] - Top-level error type
//! - [`GatewayError`] - Dispatch errors
//! - [`RegistryError`] - Gateway lookup errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod extension;
mod outcome;
mod reply;
mod request;

// Re-exports
pub use action::{Action, Executor};
pub use error::{BoxError, GatewayError, PayflowError, RegistryError};
pub use extension::Extension;
pub use outcome::{ActionResult, Interrupt, Outcome};
pub use reply::Reply;
pub use request::{AsAny, Request, RequestId};
