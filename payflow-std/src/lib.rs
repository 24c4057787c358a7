//! # payflow-std
//!
//! Standard implementations for the payflow payment request dispatcher.
//!
//! This crate provides:
//! - **Gateway**: [`Gateway`] and [`GatewayBuilder`]
//! - **Configuration**: [`GatewayConfig`]
//! - **Registry**: [`GatewayRegistry`] for named gateways
//! - **Action adapters**: [`FnAction`], [`RequestAction`]
//! - **Generic requests**: [`Capture`], [`Authorize`], [`Synchronize`],
//!   [`Notify`], [`Refund`], [`Cancel`], [`GetHumanStatus`]
//! - **Standard extensions**: Logging
//! - **Testing utilities**: [`testing`]
//!
//! [`Gateway`]: gateway::Gateway
//! [`GatewayBuilder`]: gateway::GatewayBuilder
//! [`GatewayConfig`]: config::GatewayConfig
//! [`GatewayRegistry`]: registry::GatewayRegistry
//! [`FnAction`]: actions::FnAction
//! [`RequestAction`]: actions::RequestAction
//! [`Capture`]: requests::Capture
//! [`Authorize`]: requests::Authorize
//! [`Synchronize`]: requests::Synchronize
//! [`Notify`]: requests::Notify
//! [`Refund`]: requests::Refund
//! [`Cancel`]: requests::Cancel
//! [`GetHumanStatus`]: requests::GetHumanStatus

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use payflow_core;

// Modules
pub mod actions;
pub mod config;
pub mod extensions;
pub mod gateway;
pub mod registry;
pub mod requests;
pub mod testing;
