//! Ready-made action adapters.
//!
//! Use these when an action is small enough that a dedicated type would be
//! noise. Anything with its own state or dependencies should implement
//! [`Action`](payflow_core::Action) directly.

pub mod fn_action;
pub mod request_action;

pub use fn_action::FnAction;
pub use request_action::RequestAction;
