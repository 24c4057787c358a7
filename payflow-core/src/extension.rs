//! Gateway extensions.
//!
//! Extensions observe every dispatch of a gateway, top-level and nested alike,
//! in registration order. They can veto a dispatch before an action is chosen
//! but never see or alter the call tree's bookkeeping.

use crate::outcome::ActionResult;
use crate::request::Request;

/// Hooks run around each dispatch.
///
/// All methods have no-op defaults.
pub trait Extension: Send + Sync + 'static {
    /// Called before an action is selected.
    ///
    /// Returning an interrupt ends the dispatch with it; a reply returned here
    /// behaves exactly like one raised by an action.
    fn on_pre_execute(&self, _request: &mut dyn Request, _depth: usize) -> ActionResult {
        Ok(())
    }

    /// Called once the action is selected, right before it runs.
    fn on_execute(&self, _request: &dyn Request, _action: &'static str, _depth: usize) {}

    /// Called when the dispatch ends, whatever the result.
    fn on_post_execute(&self, _request: &dyn Request, _result: &ActionResult, _depth: usize) {}
}
