//! # Actions
//!
//! An [`Action`] is one unit of payment work: it claims requests through
//! [`Action::supports`] and performs them in [`Action::execute`].
//!
//! Composite flows are built by re-entering the gateway. Every `execute` call
//! receives an [`Executor`], the capability to dispatch further requests within
//! the same call tree:
//!
//! ```rust,ignore
//! impl Action for CaptureAction {
//!     fn supports(&self, request: &dyn Request) -> bool {
//!         request.is::<Capture<Order>>()
//!     }
//!
//!     fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
//!         let capture = request.downcast_mut::<Capture<Order>>().ok_or_else(|| unsupported(request))?;
//!         gateway.execute(&mut Synchronize::new(capture.model().id))?;
//!         Ok(())
//!     }
//! }
//! ```
//!
//! A reply or failure returned by the nested call is forwarded with `?`; the
//! action never has to tell them apart.

use crate::outcome::ActionResult;
use crate::request::Request;
use std::sync::Arc;

/// A pluggable handler that claims and executes requests.
///
/// # Contract
///
/// - `supports` is pure and cheap. It is called during every dispatch for every
///   action registered before the one that matches.
/// - `execute` is only called with requests `supports` accepted.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a payflow `Action`",
    label = "missing `Action` implementation",
    note = "Actions must implement `supports` and `execute`."
)]
pub trait Action: Send + Sync + 'static {
    /// Whether this action handles `request`.
    fn supports(&self, request: &dyn Request) -> bool;

    /// Perform the request.
    ///
    /// Return `Err(Interrupt::Reply(..))` to suspend the flow, or
    /// `Err(Interrupt::Failure(..))` when the request cannot be completed.
    ///
    /// [`Interrupt`]: crate::Interrupt
    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult;

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<A: Action + ?Sized> Action for Box<A> {
    fn supports(&self, request: &dyn Request) -> bool {
        (**self).supports(request)
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        (**self).execute(request, gateway)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<A: Action + ?Sized> Action for Arc<A> {
    fn supports(&self, request: &dyn Request) -> bool {
        (**self).supports(request)
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        (**self).execute(request, gateway)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// The capability to dispatch a request from inside an action.
///
/// Nested calls share the cycle bookkeeping of the call tree they belong to,
/// and return replies as `Err(Interrupt::Reply(..))` so they can be forwarded.
pub trait Executor {
    /// Dispatch `request` as part of the current call tree.
    fn execute(&mut self, request: &mut dyn Request) -> ActionResult;

    /// Number of dispatches on the stack, counting the one in progress.
    fn depth(&self) -> usize;
}
