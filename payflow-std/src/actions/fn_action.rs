//! Closure-backed actions.

use payflow_core::{Action, ActionResult, Executor, Request};

/// An action built from a `supports` closure and an `execute` closure.
///
/// # Example
///
/// ```rust,ignore
/// let action = FnAction::new(
///     "notify",
///     |request| request.is::<Notify<Order>>(),
///     |request, gateway| {
///         gateway.execute(&mut Synchronize::new(order_id(request)?))?;
///         Ok(())
///     },
/// );
/// ```
pub struct FnAction<S, E> {
    name: &'static str,
    supports: S,
    execute: E,
}

impl<S, E> FnAction<S, E>
where
    S: Fn(&dyn Request) -> bool + Send + Sync + 'static,
    E: Fn(&mut dyn Request, &mut dyn Executor) -> ActionResult + Send + Sync + 'static,
{
    /// Create a new closure action.
    pub fn new(name: &'static str, supports: S, execute: E) -> Self {
        Self {
            name,
            supports,
            execute,
        }
    }
}

impl<S, E> Action for FnAction<S, E>
where
    S: Fn(&dyn Request) -> bool + Send + Sync + 'static,
    E: Fn(&mut dyn Request, &mut dyn Executor) -> ActionResult + Send + Sync + 'static,
{
    fn supports(&self, request: &dyn Request) -> bool {
        (self.supports)(request)
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        (self.execute)(request, gateway)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
