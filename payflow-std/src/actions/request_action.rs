//! Actions bound to a single request type.

use payflow_core::{Action, ActionResult, Executor, GatewayError, Request};
use std::marker::PhantomData;

/// An action that supports every request of type `R` and hands the handler
/// the concrete value.
///
/// # Example
///
/// ```rust,ignore
/// let action = RequestAction::new(|capture: &mut Capture<Order>, gateway| {
///     gateway.execute(&mut Synchronize::new(capture.model().id))?;
///     capture.model_mut().captured = true;
///     Ok(())
/// });
/// ```
pub struct RequestAction<R, F> {
    handler: F,
    name: &'static str,
    _marker: PhantomData<fn(R)>,
}

impl<R, F> RequestAction<R, F>
where
    R: Request,
    F: Fn(&mut R, &mut dyn Executor) -> ActionResult + Send + Sync + 'static,
{
    /// Create an action for requests of type `R`.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            name: std::any::type_name::<R>(),
            _marker: PhantomData,
        }
    }

    /// Override the diagnostic name, which defaults to the request type name.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl<R, F> Action for RequestAction<R, F>
where
    R: Request,
    F: Fn(&mut R, &mut dyn Executor) -> ActionResult + Send + Sync + 'static,
{
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<R>()
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        let name = request.request_name();
        let request = request
            .downcast_mut::<R>()
            .ok_or(GatewayError::RequestNotSupported { request: name })?;
        (self.handler)(request, gateway)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Gateway;
    use crate::testing::MockExecutor;

    #[derive(Debug, Default)]
    struct Refund {
        refunded: bool,
    }

    impl Request for Refund {}

    #[derive(Debug)]
    struct Cancel;

    impl Request for Cancel {}

    #[test]
    fn test_supports_only_its_type() {
        let action = RequestAction::new(|_refund: &mut Refund, _gateway: &mut dyn Executor| Ok(()));
        assert!(action.supports(&Refund::default()));
        assert!(!action.supports(&Cancel));
        assert!(action.name().ends_with("Refund"));
        assert_eq!(action.named("refund").name(), "refund");
    }

    #[test]
    fn test_handler_mutates_request() {
        let gateway = Gateway::builder()
            .action(RequestAction::new(
                |refund: &mut Refund, _gateway: &mut dyn Executor| {
                    refund.refunded = true;
                    Ok(())
                },
            ))
            .build();

        let mut refund = Refund::default();
        let outcome = gateway.execute(&mut refund).unwrap();
        assert!(outcome.is_completed());
        assert!(refund.refunded);
    }

    #[test]
    fn test_wrong_request_is_rejected_when_called_directly() {
        let action = RequestAction::new(|_refund: &mut Refund, _gateway: &mut dyn Executor| Ok(()));
        let mut executor = MockExecutor::new();

        let result = action.execute(&mut Cancel, &mut executor);
        assert!(matches!(
            result,
            Err(payflow_core::Interrupt::Failure(GatewayError::RequestNotSupported { .. }))
        ));
    }
}
