//! The gateway: ordered action lookup with re-entrant dispatch.
//!
//! A [`Gateway`] owns an ordered list of actions and extensions. Calling
//! [`Gateway::execute`] starts a call tree: a fresh scope is created, the
//! first action whose `supports` accepts the request runs, and every request
//! that action dispatches through its [`Executor`] is handled by the same
//! scope.
//!
//! The scope carries the tree's bookkeeping (the nesting depth and how many
//! times each request still on the stack has been dispatched) and lives on
//! the caller's stack. It is dropped when the top-level call returns, on
//! every path, so two calls never share state even when they run
//! concurrently on one gateway.

use crate::config::GatewayConfig;
use payflow_core::{
    Action, ActionResult, Executor, Extension, GatewayError, Outcome, Request, RequestId,
};
use std::collections::HashMap;

/// An ordered set of actions and extensions that requests are dispatched to.
///
/// Registration takes `&mut self`, so a gateway shared as `Arc<Gateway>` is
/// frozen and can serve concurrent top-level calls.
pub struct Gateway {
    actions: Vec<Box<dyn Action>>,
    extensions: Vec<Box<dyn Extension>>,
    config: GatewayConfig,
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

impl Gateway {
    /// Create an empty gateway with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    /// Create an empty gateway with `config`.
    pub fn with_config(config: GatewayConfig) -> Self {
        Self {
            actions: Vec::new(),
            extensions: Vec::new(),
            config,
        }
    }

    /// Start building a gateway.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }

    /// Append an action. Earlier actions win when several support a request.
    pub fn add_action<A: Action>(&mut self, action: A) -> &mut Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Insert an action ahead of every registered one.
    pub fn prepend_action<A: Action>(&mut self, action: A) -> &mut Self {
        self.actions.insert(0, Box::new(action));
        self
    }

    /// Append an extension.
    pub fn add_extension<E: Extension>(&mut self, extension: E) -> &mut Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// The configuration applied to each call tree.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Names of the registered actions, in lookup order.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|action| action.name()).collect()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no action is registered.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Execute `request` as a new top-level call.
    ///
    /// Returns [`Outcome::Suspended`] when an action, at any depth, replied;
    /// the reply is the one the action produced.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::RequestNotSupported`] if no action supports a request
    ///   dispatched in the call tree.
    /// - [`GatewayError::CycleDetected`] if one request is dispatched more
    ///   often than the cycle threshold.
    /// - [`GatewayError::DepthExceeded`] if nesting goes past the max depth.
    /// - [`GatewayError::Action`] with the failure an action raised.
    pub fn execute(&self, request: &mut dyn Request) -> Result<Outcome, GatewayError> {
        let result = {
            let mut scope = Scope::new(self);
            scope.execute(request)
        };

        let outcome = Outcome::from_result(result);

        #[cfg(feature = "tracing")]
        match &outcome {
            Ok(Outcome::Completed) => {
                tracing::debug!(request = request.request_name(), "request completed");
            }
            Ok(Outcome::Suspended(reply)) => {
                tracing::debug!(request = request.request_name(), %reply, "request suspended");
            }
            Err(err) => {
                tracing::debug!(request = request.request_name(), error = %err, "request failed");
            }
        }

        outcome
    }

    /// The first action that supports `request`.
    fn find_action(&self, request: &dyn Request) -> Result<&dyn Action, GatewayError> {
        self.actions
            .iter()
            .find(|action| action.supports(request))
            .map(|action| &**action)
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!(request = request.request_name(), "no action supports request");

                GatewayError::RequestNotSupported {
                    request: request.request_name(),
                }
            })
    }

    fn dispatch(&self, request: &mut dyn Request, scope: &mut Scope<'_>) -> ActionResult {
        let depth = scope.depth;
        let result = self.run(request, scope);

        for extension in &self.extensions {
            extension.on_post_execute(&*request, &result, depth);
        }

        result
    }

    fn run(&self, request: &mut dyn Request, scope: &mut Scope<'_>) -> ActionResult {
        let depth = scope.depth;
        let limit = self.config.max_depth();
        if depth > limit {
            #[cfg(feature = "tracing")]
            tracing::warn!(request = request.request_name(), limit, "dispatch depth exceeded");

            return Err(GatewayError::DepthExceeded { limit }.into());
        }

        for extension in &self.extensions {
            extension.on_pre_execute(request, depth)?;
        }

        let action = self.find_action(&*request)?;

        let identity = request.identity();
        let count = scope.record_call(identity);
        if count > self.config.cycle_threshold() {
            scope.release_call(identity);

            #[cfg(feature = "tracing")]
            tracing::warn!(
                request = request.request_name(),
                action = action.name(),
                count,
                "possible requests infinite loop detected"
            );

            return Err(GatewayError::CycleDetected {
                action: action.name(),
                count,
            }
            .into());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            request = request.request_name(),
            action = action.name(),
            depth,
            "executing action"
        );

        for extension in &self.extensions {
            extension.on_execute(&*request, action.name(), depth);
        }

        let result = action.execute(request, scope);
        scope.release_call(identity);
        result
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("actions", &self.action_names())
            .field("extensions", &self.extensions.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Bookkeeping of one top-level call, threaded through its nested dispatches.
///
/// Actions see it as `&mut dyn Executor`.
struct Scope<'g> {
    gateway: &'g Gateway,
    calls: HashMap<RequestId, Calls>,
    depth: usize,
}

/// Dispatches of one request identity while any of them is still running.
#[derive(Debug, Default)]
struct Calls {
    total: usize,
    running: usize,
}

impl<'g> Scope<'g> {
    fn new(gateway: &'g Gateway) -> Self {
        Self {
            gateway,
            calls: HashMap::new(),
            depth: 0,
        }
    }

    /// How many times `request` has been dispatched since it last had no
    /// dispatch running.
    #[cfg(test)]
    fn calls(&self, request: RequestId) -> usize {
        self.calls.get(&request).map_or(0, |calls| calls.total)
    }

    fn record_call(&mut self, request: RequestId) -> usize {
        let calls = self.calls.entry(request).or_default();
        calls.total += 1;
        calls.running += 1;
        calls.total
    }

    /// Ends one dispatch of `request`. Once none is running the count is
    /// dropped: the object is off the stack, and its address may be reused.
    fn release_call(&mut self, request: RequestId) {
        if let Some(calls) = self.calls.get_mut(&request) {
            calls.running -= 1;
            if calls.running == 0 {
                self.calls.remove(&request);
            }
        }
    }
}

impl Executor for Scope<'_> {
    fn execute(&mut self, request: &mut dyn Request) -> ActionResult {
        let gateway = self.gateway;
        self.depth += 1;
        let result = gateway.dispatch(request, self);
        self.depth -= 1;
        result
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

/// Builder for constructing a [`Gateway`].
///
/// # Example
///
/// ```rust,ignore
/// let gateway = Gateway::builder()
///     .action(CaptureAction)
///     .action(SyncAction::new(client))
///     .extension(LoggingExtension::named("stripe"))
///     .build();
/// ```
#[derive(Default)]
pub struct GatewayBuilder {
    gateway: Gateway,
}

impl GatewayBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            gateway: Gateway::new(),
        }
    }

    /// Append an action.
    pub fn action<A: Action>(mut self, action: A) -> Self {
        self.gateway.add_action(action);
        self
    }

    /// Insert an action ahead of every action added so far.
    pub fn prepend_action<A: Action>(mut self, action: A) -> Self {
        self.gateway.prepend_action(action);
        self
    }

    /// Append an extension.
    pub fn extension<E: Extension>(mut self, extension: E) -> Self {
        self.gateway.add_extension(extension);
        self
    }

    /// Replace the configuration.
    pub fn config(mut self, config: GatewayConfig) -> Self {
        self.gateway.config = config;
        self
    }

    /// Set the cycle threshold.
    pub fn cycle_threshold(mut self, threshold: usize) -> Self {
        self.gateway.config = self.gateway.config.with_cycle_threshold(threshold);
        self
    }

    /// Build the gateway.
    pub fn build(self) -> Gateway {
        self.gateway
    }
}
