//! Logging extension for dispatch observation.

use payflow_core::{ActionResult, Extension, Request};

#[cfg(feature = "tracing")]
use payflow_core::Interrupt;

/// An extension that logs every dispatch of a gateway.
///
/// Events are emitted through `tracing` when the `tracing` feature is on and
/// dropped otherwise.
///
/// # Example
///
/// ```rust,ignore
/// let gateway = Gateway::builder()
///     .action(CaptureAction)
///     .extension(LoggingExtension::named("stripe"))
///     .build();
/// ```
pub struct LoggingExtension {
    name: &'static str,
}

impl LoggingExtension {
    /// Create a new `LoggingExtension` with a default name.
    pub fn new() -> Self {
        Self { name: "gateway" }
    }

    /// Create a new `LoggingExtension` with a custom name.
    ///
    /// The name is attached to every event to tell gateways apart.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name attached to events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for LoggingExtension {
    fn on_pre_execute(&self, request: &mut dyn Request, depth: usize) -> ActionResult {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                gateway = %self.name,
                request = ?request,
                depth,
                "dispatching request"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, request, depth);
        }

        Ok(())
    }

    fn on_execute(&self, request: &dyn Request, action: &'static str, depth: usize) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                gateway = %self.name,
                request = request.request_name(),
                action,
                depth,
                "executing action"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, request, action, depth);
        }
    }

    fn on_post_execute(&self, request: &dyn Request, result: &ActionResult, depth: usize) {
        #[cfg(feature = "tracing")]
        match result {
            Ok(()) => {
                tracing::debug!(
                    gateway = %self.name,
                    request = request.request_name(),
                    depth,
                    "action completed"
                );
            }
            Err(Interrupt::Reply(reply)) => {
                tracing::info!(
                    gateway = %self.name,
                    request = request.request_name(),
                    depth,
                    %reply,
                    "action replied"
                );
            }
            Err(Interrupt::Failure(err)) => {
                tracing::warn!(
                    gateway = %self.name,
                    request = request.request_name(),
                    depth,
                    error = %err,
                    "action failed"
                );
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, request, result, depth);
        }
    }
}
