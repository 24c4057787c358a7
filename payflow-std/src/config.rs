//! Gateway configuration.

/// Dispatches of one request allowed while an earlier one is still running.
pub const DEFAULT_CYCLE_THRESHOLD: usize = 100;

/// Nested dispatches allowed before the call tree is aborted.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Limits applied to every call tree of a [`Gateway`].
///
/// # Example
///
/// ```rust,ignore
/// let config = GatewayConfig::new()
///     .with_cycle_threshold(20)
///     .with_max_depth(64);
/// ```
///
/// [`Gateway`]: crate::gateway::Gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    cycle_threshold: usize,
    max_depth: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayConfig {
    /// Create the default configuration.
    pub const fn new() -> Self {
        Self {
            cycle_threshold: DEFAULT_CYCLE_THRESHOLD,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set how many times one request may be dispatched from within its own
    /// handling.
    ///
    /// The dispatch that goes past this number fails with `CycleDetected`.
    /// A request's count is dropped once no dispatch of it is running, so
    /// dispatching fresh requests one after another never adds up.
    pub const fn with_cycle_threshold(mut self, threshold: usize) -> Self {
        self.cycle_threshold = threshold;
        self
    }

    /// Set the maximum nesting depth.
    ///
    /// This bounds stack usage for call trees that keep creating fresh
    /// requests, which cycle detection cannot see. The top-level call is at
    /// depth 1, so a limit of `n` allows `n` levels including it.
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// The cycle threshold.
    pub const fn cycle_threshold(&self) -> usize {
        self.cycle_threshold
    }

    /// The maximum nesting depth.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}
