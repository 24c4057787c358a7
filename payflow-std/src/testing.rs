//! Testing utilities for payflow.
//!
//! # Features
//!
//! - [`MockExecutor`]: stands in for the gateway when unit-testing one action
//! - [`CountingAction`]: an action that counts its invocations
//! - [`ReplyAction`]: an action that always suspends with a reply
//! - [`FailingAction`]: an action that always fails
//! - [`RecordingExtension`]: an extension that records every hook call

use payflow_core::{Action, ActionResult, Executor, Extension, Interrupt, Reply, Request};
use std::{
    any::TypeId,
    collections::VecDeque,
    marker::PhantomData,
    sync::{
        Arc, Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Mock Executor
// ============================================================================

type Responder = Box<dyn FnMut(&mut dyn Request) -> ActionResult + Send>;

/// An [`Executor`] that records the requests an action dispatches.
///
/// Responses are consumed in order, one per dispatched request; once they run
/// out every dispatch completes.
///
/// # Example
///
/// ```rust,ignore
/// let mut gateway = MockExecutor::new()
///     .then(|_sync| Ok(()))
///     .then(|_update| Err(Reply::redirect("https://psp.example").into()));
///
/// action.execute(&mut notify, &mut gateway)?;
/// assert_eq!(gateway.call_count(), 2);
/// ```
pub struct MockExecutor {
    calls: Vec<(TypeId, &'static str)>,
    responders: VecDeque<Responder>,
    depth: usize,
}

impl MockExecutor {
    /// Create a mock that completes every dispatch, reporting depth 1.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            responders: VecDeque::new(),
            depth: 1,
        }
    }

    /// Report `depth` from [`Executor::depth`].
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Queue the response to the next unanswered dispatch.
    pub fn then<F>(mut self, responder: F) -> Self
    where
        F: FnMut(&mut dyn Request) -> ActionResult + Send + 'static,
    {
        self.responders.push_back(Box::new(responder));
        self
    }

    /// Names of the dispatched requests, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.iter().map(|(_, name)| *name).collect()
    }

    /// Number of dispatched requests.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of dispatched requests of type `R`.
    pub fn calls_of<R: Request>(&self) -> usize {
        let type_id = TypeId::of::<R>();
        self.calls.iter().filter(|(id, _)| *id == type_id).count()
    }

    /// Returns `true` if the `index`-th dispatched request was an `R`.
    pub fn called_with<R: Request>(&self, index: usize) -> bool {
        self.calls
            .get(index)
            .is_some_and(|(id, _)| *id == TypeId::of::<R>())
    }
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for MockExecutor {
    fn execute(&mut self, request: &mut dyn Request) -> ActionResult {
        self.calls
            .push((request.request_type(), request.request_name()));
        match self.responders.pop_front() {
            Some(mut responder) => responder(request),
            None => Ok(()),
        }
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

// ============================================================================
// Counting Action
// ============================================================================

/// An action for requests of type `R` that counts invocations.
///
/// Clones share the counter.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingAction::<Capture<Order>>::new();
/// let gateway = Gateway::builder().action(counter.clone()).build();
///
/// gateway.execute(&mut Capture::new(order))?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingAction<R> {
    count: Arc<AtomicUsize>,
    _marker: PhantomData<fn(R)>,
}

impl<R: Request> CountingAction<R> {
    /// Create a new counting action.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            _marker: PhantomData,
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<R: Request> Default for CountingAction<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for CountingAction<R> {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: Request> Action for CountingAction<R> {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<R>()
    }

    fn execute(&self, _request: &mut dyn Request, _gateway: &mut dyn Executor) -> ActionResult {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Reply Action
// ============================================================================

/// An action for requests of type `R` that always suspends with `reply`.
pub struct ReplyAction<R> {
    reply: Reply,
    _marker: PhantomData<fn(R)>,
}

impl<R: Request> ReplyAction<R> {
    /// Create an action that replies with `reply`.
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            _marker: PhantomData,
        }
    }
}

impl<R: Request> Action for ReplyAction<R> {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<R>()
    }

    fn execute(&self, _request: &mut dyn Request, _gateway: &mut dyn Executor) -> ActionResult {
        Err(Interrupt::Reply(self.reply.clone()))
    }
}

// ============================================================================
// Failing Action
// ============================================================================

/// An action for requests of type `R` that always fails with `message`.
pub struct FailingAction<R> {
    message: &'static str,
    _marker: PhantomData<fn(R)>,
}

impl<R: Request> FailingAction<R> {
    /// Create an action that fails with `message`.
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            _marker: PhantomData,
        }
    }
}

impl<R: Request> Action for FailingAction<R> {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<R>()
    }

    fn execute(&self, _request: &mut dyn Request, _gateway: &mut dyn Executor) -> ActionResult {
        Err(Interrupt::failure(self.message))
    }
}

// ============================================================================
// Recording Extension
// ============================================================================

/// How a recorded dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordedResult {
    /// The dispatch completed.
    Completed,
    /// The dispatch returned a reply.
    Replied,
    /// The dispatch failed.
    Failed,
}

impl RecordedResult {
    fn of(result: &ActionResult) -> Self {
        match result {
            Ok(()) => RecordedResult::Completed,
            Err(Interrupt::Reply(_)) => RecordedResult::Replied,
            Err(Interrupt::Failure(_)) => RecordedResult::Failed,
        }
    }
}

/// A hook call seen by a [`RecordingExtension`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEvent {
    /// `on_pre_execute` was called.
    PreExecute {
        /// Request name.
        request: &'static str,
        /// Dispatch depth.
        depth: usize,
    },
    /// `on_execute` was called.
    Execute {
        /// Request name.
        request: &'static str,
        /// Selected action.
        action: &'static str,
        /// Dispatch depth.
        depth: usize,
    },
    /// `on_post_execute` was called.
    PostExecute {
        /// Request name.
        request: &'static str,
        /// Dispatch depth.
        depth: usize,
        /// How the dispatch ended.
        result: RecordedResult,
    },
}

/// An extension that records every hook call.
///
/// Clones share the record.
#[derive(Clone, Default)]
pub struct RecordingExtension {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
    pre_reply: Option<(TypeId, Reply)>,
}

impl RecordingExtension {
    /// Create a new recording extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also short-circuit every dispatch of an `R` with `reply` before an
    /// action is selected.
    pub fn replying_to<R: Request>(mut self, reply: Reply) -> Self {
        self.pre_reply = Some((TypeId::of::<R>(), reply));
        self
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Extension for RecordingExtension {
    fn on_pre_execute(&self, request: &mut dyn Request, depth: usize) -> ActionResult {
        self.lock().push(RecordedEvent::PreExecute {
            request: request.request_name(),
            depth,
        });
        match &self.pre_reply {
            Some((type_id, reply)) if *type_id == request.request_type() => {
                Err(Interrupt::Reply(reply.clone()))
            }
            _ => Ok(()),
        }
    }

    fn on_execute(&self, request: &dyn Request, action: &'static str, depth: usize) {
        self.lock().push(RecordedEvent::Execute {
            request: request.request_name(),
            action,
            depth,
        });
    }

    fn on_post_execute(&self, request: &dyn Request, result: &ActionResult, depth: usize) {
        self.lock().push(RecordedEvent::PostExecute {
            request: request.request_name(),
            depth,
            result: RecordedResult::of(result),
        });
    }
}
