#![allow(dead_code)]

use payflow::{Action, ActionResult, Executor, Interrupt, Request};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Request Types
// ============================================================================

/// A request told apart by its name only.
#[derive(Debug)]
pub struct Named {
    pub name: &'static str,
}

impl Named {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Request for Named {
    fn request_name(&self) -> &'static str {
        self.name
    }
}

/// Re-dispatched by [`LoopAction`] until `remaining` reaches zero.
#[derive(Debug)]
pub struct Loop {
    pub remaining: usize,
}

impl Request for Loop {
    fn request_name(&self) -> &'static str {
        "loop"
    }
}

/// Handled by [`NestAction`], which dispatches a fresh `Nest` one level down.
#[derive(Debug)]
pub struct Nest {
    pub level: usize,
    pub bottom: usize,
    pub deepest: usize,
}

impl Nest {
    pub fn new(bottom: usize) -> Self {
        Self {
            level: 1,
            bottom,
            deepest: 0,
        }
    }
}

impl Request for Nest {
    fn request_name(&self) -> &'static str {
        "nest"
    }
}

// ============================================================================
// Test Actions
// ============================================================================

fn named(request: &dyn Request, name: &str) -> bool {
    request
        .downcast_ref::<Named>()
        .is_some_and(|request| request.name == name)
}

/// Supports `supports` and dispatches a fresh `requires` request.
pub struct RequireOtherRequestAction {
    pub supports: &'static str,
    pub requires: &'static str,
    pub finished: Arc<AtomicUsize>,
}

impl RequireOtherRequestAction {
    pub fn new(supports: &'static str, requires: &'static str) -> Self {
        Self {
            supports,
            requires,
            finished: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the nested dispatch returned `Ok`.
    pub fn finished(&self) -> Arc<AtomicUsize> {
        self.finished.clone()
    }
}

impl Action for RequireOtherRequestAction {
    fn supports(&self, request: &dyn Request) -> bool {
        named(request, self.supports)
    }

    fn execute(&self, _request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        let mut required = Named::new(self.requires);
        gateway.execute(&mut required)?;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Supports `supports` and dispatches the very same request object again.
pub struct RedispatchAction {
    pub supports: &'static str,
}

impl Action for RedispatchAction {
    fn supports(&self, request: &dyn Request) -> bool {
        named(request, self.supports)
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        gateway.execute(request)
    }

    fn name(&self) -> &'static str {
        "RedispatchAction"
    }
}

/// Decrements `Loop::remaining` and re-dispatches the same `Loop` until it
/// reaches zero, for `1 + remaining` dispatches in total.
pub struct LoopAction;

impl Action for LoopAction {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<Loop>()
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        let Some(looped) = request.downcast_mut::<Loop>() else {
            return Err(Interrupt::failure("expected a loop request"));
        };
        if looped.remaining == 0 {
            return Ok(());
        }
        looped.remaining -= 1;
        gateway.execute(request)
    }

    fn name(&self) -> &'static str {
        "LoopAction"
    }
}

/// Dispatches a fresh `Nest` one level deeper until `bottom`, then reports the
/// deepest level back up through each parent.
pub struct NestAction;

impl Action for NestAction {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<Nest>()
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        let Some(nest) = request.downcast_mut::<Nest>() else {
            return Err(Interrupt::failure("expected a nest request"));
        };
        if nest.level >= nest.bottom {
            nest.deepest = gateway.depth();
            return Ok(());
        }

        let mut child = Nest {
            level: nest.level + 1,
            bottom: nest.bottom,
            deepest: 0,
        };
        gateway.execute(&mut child)?;
        nest.deepest = child.deepest;
        Ok(())
    }
}
