//! Results of executing a request.
//!
//! Inside a call tree, every dispatch returns an [`ActionResult`]: `Ok(())`
//! when the action completed, or an [`Interrupt`] when it suspended or
//! failed. Actions forward both with `?`, so a reply raised ten levels down
//! travels up unchanged. Only the top-level call turns it into an [`Outcome`].

use crate::error::{BoxError, GatewayError};
use crate::reply::Reply;
use std::fmt;

/// What an action, or a nested dispatch, returns.
pub type ActionResult = Result<(), Interrupt>;

/// The non-completed paths out of a dispatch.
#[derive(Debug)]
pub enum Interrupt {
    /// The flow is suspended; control must reach the original caller.
    Reply(Reply),

    /// The request cannot be completed.
    Failure(GatewayError),
}

impl Interrupt {
    /// Wrap an action failure.
    pub fn failure(err: impl Into<BoxError>) -> Self {
        Interrupt::Failure(GatewayError::Action(err.into()))
    }

    /// The reply carried by this interrupt, if it is one.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Interrupt::Reply(reply) => Some(reply),
            Interrupt::Failure(_) => None,
        }
    }

    /// The failure carried by this interrupt, if it is one.
    pub fn error(&self) -> Option<&GatewayError> {
        match self {
            Interrupt::Reply(_) => None,
            Interrupt::Failure(err) => Some(err),
        }
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interrupt::Reply(reply) => write!(f, "suspended: {reply}"),
            Interrupt::Failure(err) => write!(f, "failed: {err}"),
        }
    }
}

impl From<Reply> for Interrupt {
    fn from(reply: Reply) -> Self {
        Interrupt::Reply(reply)
    }
}

impl From<GatewayError> for Interrupt {
    fn from(err: GatewayError) -> Self {
        Interrupt::Failure(err)
    }
}

impl From<BoxError> for Interrupt {
    fn from(err: BoxError) -> Self {
        Interrupt::Failure(GatewayError::Action(err))
    }
}

/// The result of a top-level execution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a suspended outcome carries a reply the caller has to act on"]
pub enum Outcome {
    /// The request was handled to completion.
    Completed,

    /// The flow is waiting on the payer; act on the reply and dispatch again later.
    Suspended(Reply),
}

impl Outcome {
    /// Resolve the result of a whole call tree.
    ///
    /// Replies become [`Outcome::Suspended`]; failures are returned as is.
    pub fn from_result(result: ActionResult) -> Result<Self, GatewayError> {
        match result {
            Ok(()) => Ok(Outcome::Completed),
            Err(Interrupt::Reply(reply)) => Ok(Outcome::Suspended(reply)),
            Err(Interrupt::Failure(err)) => Err(err),
        }
    }

    /// Returns `true` for [`Outcome::Completed`].
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// Returns `true` for [`Outcome::Suspended`].
    pub fn is_suspended(&self) -> bool {
        matches!(self, Outcome::Suspended(_))
    }

    /// Borrow the reply of a suspended outcome.
    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Outcome::Completed => None,
            Outcome::Suspended(reply) => Some(reply),
        }
    }

    /// Take the reply of a suspended outcome.
    pub fn into_reply(self) -> Option<Reply> {
        match self {
            Outcome::Completed => None,
            Outcome::Suspended(reply) => Some(reply),
        }
    }
}
