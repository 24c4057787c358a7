//! Provider-agnostic payment requests.
//!
//! Each request wraps a model owned by the caller: an order, a payment record,
//! a map of provider fields. Actions read and update the model; the gateway
//! only routes the request.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut capture = Capture::new(order);
//! match gateway.execute(&mut capture)? {
//!     Outcome::Completed => save(capture.into_model()),
//!     Outcome::Suspended(reply) => return respond(reply),
//! }
//! ```

use payflow_core::Request;
use std::fmt::{self, Debug};

/// Access to the model a request carries.
pub trait Generic: Request {
    /// The model type.
    type Model;

    /// Borrow the model.
    fn model(&self) -> &Self::Model;

    /// Mutably borrow the model.
    fn model_mut(&mut self) -> &mut Self::Model;
}

macro_rules! model_request {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name<M> {
            model: M,
        }

        impl<M> $name<M> {
            /// Wrap `model`.
            pub fn new(model: M) -> Self {
                Self { model }
            }

            /// Borrow the model.
            pub fn model(&self) -> &M {
                &self.model
            }

            /// Mutably borrow the model.
            pub fn model_mut(&mut self) -> &mut M {
                &mut self.model
            }

            /// Give the model back.
            pub fn into_model(self) -> M {
                self.model
            }
        }

        impl<M: Debug + Send + 'static> Request for $name<M> {
            fn request_name(&self) -> &'static str {
                $label
            }
        }

        impl<M: Debug + Send + 'static> Generic for $name<M> {
            type Model = M;

            fn model(&self) -> &M {
                &self.model
            }

            fn model_mut(&mut self) -> &mut M {
                &mut self.model
            }
        }
    };
}

model_request!(
    /// Take the money: capture a payment, possibly after a payer redirect.
    Capture,
    "capture"
);
model_request!(
    /// Reserve funds without capturing them.
    Authorize,
    "authorize"
);
model_request!(
    /// Refresh the model from the provider's view of the payment.
    Synchronize,
    "synchronize"
);
model_request!(
    /// Handle an asynchronous notification from the provider.
    Notify,
    "notify"
);
model_request!(
    /// Give captured money back.
    Refund,
    "refund"
);
model_request!(
    /// Void an authorization or pending payment.
    Cancel,
    "cancel"
);

/// The normalized state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Nothing has happened yet.
    New,
    /// Waiting on the payer or the provider.
    Pending,
    /// Funds are reserved.
    Authorized,
    /// Funds are taken.
    Captured,
    /// Funds were given back.
    Refunded,
    /// The payment was voided.
    Canceled,
    /// The payment was rejected.
    Failed,
    /// The payment timed out.
    Expired,
    /// The provider put the payment on hold.
    Suspended,
    /// The provider state could not be mapped.
    #[default]
    Unknown,
}

impl Status {
    /// Lowercase label, e.g. `"captured"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Pending => "pending",
            Status::Authorized => "authorized",
            Status::Captured => "captured",
            Status::Refunded => "refunded",
            Status::Canceled => "canceled",
            Status::Failed => "failed",
            Status::Expired => "expired",
            Status::Suspended => "suspended",
            Status::Unknown => "unknown",
        }
    }

    /// Returns `true` when no further transition is expected.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Status::Captured | Status::Refunded | Status::Canceled | Status::Failed | Status::Expired
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ask which [`Status`] the model is in.
///
/// Starts as [`Status::Unknown`]; the supporting action marks it.
#[derive(Debug, Clone, PartialEq)]
pub struct GetHumanStatus<M> {
    model: M,
    status: Status,
}

impl<M> GetHumanStatus<M> {
    /// Wrap `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            status: Status::Unknown,
        }
    }

    /// Borrow the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutably borrow the model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Give the model back.
    pub fn into_model(self) -> M {
        self.model
    }

    /// The status marked so far.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Record the model's status.
    pub fn mark(&mut self, status: Status) {
        self.status = status;
    }
}

impl<M: Debug + Send + 'static> Request for GetHumanStatus<M> {
    fn request_name(&self) -> &'static str {
        "get_human_status"
    }
}

impl<M: Debug + Send + 'static> Generic for GetHumanStatus<M> {
    type Model = M;

    fn model(&self) -> &M {
        &self.model
    }

    fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: u32,
        amount: u64,
    }

    fn bump<G: Generic<Model = Order>>(request: &mut G) {
        request.model_mut().amount += 1;
    }

    #[test]
    fn test_requests_are_distinct_types() {
        let capture: &dyn Request = &Capture::new(Order { id: 1, amount: 10 });
        assert!(capture.is::<Capture<Order>>());
        assert!(!capture.is::<Authorize<Order>>());
        assert!(!capture.is::<Capture<u32>>());
        assert_eq!(capture.request_name(), "capture");
    }

    #[test]
    fn test_generic_model_access() {
        let mut refund = Refund::new(Order { id: 7, amount: 10 });
        bump(&mut refund);
        assert_eq!(refund.into_model(), Order { id: 7, amount: 11 });

        let mut status = GetHumanStatus::new(Order { id: 7, amount: 0 });
        bump(&mut status);
        assert_eq!(Generic::model(&status).amount, 1);
    }

    #[test]
    fn test_status_marking() {
        let mut request = GetHumanStatus::new(Order { id: 2, amount: 5 });
        assert_eq!(request.status(), Status::Unknown);

        request.mark(Status::Captured);
        assert_eq!(request.status(), Status::Captured);
        assert!(request.status().is_final());
        assert!(!Status::Pending.is_final());
        assert_eq!(Status::Captured.to_string(), "captured");
        assert_eq!(request.model().id, 2);
    }
}
