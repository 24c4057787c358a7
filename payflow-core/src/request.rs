//! Request trait for dispatchable values.
//!
//! A request is any value an [`Action`] may claim. The dispatcher never looks
//! inside it: matching happens through the request's runtime type (see the
//! downcast helpers on `dyn Request`) or whatever fields the action inspects.
//!
//! [`Action`]: crate::Action

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Upcasting helper so `dyn Request` can be downcast to its concrete type.
///
/// Implemented for every `'static` type; never implement it by hand.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Borrow as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A unit-of-work descriptor submitted to a gateway.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Capture { amount: u64 }
///
/// impl Request for Capture {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a payflow `Request`",
    label = "missing `Request` implementation",
    note = "Requests must be `Debug + Send + 'static`; add `impl Request for {Self} {}`."
)]
pub trait Request: AsAny + Debug + Send + 'static {
    /// Name used in diagnostics, such as "request not supported" errors.
    fn request_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Identity of a request value for the duration of a dispatch.
///
/// Two dispatches share an identity when they are handed the same object,
/// whatever its contents. Identity is the address of the value together with
/// its type, so it only means something while the value is borrowed by a
/// dispatch: zero-sized requests of one type share it, and a value created
/// where a dropped one lived takes it over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId {
    type_id: TypeId,
    addr: usize,
}

impl dyn Request {
    /// Returns `true` if the request is a `T`.
    pub fn is<T: Request>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the request as a `T`.
    pub fn downcast_ref<T: Request>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the request as a `T`.
    pub fn downcast_mut<T: Request>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// The `TypeId` of the concrete request.
    pub fn request_type(&self) -> TypeId {
        self.as_any().type_id()
    }

    /// The identity of this request object.
    pub fn identity(&self) -> RequestId {
        RequestId {
            type_id: self.request_type(),
            addr: self as *const dyn Request as *const () as usize,
        }
    }
}
