//! The [`propagate`](self) module moves failures across the
//! [`Matcher`](murf::Matcher) boundary.
//!
//! [`Matcher::matches`](murf::Matcher::matches) can only answer with a `bool`,
//! so errors returned by a wrapped routine leave the matcher as panics. The
//! payload of such a panic is either the original error ([`rethrow`]) or a
//! [`RoutineError`] wrapping it ([`rethrow_wrapped`]). Use
//! [`catch_unwind`](std::panic::catch_unwind) and
//! [`downcast`](Box::downcast()) on the payload to get it back.

use std::any::Any;
use std::error::Error;
use std::panic::{catch_unwind, panic_any, resume_unwind, AssertUnwindSafe};

use crate::{quiet::Guard, RoutineError};

/// Propagate the passed `error` unchanged as panic payload.
pub fn rethrow<E>(error: E) -> !
where
    E: Any + Send,
{
    log::debug!(
        "Propagating error of type `{}` out of matcher",
        std::any::type_name::<E>()
    );

    panic_any(error)
}

/// Propagate the passed `error` wrapped into a [`RoutineError`].
pub fn rethrow_wrapped<E>(error: E) -> !
where
    E: Error + Send + Sync + 'static,
{
    let error = RoutineError::wrap(error);

    log::debug!("Propagating wrapped error out of matcher: {error}");

    panic_any(error)
}

/// Execute `f` and convert assertion panics into `Err(message)`.
///
/// A panic counts as assertion if its payload is a string. Any other panic is
/// resumed unchanged.
///
/// # Errors
/// Returns the panic message if `f` failed an assertion.
pub fn catch_assertion<R, F>(f: F) -> Result<R, String>
where
    F: FnOnce() -> R,
{
    let guard = Guard::new();
    let ret = catch_unwind(AssertUnwindSafe(f));
    drop(guard);

    match ret {
        Ok(ret) => Ok(ret),
        Err(payload) => match panic_message(&*payload) {
            Some(msg) => Err(msg),
            None => resume_unwind(payload),
        },
    }
}

/// Get the message of a panic payload if it is a string.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        Some((*s).to_owned())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

pub(crate) fn is_message_payload(payload: &(dyn Any + Send)) -> bool {
    payload.is::<&'static str>() || payload.is::<String>()
}
