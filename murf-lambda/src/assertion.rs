//! The [`assertion`](self) module implements the [`AssertionMatcher`] type.

use std::any::Any;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use murf::Matcher;
use parking_lot::Mutex;

use crate::{
    evaluation::Evaluation,
    propagate::{catch_assertion, rethrow},
    report,
};

/// Prefix of the text the [`AssertionMatcher`] renders itself with.
pub const REPORT_PREFIX: &str = "AssertionMatcher reported: ";

/// Create a new [`AssertionMatcher`] that runs the passed assertion `f` on the
/// argument.
///
/// The argument matches if `f` returns normally. If `f` fails an assertion
/// (i.e. panics with a message) the argument does not match and the message
/// is emitted as `AssertionMatcher reported: <message>` (see [`report`]).
///
/// ```ignore
/// expect_method_call!(handle as TacticalStation, find_ships(assert_arg(|c: &Criteria| {
///     assert!(c.minimum_range < 2000);
/// })));
/// ```
pub fn assert_arg<T, F>(f: F) -> AssertionMatcher<impl Fn(&T) -> Result<(), Infallible>>
where
    F: Fn(&T),
{
    AssertionMatcher::new(move |value: &T| {
        f(value);

        Ok::<(), Infallible>(())
    })
}

/// Create a new [`AssertionMatcher`] from an assertion `f` that may return an
/// error.
///
/// Assertion failures are handled like in [`assert_arg`]. An error returned
/// by `f` is not treated as mismatch: it is passed unchanged to
/// [`rethrow`], so the call of the mocked method panics with the error as
/// payload.
pub fn assert_arg_checked<T, F, E>(f: F) -> AssertionMatcher<F, E>
where
    F: Fn(&T) -> Result<(), E>,
    E: Any + Send,
{
    AssertionMatcher::new(f)
}

/// Implements a [`Matcher`] that executes an assertion routine `F` on the
/// argument and reports the assertion message if it fails.
#[must_use]
pub struct AssertionMatcher<F, E = Infallible> {
    routine: F,
    failure: Mutex<Option<String>>,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> AssertionMatcher<F, E> {
    /// Create a new [`AssertionMatcher`] from the passed assertion `routine`.
    pub fn new(routine: F) -> Self {
        Self {
            routine,
            failure: Mutex::new(None),
            _marker: PhantomData,
        }
    }

    /// Run the assertion routine for the passed `value`.
    ///
    /// If the routine fails an assertion its message is stored and will be
    /// reported when the matcher is formatted.
    pub fn evaluate<T>(&self, value: &T) -> Evaluation<E>
    where
        F: Fn(&T) -> Result<(), E>,
    {
        match catch_assertion(|| (self.routine)(value)) {
            Ok(Ok(())) => {
                log::trace!("Assertion routine accepted argument");

                Evaluation::Decided(true)
            }
            Ok(Err(err)) => Evaluation::RoutineError(err),
            Err(msg) => {
                log::debug!("Assertion routine rejected argument: {msg}");

                *self.failure.lock() = Some(msg.clone());

                Evaluation::AssertionFailed(msg)
            }
        }
    }

    /// Get the message of the last failed assertion, if any.
    pub fn failure(&self) -> Option<String> {
        self.failure.lock().clone()
    }
}

impl<T, F, E> Matcher<T> for AssertionMatcher<F, E>
where
    F: Fn(&T) -> Result<(), E>,
    E: Any + Send,
{
    fn matches(&self, value: &T) -> bool {
        match self.evaluate(value) {
            Evaluation::Decided(x) => x,
            Evaluation::AssertionFailed(msg) => {
                report::emit(format!("{REPORT_PREFIX}{msg}"));

                false
            }
            Evaluation::RoutineError(err) => rethrow(err),
        }
    }
}

impl<F, E> Display for AssertionMatcher<F, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &*self.failure.lock() {
            Some(msg) => write!(f, "{REPORT_PREFIX}{msg}"),
            None => write!(f, "{REPORT_PREFIX}<no failure recorded>"),
        }
    }
}

impl<F, E> std::fmt::Debug for AssertionMatcher<F, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AssertionMatcher")
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}
