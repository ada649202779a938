//! The [`lambda`](self) module implements the [`LambdaMatcher`] type.

use std::borrow::Cow;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;

use murf::Matcher;

use crate::{evaluation::Evaluation, propagate::rethrow_wrapped};

/// Text a [`LambdaMatcher`] without description renders itself with.
pub const DEFAULT_DESCRIPTION: &str = "Inline lambda matcher (no description given)";

/// Create a new [`LambdaMatcher`] that matches if the passed `predicate`
/// returns `true`.
pub fn arg_lambda<T, F>(predicate: F) -> LambdaMatcher<impl Fn(&T) -> Result<bool, Infallible>>
where
    F: Fn(&T) -> bool,
{
    LambdaMatcher::new(move |value: &T| Ok::<bool, Infallible>(predicate(value)))
}

/// Same as [`arg_lambda`] but with a `description` that is shown if no
/// suitable expectation was found.
pub fn arg_lambda_described<T, F, D>(
    predicate: F,
    description: D,
) -> LambdaMatcher<impl Fn(&T) -> Result<bool, Infallible>>
where
    F: Fn(&T) -> bool,
    D: Into<Cow<'static, str>>,
{
    arg_lambda(predicate).describe(description)
}

/// Create a new [`LambdaMatcher`] from a `predicate` that may return an error.
///
/// An error returned by `predicate` is wrapped into a
/// [`RoutineError`](crate::RoutineError) and propagated as panic payload out of
/// the call to the mocked method.
pub fn arg_lambda_checked<T, F, E>(predicate: F) -> LambdaMatcher<F, E>
where
    F: Fn(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    LambdaMatcher::new(predicate)
}

/// Same as [`arg_lambda_checked`] but with a `description`.
pub fn arg_lambda_checked_described<T, F, E, D>(predicate: F, description: D) -> LambdaMatcher<F, E>
where
    F: Fn(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
    D: Into<Cow<'static, str>>,
{
    LambdaMatcher::new(predicate).describe(description)
}

/// Implements a [`Matcher`] that forwards the argument to a predicate `F`.
#[must_use]
pub struct LambdaMatcher<F, E = Infallible> {
    predicate: F,
    description: Option<Cow<'static, str>>,
    _marker: PhantomData<fn() -> E>,
}

impl<F, E> LambdaMatcher<F, E> {
    /// Create a new [`LambdaMatcher`] without description.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            description: None,
            _marker: PhantomData,
        }
    }

    /// Set the description of the matcher.
    pub fn describe<D>(mut self, description: D) -> Self
    where
        D: Into<Cow<'static, str>>,
    {
        self.description = Some(description.into());

        self
    }

    /// Get the description of the matcher, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Run the predicate for the passed `value`.
    pub fn evaluate<T>(&self, value: &T) -> Evaluation<E>
    where
        F: Fn(&T) -> Result<bool, E>,
    {
        let ret: Evaluation<E> = (self.predicate)(value).into();

        log::trace!("Lambda matcher `{}` evaluated to {:?}", self, DebugOutcome(&ret));

        ret
    }
}

impl<T, F, E> Matcher<T> for LambdaMatcher<F, E>
where
    F: Fn(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    fn matches(&self, value: &T) -> bool {
        match self.evaluate(value) {
            Evaluation::RoutineError(err) => rethrow_wrapped(err),
            ret => ret.is_match(),
        }
    }
}

impl<F, E> Display for LambdaMatcher<F, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.description().unwrap_or(DEFAULT_DESCRIPTION))
    }
}

impl<F, E> std::fmt::Debug for LambdaMatcher<F, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LambdaMatcher")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Formats an [`Evaluation`] without requiring `E: Debug`.
struct DebugOutcome<'a, E>(&'a Evaluation<E>);

impl<E> std::fmt::Debug for DebugOutcome<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.0 {
            Evaluation::Decided(x) => write!(f, "{x}"),
            Evaluation::AssertionFailed(msg) => write!(f, "assertion failed ({msg})"),
            Evaluation::RoutineError(_) => write!(f, "error"),
        }
    }
}
