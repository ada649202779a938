//! The [`evaluation`](self) module implements the [`Evaluation`] type.

/// Outcome of running the routine wrapped by a matcher against one argument.
///
/// Matchers return this from their `evaluate` method so that callers can
/// decide how a [`RoutineError`](Evaluation::RoutineError) should be handled.
/// The [`Matcher`](murf::Matcher) implementations of this crate turn it into
/// a plain `bool` and propagate routine errors as panics.
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Evaluation<E> {
    /// The routine completed and decided whether the argument matches.
    Decided(bool),

    /// The routine failed an assertion with the contained message.
    AssertionFailed(String),

    /// The routine returned an error.
    RoutineError(E),
}

impl<E> Evaluation<E> {
    /// Returns `true` if the routine completed and accepted the argument.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Decided(true))
    }

    /// Returns the routine error, if any, dropping any other outcome.
    pub fn routine_error(self) -> Option<E> {
        match self {
            Self::RoutineError(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<Result<bool, E>> for Evaluation<E> {
    fn from(value: Result<bool, E>) -> Self {
        match value {
            Ok(x) => Self::Decided(x),
            Err(err) => Self::RoutineError(err),
        }
    }
}
