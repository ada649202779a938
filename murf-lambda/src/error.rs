//! Error types of this crate.

use std::any::type_name;
use std::error::Error as StdError;

use thiserror::Error;

/// Unchecked wrapper around an error returned by the predicate of a
/// [`LambdaMatcher`](crate::LambdaMatcher).
///
/// The message has the form `"<type name>: <error message>"` and the original
/// error is available through [`source`](StdError::source()).
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RoutineError {
    message: String,

    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl RoutineError {
    /// Wrap the passed `error`.
    pub fn wrap<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: format!("{}: {}", type_name::<E>(), error),
            source: Box::new(error),
        }
    }

    /// Get the message of this error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the wrapped error if it is of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.source.downcast_ref()
    }

    /// Extract the wrapped error.
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}
