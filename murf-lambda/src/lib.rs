//! Closure based argument matchers for [`murf`].
//!
//! ```ignore
//! use murf::{action::Return, expect_method_call};
//! use murf_lambda::{arg_lambda_described, assert_arg};
//!
//! expect_method_call!(handle as TacticalStation, find_ships(assert_arg(|c: &Criteria| {
//!     assert!(c.minimum_range < 2000);
//! })))
//! .will_once(Return(0));
//!
//! expect_method_call!(handle as TacticalStation, fire_torpedo(arg_lambda_described(
//!     |tube: &usize| *tube < 4,
//!     "one of the front tubes",
//! )))
//! .will_once(Return(()));
//! ```

#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions)]

pub mod assertion;
pub mod error;
pub mod evaluation;
pub mod lambda;
pub mod propagate;
pub mod quiet;
pub mod report;
pub mod settings;

pub use assertion::{assert_arg, assert_arg_checked, AssertionMatcher};
pub use error::RoutineError;
pub use evaluation::Evaluation;
pub use lambda::{
    arg_lambda, arg_lambda_checked, arg_lambda_checked_described, arg_lambda_described,
    LambdaMatcher,
};
pub use settings::Settings;
