//! # argtools-validator
//!
//! Validated type conversions for command-line arguments.
//!
//! Each validator takes the raw token an argument parser hands over and
//! returns either the parsed value or a [`ValidationError`] whose message is
//! ready to show to the user.
//!
//! ## Quick Start
//!
//! ```
//! use argtools_validator::prelude::*;
//!
//! // One-off calls
//! assert_eq!(positive("2.5", true).unwrap(), 2.5);
//! assert!(odd("4").is_err());
//!
//! // Bind constraints once, then use as a parser hook
//! let ratio = open_interval(0.0, 1.0).into_parser();
//! assert_eq!(ratio("0.5").unwrap(), 0.5);
//! assert_eq!(
//!     ratio("1").unwrap_err().to_string(),
//!     "Number '1' is >= the exclusive maximum 1"
//! );
//! ```
//!
//! ## With clap
//!
//! Every free function has the `fn(&str) -> Result<T, E>` shape clap expects,
//! and [`ValidateExt::into_parser`](foundation::ValidateExt::into_parser)
//! turns a configured validator into one:
//!
//! ```rust,ignore
//! #[derive(clap::Parser)]
//! struct Args {
//!     #[arg(value_parser = argtools_validator::validators::odd)]
//!     width: num_bigint::BigInt,
//!     #[arg(long, value_parser = in_range(0.0, 1.0).into_parser())]
//!     ratio: f64,
//! }
//! ```
//!
//! ## Built-in Validators
//!
//! - **Numbers**: [`Integer`](validators::Integer),
//!   [`IntegerAs`](validators::IntegerAs),
//!   [`FloatingPoint`](validators::FloatingPoint)
//! - **Sign**: [`Positive`](validators::Positive), [`Negative`](validators::Negative)
//! - **Range**: [`Interval`](validators::Interval)
//! - **Integer properties**: [`Odd`](validators::Odd), [`Even`](validators::Even),
//!   [`DivisibleBy`](validators::DivisibleBy), [`DivisorOf`](validators::DivisorOf)
//! - **Exact**: [`Decimal`](validators::Decimal), [`Fraction`](validators::Fraction)
//!
//! ## Logging
//!
//! Rejections emit one `tracing` debug event under the
//! `argtools::validator` target. The crate never installs a subscriber.

// ValidationError is the only error type; boxing it would add indirection to
// every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use foundation::ValidationError;
