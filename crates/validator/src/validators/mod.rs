//! Built-in validators
//!
//! Every validator exists in two shapes: a struct holding its constraint
//! parameters (implementing [`Validate`](crate::foundation::Validate)), and a
//! token-first free function for one-off calls.
//!
//! # Categories
//!
//! - **Numbers**: integer, bounded integer, floating point
//! - **Sign**: positive, negative, strict or not
//! - **Range**: intervals with inclusive or exclusive ends
//! - **Integer properties**: parity, divisibility
//! - **Exact**: decimal, fraction
//!
//! # Examples
//!
//! ```
//! use argtools_validator::prelude::*;
//!
//! // Free function
//! assert!(divisible_by("9", 3).is_ok());
//!
//! // Bound once, used many times
//! let percent = in_range(0.0, 100.0);
//! assert!(percent.validate("50").is_ok());
//! assert!(percent.validate("150").is_err());
//! ```

// Numbers
pub mod exact;
pub mod number;

// Constraints
pub mod divisibility;
pub mod parity;
pub mod range;
pub mod sign;

// ============================================================================
// RE-EXPORTS: Numbers
// ============================================================================

pub use number::{
    FloatingPoint, Integer, IntegerAs, parse_float, parse_integer, parse_integer_as,
};

pub use exact::{Decimal, Fraction, decimal, fraction};

// ============================================================================
// RE-EXPORTS: Constraints
// ============================================================================

pub use sign::{
    Negative, Positive, loosely_negative, loosely_positive, negative, positive,
    strictly_negative, strictly_positive,
};

pub use range::{Interval, at_least, at_most, in_range, interval, open_interval};

pub use parity::{Even, Odd, even, odd};

pub use divisibility::{DivisibleBy, DivisorOf, divisible_by, divisor_of, multiple_of};
