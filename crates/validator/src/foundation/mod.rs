//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationResult`]
//!
//! Validators are small values holding their constraint parameters. Calling
//! [`Validate::validate`] with a token parses it, runs the guards in order and
//! returns the typed value or the first violation.
//!
//! ```
//! use argtools_validator::foundation::Validate;
//! use argtools_validator::validators::Interval;
//!
//! let ratio = Interval::new().with_minimum(0.0).with_maximum(1.0);
//! assert_eq!(ratio.validate("0.25").unwrap(), 0.25);
//! assert!(ratio.validate("1.5").is_err());
//! ```

pub mod error;
pub(crate) mod token;
pub mod traits;

pub use error::{ErrorParams, ValidationError, ValidationResult};
pub use traits::{Validate, ValidateExt};
