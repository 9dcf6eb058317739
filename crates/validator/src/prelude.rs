//! Prelude module for convenient imports.
//!
//! `use argtools_validator::prelude::*;` brings in the traits, the error
//! type, every built-in validator and the combinators.
//!
//! # Examples
//!
//! ```
//! use argtools_validator::prelude::*;
//!
//! let width = Odd.and(at_least(1.0));
//! assert!(width.validate("3").is_ok());
//! assert!(parse_float("nan", false, true).is_err());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, AndThen, WithMessage, and, and_then, with_message};
