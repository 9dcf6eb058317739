//! AND_THEN combinator - a post-check on the parsed value
//!
//! # Examples
//!
//! ```
//! use argtools_validator::combinators::AndThen;
//! use argtools_validator::foundation::{Validate, ValidationError};
//! use argtools_validator::validators::Positive;
//!
//! let whole = AndThen::new(Positive::strict(), |token: &str, value: f64| {
//!     if value.fract() == 0.0 {
//!         Ok(value as u64)
//!     } else {
//!         Err(ValidationError::new("not_whole", token, format!("'{token}' has a fraction")))
//!     }
//! });
//! assert_eq!(whole.validate("3").unwrap(), 3);
//! assert!(whole.validate("3.5").unwrap_err().is("not_whole"));
//! assert!(whole.validate("0").unwrap_err().is("not_strictly_positive"));
//! ```

use std::fmt;

use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Runs a function on the value an inner validator produced.
///
/// The function receives the original token and the parsed value, and may
/// reject it or turn it into something else. It is never called when the
/// inner validator fails.
#[derive(Clone, Copy)]
pub struct AndThen<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> AndThen<V, F> {
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: fmt::Debug, F> fmt::Debug for AndThen<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<V, F, U> Validate for AndThen<V, F>
where
    V: Validate,
    F: Fn(&str, V::Output) -> ValidationResult<U>,
{
    type Output = U;

    fn validate(&self, token: &str) -> ValidationResult<U> {
        let value = self.inner.validate(token)?;
        (self.f)(token, value).map_err(ValidationError::traced)
    }
}

/// Creates an `AndThen` combinator.
pub fn and_then<V, F, U>(validator: V, f: F) -> AndThen<V, F>
where
    V: Validate,
    F: Fn(&str, V::Output) -> ValidationResult<U>,
{
    AndThen::new(validator, f)
}
