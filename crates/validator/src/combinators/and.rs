//! AND combinator - both validators must accept the token
//!
//! # Examples
//!
//! ```
//! use argtools_validator::combinators::And;
//! use argtools_validator::foundation::Validate;
//! use argtools_validator::validators::{Even, Interval};
//!
//! let validator = And::new(Even, Interval::at_least(0.0));
//! assert!(validator.validate("4").is_ok());
//! assert!(validator.validate("3").is_err()); // fails Even
//! assert!(validator.validate("-2").is_err()); // fails the bound
//! ```

use crate::foundation::{Validate, ValidationResult};

/// Combines two validators with logical AND.
///
/// The left validator produces the value. The right one is a further guard on
/// the same token and runs only if the left accepted it, so the error always
/// comes from the first failing validator.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type, whose output is returned
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    type Output = L::Output;

    fn validate(&self, token: &str) -> ValidationResult<Self::Output> {
        let value = self.left.validate(token)?;
        self.right.validate(token)?;
        Ok(value)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{DivisibleBy, Interval, Odd, Positive};
    use num_bigint::BigInt;

    #[test]
    fn test_and_both_pass() {
        let validator = And::new(Odd, Interval::in_range(0.0, 10.0));
        assert_eq!(validator.validate("7").unwrap(), BigInt::from(7));
    }

    #[test]
    fn test_and_left_fails_first() {
        let validator = And::new(Odd, Interval::in_range(0.0, 10.0));
        // Both guards would reject 12; the left one wins.
        assert!(validator.validate("12").unwrap_err().is("not_odd"));
    }

    #[test]
    fn test_and_right_fails() {
        let validator = And::new(Odd, Interval::in_range(0.0, 10.0));
        assert!(validator.validate("11").unwrap_err().is("above_maximum"));
    }

    #[test]
    fn test_and_chain() {
        let validator = Positive::strict()
            .and(DivisibleBy::new(5))
            .and(Interval::at_most(100.0));
        assert_eq!(validator.validate("25").unwrap(), 25.0);
        assert!(validator.validate("0").unwrap_err().is("not_strictly_positive"));
        assert!(validator.validate("26").unwrap_err().is("not_divisible"));
        assert!(validator.validate("105").unwrap_err().is("above_maximum"));
    }

    #[test]
    fn test_and_function() {
        let validator = and(Odd, Positive::default());
        assert!(validator.validate("3").is_ok());
        assert!(validator.validate("-3").is_err());
    }
}
