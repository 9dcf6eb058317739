//! Divisibility validators
//!
//! Remainders truncate toward zero, matching Rust's integer `%`. Zero is
//! never a valid divisor: asking for it fails with `zero_divisor` instead of
//! dividing.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::foundation::token;
use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// DIVISIBLE BY
// ============================================================================

/// Accepts integers that are multiples of `divisor`.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::DivisibleBy;
/// use argtools_validator::foundation::Validate;
///
/// let validator = DivisibleBy::new(3);
/// assert!(validator.validate("9").is_ok());
/// assert!(validator.validate("-6").is_ok());
/// assert!(validator.validate("10").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisibleBy {
    /// The divisor.
    pub divisor: BigInt,
}

impl DivisibleBy {
    /// Creates a new divisibility validator.
    #[must_use]
    pub fn new(divisor: impl Into<BigInt>) -> Self {
        Self {
            divisor: divisor.into(),
        }
    }
}

impl Validate for DivisibleBy {
    type Output = BigInt;

    fn validate(&self, token: &str) -> ValidationResult<BigInt> {
        let value = token::integer(token).map_err(ValidationError::traced)?;

        if self.divisor.is_zero() {
            return Err(ValidationError::new(
                "zero_divisor",
                token,
                format!("'{token}' cannot be checked for divisibility by zero"),
            )
            .traced());
        }
        if !(&value % &self.divisor).is_zero() {
            return Err(ValidationError::new(
                "not_divisible",
                token,
                format!("'{token}' is not divisible by {}", self.divisor),
            )
            .with_param("divisor", self.divisor.to_string())
            .traced());
        }
        Ok(value)
    }
}

/// Parses `token` as an integer that is a multiple of `divisor`.
pub fn divisible_by(token: &str, divisor: impl Into<BigInt>) -> ValidationResult<BigInt> {
    DivisibleBy::new(divisor).validate(token)
}

/// A validator for multiples of `value`.
#[must_use]
pub fn multiple_of(value: impl Into<BigInt>) -> DivisibleBy {
    DivisibleBy::new(value)
}

// ============================================================================
// DIVISOR OF
// ============================================================================

/// Accepts integers that divide `quantity` without remainder.
///
/// Negative divisors are accepted: `-4` divides `12`.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::DivisorOf;
/// use argtools_validator::foundation::Validate;
///
/// let validator = DivisorOf::new(12);
/// assert!(validator.validate("4").is_ok());
/// assert!(validator.validate("5").is_err());
/// assert!(validator.validate("0").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisorOf {
    /// The quantity the token must divide.
    pub quantity: BigInt,
}

impl DivisorOf {
    /// Creates a new divisor validator.
    #[must_use]
    pub fn new(quantity: impl Into<BigInt>) -> Self {
        Self {
            quantity: quantity.into(),
        }
    }
}

impl Validate for DivisorOf {
    type Output = BigInt;

    fn validate(&self, token: &str) -> ValidationResult<BigInt> {
        let value = token::integer(token).map_err(ValidationError::traced)?;

        if value.is_zero() {
            return Err(ValidationError::new(
                "zero_divisor",
                token,
                format!("'{token}' is zero and cannot divide {}", self.quantity),
            )
            .with_param("quantity", self.quantity.to_string())
            .traced());
        }
        if !(&self.quantity % &value).is_zero() {
            return Err(ValidationError::new(
                "not_a_divisor",
                token,
                format!("'{token}' is not a divisor of {}", self.quantity),
            )
            .with_param("quantity", self.quantity.to_string())
            .traced());
        }
        Ok(value)
    }
}

/// Parses `token` as an integer that divides `quantity`.
pub fn divisor_of(token: &str, quantity: impl Into<BigInt>) -> ValidationResult<BigInt> {
    DivisorOf::new(quantity).validate(token)
}

// ============================================================================
// TESTS
// ============================================================================
