//! Plain number validators
//!
//! [`Integer`] and [`FloatingPoint`] only check that a token is a number of
//! the right kind. The constrained validators in the sibling modules build on
//! the same parsing rules.

use std::fmt;
use std::marker::PhantomData;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::foundation::token;
use crate::foundation::{Validate, ValidationError, ValidationResult};

// ============================================================================
// INTEGER
// ============================================================================

/// Accepts integer-valued numbers.
///
/// Exact decimal integers of any length are accepted with full precision.
/// Float notation is accepted when the value has no fractional part, so
/// `"1.0"`, `"-0"` and `"1.23e300"` are all integers.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::Integer;
/// use argtools_validator::foundation::Validate;
/// use num_bigint::BigInt;
///
/// assert_eq!(Integer.validate("-001").unwrap(), BigInt::from(-1));
/// assert_eq!(Integer.validate("2.0").unwrap(), BigInt::from(2));
/// assert!(Integer.validate("2.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integer;

impl Validate for Integer {
    type Output = BigInt;

    fn validate(&self, token: &str) -> ValidationResult<BigInt> {
        token::integer(token).map_err(ValidationError::traced)
    }
}

/// Parses `token` as an integer.
///
/// Fails with `not_a_number` for non-numeric text and `not_an_integer` for
/// fractional, NaN or infinite values.
pub fn parse_integer(token: &str) -> ValidationResult<BigInt> {
    Integer.validate(token)
}

// ============================================================================
// INTEGER AS PRIMITIVE
// ============================================================================

/// Accepts integers that fit in the primitive integer type `T`.
///
/// Parsing follows [`Integer`]; values outside `T` fail with
/// `integer_overflow`.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::IntegerAs;
/// use argtools_validator::foundation::Validate;
///
/// let port = IntegerAs::<u16>::new();
/// assert_eq!(port.validate("8080").unwrap(), 8080);
/// assert!(port.validate("70000").unwrap_err().is("integer_overflow"));
/// ```
pub struct IntegerAs<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> IntegerAs<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for IntegerAs<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntegerAs<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for IntegerAs<T> {}

impl<T> fmt::Debug for IntegerAs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerAs<{}>", std::any::type_name::<T>())
    }
}

impl<T> Validate for IntegerAs<T>
where
    T: TryFrom<BigInt>,
{
    type Output = T;

    fn validate(&self, token: &str) -> ValidationResult<T> {
        let value = token::integer(token).map_err(ValidationError::traced)?;
        T::try_from(value).map_err(|_| ValidationError::integer_overflow::<T>(token).traced())
    }
}

/// Parses `token` as an integer and narrows it to `T`.
///
/// ```
/// use argtools_validator::validators::parse_integer_as;
///
/// assert_eq!(parse_integer_as::<i8>("-128").unwrap(), -128);
/// assert!(parse_integer_as::<u8>("-1").is_err());
/// ```
pub fn parse_integer_as<T>(token: &str) -> ValidationResult<T>
where
    T: TryFrom<BigInt>,
{
    IntegerAs::<T>::new().validate(token)
}

// ============================================================================
// FLOATING POINT
// ============================================================================

/// Accepts floating point numbers, optionally excluding NaN and infinities.
///
/// Both special values are allowed by default. A token that parses but is
/// excluded fails with `nan_not_allowed` or `inf_not_allowed`, never with the
/// parse error `not_a_float`.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::FloatingPoint;
/// use argtools_validator::foundation::Validate;
///
/// let finite = FloatingPoint::finite();
/// assert_eq!(finite.validate("1e-3").unwrap(), 0.001);
/// assert!(finite.validate("inf").unwrap_err().is("inf_not_allowed"));
/// assert!(FloatingPoint::default().validate("inf").is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingPoint {
    /// Accept `nan`.
    pub allow_nan: bool,
    /// Accept `inf`, `+inf` and `-inf`.
    pub allow_inf: bool,
}

impl Default for FloatingPoint {
    fn default() -> Self {
        Self {
            allow_nan: true,
            allow_inf: true,
        }
    }
}

impl FloatingPoint {
    #[must_use]
    pub const fn new(allow_nan: bool, allow_inf: bool) -> Self {
        Self {
            allow_nan,
            allow_inf,
        }
    }

    /// Rejects both NaN and infinities.
    #[must_use]
    pub const fn finite() -> Self {
        Self::new(false, false)
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_allow_nan(mut self, allow_nan: bool) -> Self {
        self.allow_nan = allow_nan;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_allow_inf(mut self, allow_inf: bool) -> Self {
        self.allow_inf = allow_inf;
        self
    }
}

impl Validate for FloatingPoint {
    type Output = f64;

    fn validate(&self, token: &str) -> ValidationResult<f64> {
        let Some(value) = token::parse_f64(token) else {
            return Err(ValidationError::new(
                "not_a_float",
                token,
                format!("'{token}' is not a valid floating point number"),
            )
            .traced());
        };

        if !self.allow_nan && value.is_nan() {
            return Err(ValidationError::new(
                "nan_not_allowed",
                token,
                format!("'{token}' is not a number (NaN), which is not allowed here"),
            )
            .traced());
        }
        if !self.allow_inf && value.is_infinite() {
            return Err(ValidationError::new(
                "inf_not_allowed",
                token,
                format!("'{token}' is an infinite value, which is not allowed here"),
            )
            .traced());
        }
        Ok(value)
    }
}

/// Parses `token` as a float, gating NaN and infinities.
pub fn parse_float(token: &str, allow_nan: bool, allow_inf: bool) -> ValidationResult<f64> {
    FloatingPoint::new(allow_nan, allow_inf).validate(token)
}

// ============================================================================
// TESTS
// ============================================================================
