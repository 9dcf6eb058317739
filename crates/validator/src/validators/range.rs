//! Numeric interval validators

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::foundation::error::BoundSide;
use crate::foundation::token;
use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Accepts numbers inside an interval whose ends are independently inclusive
/// or exclusive.
///
/// The default interval is the closed interval from negative to positive
/// infinity, so every number except NaN passes. The minimum is checked before
/// the maximum. A NaN token fails with `nan_outside_interval`, and a NaN bound
/// makes every token fail with `nan_bound`.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::Interval;
/// use argtools_validator::foundation::Validate;
///
/// let unit = Interval::new().with_minimum(0.0).with_maximum(1.0).exclusive_maximum();
/// assert!(unit.validate("0").is_ok());
/// assert!(unit.validate("0.999").is_ok());
///
/// let err = unit.validate("1").unwrap_err();
/// assert_eq!(err.to_string(), "Number '1' is >= the exclusive maximum 1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interval {
    /// Lower bound.
    pub minimum: f64,
    /// Upper bound.
    pub maximum: f64,
    /// Whether `minimum` itself is accepted.
    pub include_minimum: bool,
    /// Whether `maximum` itself is accepted.
    pub include_maximum: bool,
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            minimum: f64::NEG_INFINITY,
            maximum: f64::INFINITY,
            include_minimum: true,
            include_maximum: true,
        }
    }
}

impl Interval {
    /// The unbounded interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `[minimum, +inf]`.
    #[must_use]
    pub fn at_least(minimum: f64) -> Self {
        Self::new().with_minimum(minimum)
    }

    /// `[-inf, maximum]`.
    #[must_use]
    pub fn at_most(maximum: f64) -> Self {
        Self::new().with_maximum(maximum)
    }

    /// `[minimum, maximum]`.
    #[must_use]
    pub fn in_range(minimum: f64, maximum: f64) -> Self {
        Self::new().with_minimum(minimum).with_maximum(maximum)
    }

    /// `(minimum, maximum)`.
    #[must_use]
    pub fn open(minimum: f64, maximum: f64) -> Self {
        Self::in_range(minimum, maximum)
            .exclusive_minimum()
            .exclusive_maximum()
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_maximum(mut self, maximum: f64) -> Self {
        self.maximum = maximum;
        self
    }

    /// Rejects `minimum` itself.
    #[must_use = "builder methods must be chained or built"]
    pub const fn exclusive_minimum(mut self) -> Self {
        self.include_minimum = false;
        self
    }

    /// Rejects `maximum` itself.
    #[must_use = "builder methods must be chained or built"]
    pub const fn exclusive_maximum(mut self) -> Self {
        self.include_maximum = false;
        self
    }

    fn meets_minimum(&self, value: f64) -> bool {
        match value.partial_cmp(&self.minimum) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.include_minimum,
            Some(Ordering::Less) | None => false,
        }
    }

    fn meets_maximum(&self, value: f64) -> bool {
        match value.partial_cmp(&self.maximum) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.include_maximum,
            Some(Ordering::Greater) | None => false,
        }
    }
}

impl Validate for Interval {
    type Output = f64;

    fn validate(&self, token: &str) -> ValidationResult<f64> {
        let value = token::number(token).map_err(ValidationError::traced)?;

        if self.minimum.is_nan() || self.maximum.is_nan() {
            return Err(ValidationError::new(
                "nan_bound",
                token,
                format!("'{token}' cannot be checked against an interval with a NaN bound"),
            )
            .traced());
        }
        if value.is_nan() {
            return Err(ValidationError::new(
                "nan_outside_interval",
                token,
                format!("'{token}' is not a number and lies in no interval"),
            )
            .traced());
        }
        if !self.meets_minimum(value) {
            return Err(ValidationError::out_of_bounds(
                token,
                BoundSide::Minimum,
                self.minimum,
                self.include_minimum,
            )
            .traced());
        }
        if !self.meets_maximum(value) {
            return Err(ValidationError::out_of_bounds(
                token,
                BoundSide::Maximum,
                self.maximum,
                self.include_maximum,
            )
            .traced());
        }
        Ok(value)
    }
}

/// Parses `token` as a number inside the given interval.
pub fn interval(
    token: &str,
    minimum: f64,
    maximum: f64,
    include_minimum: bool,
    include_maximum: bool,
) -> ValidationResult<f64> {
    Interval {
        minimum,
        maximum,
        include_minimum,
        include_maximum,
    }
    .validate(token)
}

/// A validator for numbers ≥ `minimum`.
#[must_use]
pub fn at_least(minimum: f64) -> Interval {
    Interval::at_least(minimum)
}

/// A validator for numbers ≤ `maximum`.
#[must_use]
pub fn at_most(maximum: f64) -> Interval {
    Interval::at_most(maximum)
}

/// A validator for numbers in the closed interval `[minimum, maximum]`.
#[must_use]
pub fn in_range(minimum: f64, maximum: f64) -> Interval {
    Interval::in_range(minimum, maximum)
}

/// A validator for numbers in the open interval `(minimum, maximum)`.
#[must_use]
pub fn open_interval(minimum: f64, maximum: f64) -> Interval {
    Interval::open(minimum, maximum)
}

// ============================================================================
// TESTS
// ============================================================================
