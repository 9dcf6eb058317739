//! Sign validators
//!
//! Non-strict checks include zero, strict checks exclude it. Negative zero
//! compares equal to zero. NaN has no sign and is always rejected.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

crate::validator! {
    /// Accepts numbers that are not below zero, or above zero when `strict`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::validators::Positive;
    /// use argtools_validator::foundation::Validate;
    ///
    /// assert!(Positive::default().validate("0").is_ok());
    /// assert!(Positive::strict().validate("0").is_err());
    /// assert!(Positive::default().validate("-1").is_err());
    /// ```
    #[derive(Copy, PartialEq, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub Positive { strict: bool } => f64;
    parse with crate::foundation::token::number;
    rule(self, value) {
        if self.strict { *value > 0.0 } else { *value >= 0.0 }
    }
    error(self, token, value) {
        if self.strict {
            ValidationError::new(
                "not_strictly_positive",
                token,
                format!("'{token}' is not a strictly positive number"),
            )
        } else {
            ValidationError::new(
                "not_positive",
                token,
                format!("'{token}' is not a positive number"),
            )
        }
    }
    /// Parses `token` as a number that is ≥ 0, or > 0 when `strict`.
    fn positive(strict: bool);
}

crate::validator! {
    /// Accepts numbers that are not above zero, or below zero when `strict`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::validators::Negative;
    /// use argtools_validator::foundation::Validate;
    ///
    /// assert!(Negative::default().validate("-0").is_ok());
    /// assert!(Negative::strict().validate("-0").is_err());
    /// assert!(Negative::strict().validate("-2.5").is_ok());
    /// ```
    #[derive(Copy, PartialEq, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub Negative { strict: bool } => f64;
    parse with crate::foundation::token::number;
    rule(self, value) {
        if self.strict { *value < 0.0 } else { *value <= 0.0 }
    }
    error(self, token, value) {
        if self.strict {
            ValidationError::new(
                "not_strictly_negative",
                token,
                format!("'{token}' is not a strictly negative number"),
            )
        } else {
            ValidationError::new(
                "not_negative",
                token,
                format!("'{token}' is not a negative number"),
            )
        }
    }
    /// Parses `token` as a number that is ≤ 0, or < 0 when `strict`.
    fn negative(strict: bool);
}

impl Positive {
    /// Zero excluded.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Zero included.
    #[must_use]
    pub const fn loose() -> Self {
        Self { strict: false }
    }
}

impl Negative {
    /// Zero excluded.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Zero included.
    #[must_use]
    pub const fn loose() -> Self {
        Self { strict: false }
    }
}

/// A validator for numbers > 0.
#[must_use]
pub const fn strictly_positive() -> Positive {
    Positive::strict()
}

/// A validator for numbers ≥ 0.
#[must_use]
pub const fn loosely_positive() -> Positive {
    Positive::loose()
}

/// A validator for numbers < 0.
#[must_use]
pub const fn strictly_negative() -> Negative {
    Negative::strict()
}

/// A validator for numbers ≤ 0.
#[must_use]
pub const fn loosely_negative() -> Negative {
    Negative::loose()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    const POSITIVE: [&str; 3] = ["1", "1.2", "inf"];
    const ZEROS: [&str; 4] = ["0", "-0", "0.0", "-0.0"];
    const NEGATIVE: [&str; 3] = ["-1", "-1.2", "-inf"];

    #[test]
    fn test_positive() {
        let validator = loosely_positive();
        for token in POSITIVE.iter().chain(&ZEROS) {
            assert!(validator.validate(token).is_ok(), "{token}");
        }
        for token in NEGATIVE {
            let err = validator.validate(token).unwrap_err();
            assert!(err.is("not_positive"));
            assert_eq!(err.to_string(), format!("'{token}' is not a positive number"));
        }
    }

    #[test]
    fn test_strictly_positive() {
        let validator = strictly_positive();
        for token in POSITIVE {
            assert!(validator.validate(token).is_ok(), "{token}");
        }
        for token in ZEROS.iter().chain(&NEGATIVE) {
            let err = validator.validate(token).unwrap_err();
            assert!(err.is("not_strictly_positive"), "{token}");
        }
    }

    #[test]
    fn test_negative() {
        let validator = loosely_negative();
        for token in NEGATIVE.iter().chain(&ZEROS) {
            assert!(validator.validate(token).is_ok(), "{token}");
        }
        for token in POSITIVE {
            assert!(validator.validate(token).unwrap_err().is("not_negative"));
        }
    }

    #[test]
    fn test_strictly_negative() {
        let validator = strictly_negative();
        for token in NEGATIVE {
            assert!(validator.validate(token).is_ok(), "{token}");
        }
        for token in ZEROS.iter().chain(&POSITIVE) {
            let err = validator.validate(token).unwrap_err();
            assert!(err.is("not_strictly_negative"), "{token}");
            assert_eq!(err.to_string(), format!("'{token}' is not a strictly negative number"));
        }
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(positive("0", false).unwrap(), 0.0);
        assert!(positive("0", true).is_err());
        assert!(positive("-1", false).is_err());
        assert!(negative("-0", false).is_ok());
        assert!(negative("1", true).is_err());
    }

    #[test]
    fn test_nan_has_no_sign() {
        assert!(positive("nan", false).unwrap_err().is("not_positive"));
        assert!(negative("nan", false).unwrap_err().is("not_negative"));
    }

    #[test]
    fn test_parse_failure_comes_first() {
        let err = positive("twelve", true).unwrap_err();
        assert!(err.is("not_a_number"));
        assert_eq!(err.to_string(), "'twelve' is not a valid number");
    }

    #[test]
    fn test_default_is_loose() {
        assert_eq!(Positive::default(), Positive::loose());
        assert_eq!(Negative::default(), Negative::new(false));
    }
}
