//! Exact number validators
//!
//! [`Decimal`] and [`Fraction`] keep the token's value exactly instead of
//! rounding it to the nearest `f64`.

use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::foundation::token;
use crate::foundation::{Validate, ValidationError, ValidationResult};

/// Largest decimal exponent a fraction literal may carry.
///
/// `1e1000000` would otherwise allocate a million-digit integer.
const MAX_FRACTION_EXPONENT: u32 = 4096;

// ============================================================================
// DECIMAL
// ============================================================================

/// Accepts fixed-point decimal numbers, in plain or scientific notation.
///
/// Values are limited to what [`rust_decimal::Decimal`] can hold: 96-bit
/// mantissa, up to 28 fractional digits. NaN and infinities are rejected.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::Decimal;
/// use argtools_validator::foundation::Validate;
///
/// assert_eq!(Decimal.validate("0.1").unwrap().to_string(), "0.1");
/// assert_eq!(Decimal.validate("1.5e2").unwrap().to_string(), "150");
/// assert!(Decimal.validate("1/3").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Decimal;

impl Validate for Decimal {
    type Output = rust_decimal::Decimal;

    fn validate(&self, token: &str) -> ValidationResult<rust_decimal::Decimal> {
        let trimmed = token.trim();
        rust_decimal::Decimal::from_str(trimmed)
            .or_else(|_| rust_decimal::Decimal::from_scientific(trimmed))
            .map(|value| value.normalize())
            .map_err(|_| {
                ValidationError::new(
                    "not_a_decimal",
                    token,
                    format!("'{token}' is not a valid decimal number"),
                )
                .traced()
            })
    }
}

/// Parses `token` as an exact decimal number.
pub fn decimal(token: &str) -> ValidationResult<rust_decimal::Decimal> {
    Decimal.validate(token)
}

// ============================================================================
// FRACTION
// ============================================================================

/// Accepts rational numbers written as `p/q` or as a decimal literal.
///
/// `p` may carry a sign, `q` must be a positive digit string. Decimal literals
/// like `"0.1"` or `"-2.5e-3"` are converted exactly. The result is always in
/// lowest terms.
///
/// # Examples
///
/// ```
/// use argtools_validator::validators::Fraction;
/// use argtools_validator::foundation::Validate;
/// use num_rational::BigRational;
///
/// let half = Fraction.validate("2/4").unwrap();
/// assert_eq!(half, BigRational::new(1.into(), 2.into()));
/// assert_eq!(Fraction.validate("0.5").unwrap(), half);
/// assert!(Fraction.validate("1/0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fraction;

impl Validate for Fraction {
    type Output = BigRational;

    fn validate(&self, token: &str) -> ValidationResult<BigRational> {
        let trimmed = token.trim();
        let parsed = match trimmed.split_once('/') {
            Some((numerator, denominator)) => parse_ratio(numerator.trim(), denominator.trim()),
            None => parse_decimal_literal(trimmed),
        };
        parsed.ok_or_else(|| {
            ValidationError::new(
                "not_a_fraction",
                token,
                format!("'{token}' is not a valid fraction number"),
            )
            .traced()
        })
    }
}

/// Parses `token` as an exact rational number.
pub fn fraction(token: &str) -> ValidationResult<BigRational> {
    Fraction.validate(token)
}

fn parse_ratio(numerator: &str, denominator: &str) -> Option<BigRational> {
    let numerator = token::parse_bigint(numerator)?;
    let denominator = BigInt::from(token::parse_digits(denominator)?);
    if denominator.is_zero() {
        return None;
    }
    Some(BigRational::new(numerator, denominator))
}

/// `[sign] digits [. digits] [e [sign] digits]`, with at least one digit in
/// the mantissa.
fn parse_decimal_literal(literal: &str) -> Option<BigRational> {
    let (mantissa, exponent) = match literal.find(['e', 'E']) {
        Some(at) => (&literal[..at], parse_exponent(&literal[at + 1..])?),
        None => (literal, 0),
    };

    let (sign, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &mantissa[1..]),
        Some(b'+') => (Sign::Plus, &mantissa[1..]),
        _ => (Sign::Plus, mantissa),
    };
    let (whole, fractional) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if whole.is_empty() && fractional.is_empty() {
        return None;
    }

    let digits = format!("{whole}{fractional}");
    let magnitude = token::parse_digits(&digits)?;
    let numerator = BigInt::from_biguint(sign, magnitude);

    let scale = i64::try_from(fractional.len()).ok()? - exponent;
    let ten = BigInt::from(10);
    let power = |n: i64| u32::try_from(n.unsigned_abs()).ok().map(|n| ten.pow(n));
    let ratio = if scale >= 0 {
        BigRational::new(numerator, power(scale)?)
    } else {
        BigRational::new(numerator * power(scale)?, BigInt::one())
    };
    Some(ratio)
}

fn parse_exponent(exponent: &str) -> Option<i64> {
    let value = token::parse_bigint(exponent)?;
    let value = i64::try_from(value).ok()?;
    (value.unsigned_abs() <= u64::from(MAX_FRACTION_EXPONENT)).then_some(value)
}

// ============================================================================
// TESTS
// ============================================================================
