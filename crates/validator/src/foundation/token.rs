//! Shared token parsing
//!
//! Every validator starts from one of these helpers: read the token as a
//! float, or as an integer, or fail. They never log; the public validators
//! trace the final outcome.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::FromPrimitive;

use crate::foundation::{ValidationError, ValidationResult};

/// Parses `token` with the standard float grammar.
///
/// Surrounding whitespace is ignored. Accepts decimal and exponent notation,
/// an optional sign, and `nan` / `inf` / `infinity` in any letter case.
pub(crate) fn parse_f64(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}

/// Parses `token` as an exact decimal integer: optional sign, then digits.
///
/// Leading zeros are allowed. Returns `None` for anything else, including
/// float notation.
pub(crate) fn parse_bigint(token: &str) -> Option<BigInt> {
    let trimmed = token.trim();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (Sign::Minus, &trimmed[1..]),
        Some(b'+') => (Sign::Plus, &trimmed[1..]),
        _ => (Sign::Plus, trimmed),
    };
    let magnitude = parse_digits(digits)?;
    Some(BigInt::from_biguint(sign, magnitude))
}

/// Parses a non-empty run of ASCII digits.
pub(crate) fn parse_digits(digits: &str) -> Option<BigUint> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
}

/// Reads `token` as a number, failing with `not_a_number`.
pub(crate) fn number(token: &str) -> ValidationResult<f64> {
    parse_f64(token).ok_or_else(|| ValidationError::not_a_number(token))
}

/// Reads `token` as a whole number.
///
/// Exact decimal integers keep full precision. Anything else must parse as a
/// float with no fractional part, which is then converted exactly.
pub(crate) fn integer(token: &str) -> ValidationResult<BigInt> {
    if let Some(exact) = parse_bigint(token) {
        return Ok(exact);
    }

    let value = number(token)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValidationError::not_an_integer(token));
    }
    BigInt::from_f64(value).ok_or_else(|| ValidationError::not_an_integer(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_grammar() {
        assert_eq!(parse_f64("1.5"), Some(1.5));
        assert_eq!(parse_f64("  -2e3 "), Some(-2000.0));
        assert_eq!(parse_f64(".5"), Some(0.5));
        assert_eq!(parse_f64("+inf"), Some(f64::INFINITY));
        assert_eq!(parse_f64("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_f64("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64(" "), None);
        assert_eq!(parse_f64("123.4.5"), None);
        assert_eq!(parse_f64("0x10"), None);
    }

    #[test]
    fn signed_zero_parses_negative() {
        let zero = parse_f64("-0.0").unwrap();
        assert!(zero.is_sign_negative());
        assert_eq!(zero, 0.0);
    }

    #[test]
    fn exact_integers() {
        assert_eq!(parse_bigint("-001"), Some(BigInt::from(-1)));
        assert_eq!(parse_bigint("+42"), Some(BigInt::from(42)));
        assert_eq!(parse_bigint("-0"), Some(BigInt::from(0)));
        assert_eq!(parse_bigint("1.0"), None);
        assert_eq!(parse_bigint("-"), None);
        assert_eq!(parse_bigint("+-1"), None);
        assert_eq!(parse_bigint("1e3"), None);
    }

    #[test]
    fn integer_falls_back_to_float_notation() {
        assert_eq!(integer("1.0").unwrap(), BigInt::from(1));
        assert_eq!(integer("-1.0").unwrap(), BigInt::from(-1));
        assert_eq!(integer("1e3").unwrap(), BigInt::from(1000));
        assert!(integer("1.23e300").is_ok());
    }

    #[test]
    fn integer_failure_codes() {
        assert!(integer("abc").unwrap_err().is("not_a_number"));
        assert!(integer("1.5").unwrap_err().is("not_an_integer"));
        assert!(integer("nan").unwrap_err().is("not_an_integer"));
        assert!(integer("inf").unwrap_err().is("not_an_integer"));
        assert!(integer("1.23e-300").unwrap_err().is("not_an_integer"));
    }
}
