//! Parity validators
//!
//! Tokens are read with the [`Integer`](super::Integer) rules, so `"4.0"` is
//! even and `"3.5"` is rejected as not an integer. Parity uses the truncating
//! remainder, which makes `-3` odd.

use num_bigint::BigInt;
use num_integer::Integer as _;

use crate::foundation::ValidationError;

crate::validator! {
    /// Accepts odd integers.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::validators::Odd;
    /// use argtools_validator::foundation::Validate;
    ///
    /// assert!(Odd.validate("3").is_ok());
    /// assert!(Odd.validate("-3").is_ok());
    /// assert!(Odd.validate("4").is_err());
    /// ```
    pub Odd => BigInt;
    parse with crate::foundation::token::integer;
    rule(value) { value.is_odd() }
    error(token, value) {
        ValidationError::new("not_odd", token, format!("'{token}' is not an odd number"))
    }
    /// Parses `token` as an odd integer.
    fn odd();
}

crate::validator! {
    /// Accepts even integers, zero included.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::validators::Even;
    /// use argtools_validator::foundation::Validate;
    ///
    /// assert!(Even.validate("0").is_ok());
    /// assert!(Even.validate("-8").is_ok());
    /// assert!(Even.validate("7").is_err());
    /// ```
    pub Even => BigInt;
    parse with crate::foundation::token::integer;
    rule(value) { value.is_even() }
    error(token, value) {
        ValidationError::new("not_even", token, format!("'{token}' is not an even number"))
    }
    /// Parses `token` as an even integer.
    fn even();
}
