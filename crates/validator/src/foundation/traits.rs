//! Core traits for the validation system
//!
//! A validator turns a raw token into a typed value or a [`ValidationError`].
//! Constraint parameters live on the validator value itself, so binding them
//! once and validating many tokens is the normal way to use it.

use std::borrow::Cow;

use crate::combinators::{And, AndThen, WithMessage};
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// # Examples
///
/// ```
/// use argtools_validator::foundation::{Validate, ValidationError, ValidationResult};
///
/// struct NonEmptyName;
///
/// impl Validate for NonEmptyName {
///     type Output = String;
///
///     fn validate(&self, token: &str) -> ValidationResult<String> {
///         if token.is_empty() {
///             Err(ValidationError::new("empty", token, "name must not be empty"))
///         } else {
///             Ok(token.to_owned())
///         }
///     }
/// }
///
/// assert_eq!(NonEmptyName.validate("ada").unwrap(), "ada");
/// assert!(NonEmptyName.validate("").is_err());
/// ```
pub trait Validate {
    /// The value produced by a successful validation.
    type Output;

    /// Converts `token` into a checked value.
    ///
    /// Guards run in a fixed order and the first violation is returned.
    fn validate(&self, token: &str) -> ValidationResult<Self::Output>;
}

/// Any `Fn(&str) -> ValidationResult<T>` is a validator, so the free
/// functions in [`validators`](crate::validators) compose like structs do.
impl<F, T> Validate for F
where
    F: Fn(&str) -> ValidationResult<T>,
{
    type Output = T;

    #[inline]
    fn validate(&self, token: &str) -> ValidationResult<T> {
        self(token)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Requires `other` to accept the token as well.
    ///
    /// `self` runs first and its value is returned. `other` only sees the
    /// token if `self` accepted it.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::prelude::*;
    ///
    /// let small_odd = Odd.and(at_most(9.0));
    /// assert!(small_odd.validate("7").is_ok());
    /// assert!(small_odd.validate("11").unwrap_err().is("above_maximum"));
    /// assert!(small_odd.validate("8").unwrap_err().is("not_odd"));
    /// ```
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Runs `f` on the parsed value, with the token, once `self` accepted it.
    ///
    /// `f` may reject the value or convert it.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::prelude::*;
    ///
    /// let port = parse_integer_as::<u16>.and_then(|token: &str, port: u16| {
    ///     if port >= 1024 {
    ///         Ok(port)
    ///     } else {
    ///         Err(ValidationError::new("privileged_port", token, format!("port {token} is privileged")))
    ///     }
    /// });
    /// assert_eq!(port.validate("8080").unwrap(), 8080);
    /// assert!(port.validate("80").unwrap_err().is("privileged_port"));
    /// ```
    fn and_then<F, U>(self, f: F) -> AndThen<Self, F>
    where
        F: Fn(&str, Self::Output) -> ValidationResult<U>,
    {
        AndThen::new(self, f)
    }

    /// Replaces the user-facing message of any rejection.
    ///
    /// `{token}` in the message is replaced with the rejected token. The code,
    /// token and params of the original error are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::prelude::*;
    ///
    /// let workers = strictly_positive().with_message("--workers needs a count above zero, got '{token}'");
    /// let err = workers.validate("0").unwrap_err();
    /// assert_eq!(err.to_string(), "--workers needs a count above zero, got '0'");
    /// assert!(err.is("not_strictly_positive"));
    /// ```
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Turns the validator into a single-argument function.
    ///
    /// The result plugs straight into an argument parser's conversion hook,
    /// e.g. clap's `value_parser`.
    ///
    /// # Examples
    ///
    /// ```
    /// use argtools_validator::prelude::*;
    ///
    /// let percent = in_range(0.0, 100.0).into_parser();
    /// assert_eq!(percent("42.5").unwrap(), 42.5);
    /// assert!(percent("101").is_err());
    /// ```
    fn into_parser(
        self,
    ) -> impl Fn(&str) -> ValidationResult<Self::Output> + Clone + Send + Sync + 'static
    where
        Self: Clone + Send + Sync + 'static,
    {
        move |token: &str| self.validate(token)
    }
}

impl<V: Validate> ValidateExt for V {}
