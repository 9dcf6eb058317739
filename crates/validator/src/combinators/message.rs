//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationResult};

/// Placeholder replaced with the rejected token.
const TOKEN_PLACEHOLDER: &str = "{token}";

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the user-facing message of a validator.
///
/// Useful when the argument's name or domain explains the failure better than
/// the generic message. `{token}` in the message is substituted.
///
/// # Examples
///
/// ```
/// use argtools_validator::combinators::WithMessage;
/// use argtools_validator::foundation::Validate;
/// use argtools_validator::validators::Even;
///
/// let validator = WithMessage::new(Even, "block size must be even, got {token}");
/// let err = validator.validate("7").unwrap_err();
/// assert_eq!(err.to_string(), "block size must be even, got 7");
/// assert_eq!(err.code, "not_even");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new `WithMessage` combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message template.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Output = V::Output;

    fn validate(&self, token: &str) -> ValidationResult<Self::Output> {
        self.inner.validate(token).map_err(|mut error| {
            error.message = if self.message.contains(TOKEN_PLACEHOLDER) {
                Cow::Owned(self.message.replace(TOKEN_PLACEHOLDER, &error.token))
            } else {
                self.message.clone()
            };
            if let Some(code) = &self.code {
                error.code = code.clone();
            }
            error
        })
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}
