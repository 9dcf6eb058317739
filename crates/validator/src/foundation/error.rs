//! Error type for rejected tokens
//!
//! Every validator reports failure through [`ValidationError`]. Its `Display`
//! output is the message an argument parser shows to the end user, so it is
//! written as a complete sentence that quotes the offending token.
//!
//! All string fields use `Cow<'static, str>` so static error codes never
//! allocate.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt::Display;

use smallvec::SmallVec;

/// Ordered key/value pairs describing the violated constraint.
///
/// Most errors carry zero to two params, so they stay inline.
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A token was rejected by a validator.
///
/// # Examples
///
/// ```
/// use argtools_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("not_odd", "4", "'4' is not an odd number");
/// assert_eq!(error.to_string(), "'4' is not an odd number");
/// assert_eq!(error.token, "4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Machine-readable error code.
    ///
    /// Examples: "not_a_number", "below_minimum", "not_divisible"
    pub code: Cow<'static, str>,

    /// The raw token exactly as the caller passed it.
    pub token: String,

    /// Human-readable message, shown to the end user unchanged.
    pub message: Cow<'static, str>,

    /// Constraint parameters, e.g. `[("bound", "10"), ("inclusive", "false")]`.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        code: impl Into<Cow<'static, str>>,
        token: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code: code.into(),
            token: token.into(),
            message: message.into(),
            params: ErrorParams::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries the given code.
    #[must_use]
    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }

    /// Emits a debug event for this rejection and hands the error back.
    ///
    /// Validators call this exactly once per rejected token.
    #[must_use]
    pub fn traced(self) -> Self {
        tracing::debug!(
            target: "argtools::validator",
            code = %self.code,
            token = %self.token,
            "token rejected"
        );
        self
    }

    // ------------------------------------------------------------------------
    // Common constructors
    // ------------------------------------------------------------------------

    /// The token is not a number at all.
    pub fn not_a_number(token: &str) -> Self {
        Self::new(
            "not_a_number",
            token,
            format!("'{token}' is not a valid number"),
        )
    }

    /// The token is a number, but not a whole one.
    pub fn not_an_integer(token: &str) -> Self {
        Self::new(
            "not_an_integer",
            token,
            format!("'{token}' is not a valid integer number"),
        )
    }

    /// The token is an integer that does not fit the requested type `T`.
    pub fn integer_overflow<T>(token: &str) -> Self {
        let ty = type_name::<T>();
        Self::new(
            "integer_overflow",
            token,
            format!("'{token}' does not fit in {ty}"),
        )
        .with_param("type", ty)
    }

    /// The token violates an interval bound.
    pub(crate) fn out_of_bounds(
        token: &str,
        side: BoundSide,
        bound: impl Display,
        inclusive: bool,
    ) -> Self {
        let (code, op, kind) = match (side, inclusive) {
            (BoundSide::Minimum, true) => ("below_minimum", "<", "inclusive minimum"),
            (BoundSide::Minimum, false) => ("below_minimum", "<=", "exclusive minimum"),
            (BoundSide::Maximum, true) => ("above_maximum", ">", "inclusive maximum"),
            (BoundSide::Maximum, false) => ("above_maximum", ">=", "exclusive maximum"),
        };
        let bound = bound.to_string();
        Self::new(
            code,
            token,
            format!("Number '{token}' is {op} the {kind} {bound}"),
        )
        .with_param("bound", bound)
        .with_param("inclusive", inclusive.to_string())
    }
}

/// Which end of an interval was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundSide {
    Minimum,
    Maximum,
}

// ============================================================================
// TESTS
// ============================================================================
