//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] writes the struct, its `Validate` implementation and a
//! token-first free function in one go. Hand-written validators are only
//! needed when a check has more than one way to fail after parsing.
//!
//! # Examples
//!
//! ```rust,ignore
//! use argtools_validator::validator;
//! use argtools_validator::foundation::ValidationError;
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub Even => BigInt;
//!     parse with crate::foundation::token::integer;
//!     rule(value) { value.is_even() }
//!     error(token, value) { ValidationError::new("not_even", token, "odd") }
//!     fn even();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub Positive { strict: bool } => f64;
//!     parse with crate::foundation::token::number;
//!     rule(self, value) { if self.strict { *value > 0.0 } else { *value >= 0.0 } }
//!     error(self, token, value) { ValidationError::new("not_positive", token, "negative") }
//!     fn positive(strict: bool);
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate`
/// implementation, constructor, and a token-first free function.
///
/// The generated `validate` parses the token with the `parse with` function,
/// evaluates `rule` against a reference to the parsed value, and returns the
/// value or the `error` expression. Every rejection is traced once.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields). The free function takes only
/// the token:
/// ```rust,ignore
/// validator! {
///     pub Odd => BigInt;
///     parse with crate::foundation::token::integer;
///     rule(value) { value.is_odd() }
///     error(token, value) { ValidationError::new("not_odd", token, "even") }
///     fn odd();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields). The free function
/// takes the token first, then the fields:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Negative { strict: bool } => f64;
///     parse with crate::foundation::token::number;
///     rule(self, value) { if self.strict { *value < 0.0 } else { *value <= 0.0 } }
///     error(self, token, value) { ValidationError::new("not_negative", token, "positive") }
///     fn negative(strict: bool);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1: Unit validator (no fields) + free function ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $out:ty;
        parse with $parser:path;
        rule($val:ident) $rule:block
        error($etok:ident, $eval:ident) $err:block
        $(#[$fmeta:meta])*
        fn $func:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Output = $out;

            #[allow(unused_variables)]
            fn validate(&self, token: &str) -> $crate::foundation::ValidationResult<$out> {
                let parsed: $out = $parser(token).map_err($crate::foundation::ValidationError::traced)?;
                let $val = &parsed;
                if $rule {
                    Ok(parsed)
                } else {
                    let $etok = token;
                    let $eval = &parsed;
                    Err($crate::foundation::ValidationError::traced($err))
                }
            }
        }

        $(#[$fmeta])*
        $vis fn $func(token: &str) -> $crate::foundation::ValidationResult<$out> {
            $crate::foundation::Validate::validate(&$name, token)
        }
    };

    // ── Variant 2: Struct with fields + auto new + free function ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } => $out:ty;
        parse with $parser:path;
        rule($self_:ident, $val:ident) $rule:block
        error($self2:ident, $etok:ident, $eval:ident) $err:block
        $(#[$fmeta:meta])*
        fn $func:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Output = $out;

            #[allow(unused_variables)]
            fn validate(&$self_, token: &str) -> $crate::foundation::ValidationResult<$out> {
                let parsed: $out = $parser(token).map_err($crate::foundation::ValidationError::traced)?;
                let $val = &parsed;
                if $rule {
                    Ok(parsed)
                } else {
                    let $etok = token;
                    let $eval = &parsed;
                    Err($crate::foundation::ValidationError::traced($err))
                }
            }
        }

        $(#[$fmeta])*
        $vis fn $func(token: &str, $($farg: $faty),*) -> $crate::foundation::ValidationResult<$out> {
            $crate::foundation::Validate::validate(&$name::new($($farg),*), token)
        }
    };
}
