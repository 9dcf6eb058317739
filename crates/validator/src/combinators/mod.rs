//! Validator combinators
//!
//! - [`And`]: chain a further guard on the same token
//! - [`AndThen`]: check or transform the parsed value
//! - [`WithMessage`]: replace the user-facing message

pub mod and;
pub mod and_then;
pub mod message;

pub use and::{And, and};
pub use and_then::{AndThen, and_then};
pub use message::{WithMessage, with_message};
