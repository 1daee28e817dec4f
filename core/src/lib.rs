//! Optional values, success/failure results, and hint-driven conversions between types.
//!
//! Absence and failure are plain data: [`Option::None`] and [`Result::Err`]. Asserting that a value is present
//! through `unwrap` or `expect` raises a [`Fault`] instead, which panics with an informative message.

pub mod fault;
pub mod option;
pub mod result;
pub mod hint;
pub mod convert;

pub use fault::Fault;
pub use hint::{Hint, UnknownHint};
pub use option::Option;
pub use result::Result;
