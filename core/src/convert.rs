//! Hint-driven conversions between types.
//!
//! [`Into`] and [`TryInto`] convert `self` into another value, [`From`] and [`TryFrom`] construct `Self` from another
//! value. Each conversion takes a [`Hint`] that selects which target to produce. A type may implement any subset of
//! these contracts.
//!
//! The methods carry a `_hinted` suffix so they never collide with the `into`/`try_into`/`from`/`try_from` methods of
//! the std prelude traits, which every type implements.

use crate::hint::{Hint, UnknownHint};
use crate::result::Result;

/// Converts `self` into another value, selected by a hint of type `H`.
///
/// A value **must** be returned for every hint. If the conversion can fail, implement [`TryInto`] instead.
///
/// ```
/// use fallible_core::hints;
/// use fallible_core::convert::Into;
///
/// hints! { enum SumHint { Number => "number", Text => "string" } }
///
/// struct Sum(i32, i32);
/// impl Into<String, SumHint> for Sum {
///   fn into_hinted(&self, hint: SumHint) -> String {
///     match hint {
///       SumHint::Number => (self.0 + self.1).to_string(),
///       SumHint::Text => format!("{} + {} = {}", self.0, self.1, self.0 + self.1),
///     }
///   }
/// }
///
/// assert_eq!(Sum(2, 3).into_hinted(SumHint::Number), "5");
/// assert_eq!(Sum(2, 3).into_hinted(SumHint::Text), "2 + 3 = 5");
/// ```
pub trait Into<T, H: Hint> {
  /// Performs the conversion of `self` into the value selected by `hint`.
  fn into_hinted(&self, hint: H) -> T;

  /// Parses `tag` into a hint and performs the conversion, or returns an error if `tag` names no hint.
  #[inline]
  fn into_tag(&self, tag: &str) -> Result<T, UnknownHint> {
    match H::from_tag(tag) {
      Result::Ok(hint) => Result::Ok(self.into_hinted(hint)),
      Result::Err(e) => Result::Err(e),
    }
  }
}

/// Tries to convert `self` into another value, selected by a hint of type `H`.
///
/// Failure is returned as an `Err`, never raised. If the conversion cannot fail, prefer [`Into`].
pub trait TryInto<T, E, H: Hint> {
  /// Tries to perform the conversion of `self` into the value selected by `hint`.
  fn try_into_hinted(&self, hint: H) -> Result<T, E>;

  /// Parses `tag` into a hint and tries to perform the conversion. An unknown tag is reported as an `Err` through
  /// `E`'s conversion from [`UnknownHint`].
  #[inline]
  fn try_into_tag(&self, tag: &str) -> Result<T, E> where
    E: std::convert::From<UnknownHint>,
  {
    match H::from_tag(tag) {
      Result::Ok(hint) => self.try_into_hinted(hint),
      Result::Err(e) => Result::Err(<E as std::convert::From<UnknownHint>>::from(e)),
    }
  }
}

/// Constructs `Self` from a `T`, selected by a hint of type `H`. Must succeed for every hint.
pub trait From<T, H: Hint>: Sized {
  fn from_hinted(value: T, hint: H) -> Self;
}

/// Tries to construct `Self` from a `T`, selected by a hint of type `H`.
pub trait TryFrom<T, E, H: Hint>: Sized {
  fn try_from_hinted(value: T, hint: H) -> Result<Self, E>;
}
