use std::fmt::Display;

use crate::fault::Fault;
use crate::option::Option;

/// Either a success (`Ok`) or a failure (`Err`).
///
/// A result is `Ok` if and only if its success value is present; exactly one of the two values is ever present.
///
/// ```
/// use fallible_core::{Option, Result};
///
/// let ok: Result<i32, &str> = Result::Ok(50);
/// assert!(ok.is_ok());
/// assert_eq!(ok.ok(), Option::Some(50));
///
/// let err: Result<i32, &str> = Result::Err("some error");
/// assert!(err.contains_err(&"some error"));
/// assert_eq!(err.ok(), Option::None);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Result<T, E> {
  Ok(T),
  Err(E),
}

impl<T, E> Result<T, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool { matches!(self, Self::Ok(_)) }
  #[inline]
  pub const fn is_err(&self) -> bool { !self.is_ok() }

  /// Converts into an [`Option<T>`], discarding the error, if any.
  #[inline]
  pub fn ok(self) -> Option<T> {
    match self {
      Self::Ok(v) => Option::Some(v),
      Self::Err(_) => Option::None,
    }
  }
  /// Converts into an [`Option<E>`], discarding the success value, if any.
  #[inline]
  pub fn err(self) -> Option<E> {
    match self {
      Self::Ok(_) => Option::None,
      Self::Err(e) => Option::Some(e),
    }
  }

  /// Returns `true` if this is an `Ok` whose value equals `value`, using the value's own [`PartialEq`].
  #[inline]
  pub fn contains<U: PartialEq<T>>(&self, value: &U) -> bool {
    match self {
      Self::Ok(v) => value == v,
      Self::Err(_) => false,
    }
  }
  /// Returns `true` if this is an `Err` whose error equals `error`, using the error's own [`PartialEq`].
  #[inline]
  pub fn contains_err<F: PartialEq<E>>(&self, error: &F) -> bool {
    match self {
      Self::Ok(_) => false,
      Self::Err(e) => error == e,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Result<&T, &E> {
    match self {
      Self::Ok(v) => Result::Ok(v),
      Self::Err(e) => Result::Err(e),
    }
  }
}

impl<T, E: Display> Result<T, E> {
  /// Returns the contained `Ok` value.
  ///
  /// Prefer handling the `Err` case explicitly.
  ///
  /// # Panics
  ///
  /// Panics with [`Fault::UnwrapOnErr`] if this is an `Err`; the message includes the error.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Ok(v) => v,
      Self::Err(e) => Fault::unwrap_on_err(e).raise(),
    }
  }

  /// Returns the contained `Ok` value.
  ///
  /// # Panics
  ///
  /// Panics if this is an `Err`, with message `<msg>: "<error>"`.
  #[inline]
  #[track_caller]
  pub fn expect(self, msg: &str) -> T {
    match self {
      Self::Ok(v) => v,
      Self::Err(e) => Fault::expect_err(msg, e).raise(),
    }
  }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: core::result::Result<T, E>) -> Self {
    match result {
      Ok(v) => Self::Ok(v),
      Err(e) => Self::Err(e),
    }
  }
}
impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Result::Ok(v) => Ok(v),
      Result::Err(e) => Err(e),
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  const OK: Result<i32, &str> = Result::Ok(50);
  const ERR: Result<i32, &str> = Result::Err("some error");

  #[test]
  fn is_ok() {
    assert!(OK.is_ok());
    assert!(!ERR.is_ok());
  }

  #[test]
  fn is_err() {
    assert!(!OK.is_err());
    assert!(ERR.is_err());
  }

  #[test]
  fn exactly_one_classification() {
    for result in [OK, ERR] {
      assert_ne!(result.is_ok(), result.is_err());
    }
  }

  #[test]
  fn ok() {
    assert_eq!(OK.ok(), Option::Some(50));
    assert_eq!(ERR.ok(), Option::None);
  }

  #[test]
  fn err() {
    assert_eq!(OK.err(), Option::None);
    assert_eq!(ERR.err(), Option::Some("some error"));
  }

  #[test]
  fn contains() {
    assert!(OK.contains(&50));
    assert!(!OK.contains(&25));
    assert!(!ERR.contains(&50));
  }

  #[test]
  fn contains_err() {
    assert!(ERR.contains_err(&"some error"));
    assert!(!ERR.contains_err(&"some other error"));
    assert!(!OK.contains_err(&"some error"));
  }

  #[test]
  fn unwrap_ok() {
    assert_eq!(OK.unwrap(), 50);
  }

  #[test]
  #[should_panic(expected = "called `Result::unwrap()` on an `Err` value: \"some error\"")]
  fn unwrap_err() {
    ERR.unwrap();
  }

  #[test]
  fn expect_ok() {
    assert_eq!(OK.expect("some error"), 50);
  }

  #[test]
  #[should_panic(expected = "whoops: \"some error\"")]
  fn expect_err() {
    ERR.expect("whoops");
  }

  #[test]
  fn ok_then_rewrap_round_trips() {
    let rewrapped: Result<i32, &str> = Result::Ok(OK.ok().unwrap());
    assert_eq!(rewrapped, OK);
  }

  #[test]
  fn as_ref_borrows() {
    let err: Result<i32, String> = Result::Err(String::from("boom"));
    assert!(err.as_ref().contains_err(&&String::from("boom")));
    assert!(err.is_err());
  }

  #[test]
  fn std_round_trip() {
    assert_eq!(Result::from(Ok::<i32, &str>(50)), OK);
    assert_eq!(core::result::Result::from(ERR), Err::<i32, &str>("some error"));
  }
}
