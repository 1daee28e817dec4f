use crate::fault::Fault;

/// Either some value (`Some`) or no value (`None`).
///
/// ```
/// use fallible_core::Option;
///
/// let some = Option::Some(50);
/// assert!(some.is_some());
/// assert!(some.contains(&50));
/// assert_eq!(some.unwrap(), 50);
///
/// let none: Option<i32> = Option::None;
/// assert!(none.is_none());
/// ```
#[derive(Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Option<T> {
  Some(T),
  #[default]
  None,
}

impl<T> Option<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  /// Returns `true` if this is a `Some` whose value equals `value`.
  ///
  /// Equality is the payload's own [`PartialEq`]; no deeper comparison is performed.
  #[inline]
  pub fn contains<U: PartialEq<T>>(&self, value: &U) -> bool {
    match self {
      Self::Some(v) => value == v,
      Self::None => false,
    }
  }

  /// Returns the contained `Some` value.
  ///
  /// Prefer handling the `None` case explicitly.
  ///
  /// # Panics
  ///
  /// Panics with [`Fault::UnwrapOnNone`] if this is `None`.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(v) => v,
      Self::None => Fault::UnwrapOnNone.raise(),
    }
  }

  /// Returns the contained `Some` value.
  ///
  /// # Panics
  ///
  /// Panics with exactly `msg` as the message if this is `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, msg: &str) -> T {
    match self {
      Self::Some(v) => v,
      Self::None => Fault::expect_none(msg).raise(),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Some(v) => Option::Some(v),
      Self::None => Option::None,
    }
  }
}

impl<T> From<core::option::Option<T>> for Option<T> {
  #[inline]
  fn from(option: core::option::Option<T>) -> Self {
    match option {
      Some(v) => Self::Some(v),
      None => Self::None,
    }
  }
}
impl<T> From<Option<T>> for core::option::Option<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Option::Some(v) => Some(v),
      Option::None => None,
    }
  }
}
