use std::fmt::Display;

/// Diagnostic raised when an `unwrap` or `expect` is called on the empty or failure variant.
///
/// Faults are not recoverable errors: they signal that the caller's assumption about a value was wrong. They are never
/// returned, only [raised](Fault::raise). The `Display` text of a fault is exactly the panic message.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Fault {
  #[error("called `Option::unwrap()` on a `None` value")]
  UnwrapOnNone,
  #[error("called `Result::unwrap()` on an `Err` value: \"{0}\"")]
  UnwrapOnErr(String),
  #[error("{0}")]
  ExpectNone(String),
  #[error("{message}: \"{error}\"")]
  ExpectErr { message: String, error: String },
}

impl Fault {
  #[inline]
  pub fn unwrap_on_err(error: impl Display) -> Self {
    Self::UnwrapOnErr(error.to_string())
  }
  #[inline]
  pub fn expect_none(message: &str) -> Self {
    Self::ExpectNone(message.to_owned())
  }
  #[inline]
  pub fn expect_err(message: &str, error: impl Display) -> Self {
    Self::ExpectErr { message: message.to_owned(), error: error.to_string() }
  }

  /// Panics with this fault's message as a `String` payload.
  #[cold]
  #[inline(never)]
  #[track_caller]
  pub fn raise(self) -> ! {
    #[cfg(feature = "tracing")] {
      let location = std::panic::Location::caller();
      tracing::error!(fault = %self, %location, "value assertion failed");
    }
    panic!("{}", self)
  }
}
