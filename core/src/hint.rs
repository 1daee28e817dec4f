use std::fmt::Debug;

/// A closed set of string-like tags that tells a conversion which target to produce.
///
/// Implemented by fieldless enums, usually through the [`hints!`](crate::hints) macro. Every value of a hint type is a
/// legal hint, so a conversion can never be asked for a target outside the set.
pub trait Hint: Copy + Eq + Debug + 'static {
  /// Every hint in this set, in declaration order.
  const ALL: &'static [Self];

  /// Unique tag of this hint.
  fn tag(self) -> &'static str;

  /// Parses `tag` into the hint that has exactly that tag.
  fn from_tag(tag: &str) -> crate::result::Result<Self, UnknownHint> {
    match Self::ALL.iter().copied().find(|hint| hint.tag() == tag) {
      Some(hint) => crate::result::Result::Ok(hint),
      None => crate::result::Result::Err(UnknownHint::new::<Self>(tag)),
    }
  }

  #[inline]
  fn tags() -> impl Iterator<Item=&'static str> {
    Self::ALL.iter().map(|hint| hint.tag())
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("unknown hint '{tag}'; expected one of: {}", .expected.join(", "))]
pub struct UnknownHint {
  pub tag: String,
  pub expected: Vec<&'static str>,
}
impl UnknownHint {
  pub fn new<H: Hint>(tag: &str) -> Self {
    Self { tag: tag.to_owned(), expected: H::tags().collect() }
  }
}

/// Declares a fieldless enum implementing [`Hint`], `Display`, and `FromStr`, mapping each variant to its tag.
///
/// ```
/// use fallible_core::{hints, Hint};
///
/// hints! {
///   pub enum Target {
///     Number => "number",
///     Text => "string",
///   }
/// }
///
/// assert_eq!(Target::Text.tag(), "string");
/// assert_eq!(Target::from_tag("number"), fallible_core::Result::Ok(Target::Number));
/// ```
#[macro_export]
macro_rules! hints {
  ($(#[$meta:meta])* $vis:vis enum $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $tag:literal),+ $(,)? }) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
    $vis enum $name {
      $($(#[$variant_meta])* $variant,)+
    }

    impl $crate::hint::Hint for $name {
      const ALL: &'static [Self] = &[$(Self::$variant,)+];

      #[inline]
      fn tag(self) -> &'static str {
        match self {
          $(Self::$variant => $tag,)+
        }
      }
    }

    impl ::std::fmt::Display for $name {
      fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str($crate::hint::Hint::tag(*self))
      }
    }

    impl ::std::str::FromStr for $name {
      type Err = $crate::hint::UnknownHint;
      fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
        match <Self as $crate::hint::Hint>::from_tag(s) {
          $crate::result::Result::Ok(hint) => ::std::result::Result::Ok(hint),
          $crate::result::Result::Err(e) => ::std::result::Result::Err(e),
        }
      }
    }
  };
}
