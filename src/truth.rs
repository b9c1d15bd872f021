//! Canonical truthy coercion.
//!
//! A value counts as true only if it is one of a fixed set of
//! representations: the number 1, the boolean `true`, or one of the strings
//! in `TRUE_STRINGS`. Everything else is false, including other non-zero
//! numbers and strings such as `"TRUE"` or `"on"`.

/// String spellings accepted as true.
pub const TRUE_STRINGS: [&str; 7] = ["True", "true", "T", "t", "Yes", "yes", "y"];

/// Values that can be coerced to a canonical boolean.
pub trait Truthy {
  fn is_true(&self) -> bool;
}

/// Is `v` one of the accepted true values.
pub fn is_true<T: Truthy + ?Sized>(v: &T) -> bool { v.is_true() }


impl Truthy for bool {
  fn is_true(&self) -> bool { *self }
}

impl Truthy for str {
  fn is_true(&self) -> bool { TRUE_STRINGS.contains(&self) }
}

impl Truthy for String {
  fn is_true(&self) -> bool { self.as_str().is_true() }
}

impl Truthy for char {
  fn is_true(&self) -> bool {
    let mut buf = [0; 4];
    self.encode_utf8(&mut buf).is_true()
  }
}

impl<T: Truthy + ?Sized> Truthy for &T {
  fn is_true(&self) -> bool { (**self).is_true() }
}

impl<T: Truthy> Truthy for Option<T> {
  fn is_true(&self) -> bool {
    match self {
      Some(x) => x.is_true(),
      None    => false
    }
  }
}

macro_rules! TruthyNumber {
  ( $one:literal => $($t:ty),* ) => { $(
    impl Truthy for $t {
      fn is_true(&self) -> bool { *self == $one }
    }
    )*
  }
}

TruthyNumber! { 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }
TruthyNumber! { 1.0 => f32, f64 }


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accepted() {
    assert!(is_true(&true));
    assert!(is_true(&1_u8));
    assert!(is_true(&1_i64));
    assert!(is_true(&1.0_f64));
    for s in TRUE_STRINGS {
      assert!(is_true(s), "{s}");
      assert!(is_true(&s.to_string()), "{s}");
    }
    assert!(is_true(&'t'));
    assert!(is_true(&'y'));
    assert!(is_true(&Some(1)));
  }

  #[test]
  fn test_rejected() {
    assert!(!is_true(&false));
    assert!(!is_true(&0));
    assert!(!is_true(&2));
    assert!(!is_true(&-1));
    assert!(!is_true(&0.5_f32));
    assert!(!is_true("TRUE"));
    assert!(!is_true("no"));
    assert!(!is_true("Y"));
    assert!(!is_true(""));
    assert!(!is_true(&'n'));
    assert!(!is_true(&None::<bool>));
  }
}
