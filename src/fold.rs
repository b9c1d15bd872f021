use std::cmp::Ordering;
use crate::truth::Truthy;

/// Left fold.
/// Returns `None` for an empty sequence, so an empty input can be told apart
/// from a fold whose result happens to equal `base`.
pub fn foldl<F, B, I>(mut f: F, base: B, seq: I) -> Option<B>
  where I: IntoIterator, F: FnMut(B, I::Item) -> B {
  let mut it = seq.into_iter();
  let first = it.next()?;
  let mut acc = f(base, first);
  for x in it {
    acc = f(acc, x)
  }
  Some(acc)
}

/// Same as `foldl`.
pub fn reduce<F, B, I>(f: F, base: B, seq: I) -> Option<B>
  where I: IntoIterator, F: FnMut(B, I::Item) -> B {
  foldl(f, base, seq)
}

/// Are all elements true.
/// Every element has to pass `is_true` on its own, not just the last one.
/// Stops at the first element that is not true. An empty sequence is
/// not true: there is nothing to fold.
pub fn all<I>(seq: I) -> bool
  where I: IntoIterator, I::Item: Truthy {
  let mut seen = false;
  for x in seq {
    if !x.is_true() { return false }
    seen = true
  }
  seen
}

/// Is at least one element true.
/// Stops at the first element that is true.
pub fn any<I>(seq: I) -> bool
  where I: IntoIterator, I::Item: Truthy {
  for x in seq {
    if x.is_true() { return true }
  }
  false
}

/// Drain `seq` into a sorted vector.
/// The sort is stable, also when `reverse` is set.
pub fn sorted<I>(seq: I, reverse: bool) -> Vec<I::Item>
  where I: IntoIterator, I::Item: Ord {
  sort_with(seq.into_iter().collect(), reverse, Ord::cmp)
}

/// Drain `seq` into a vector sorted by the keys computed by `key`.
pub fn sorted_by_key<I, K, F>(seq: I, mut key: F, reverse: bool) -> Vec<I::Item>
  where I: IntoIterator, K: Ord, F: FnMut(&I::Item) -> K {
  sort_with(seq.into_iter().collect(), reverse, |a, b| key(a).cmp(&key(b)))
}

fn sort_with<T, F>(mut xs: Vec<T>, reverse: bool, mut cmp: F) -> Vec<T>
  where F: FnMut(&T, &T) -> Ordering {
  if reverse {
    xs.sort_by(|a, b| cmp(a, b).reverse())
  } else {
    xs.sort_by(|a, b| cmp(a, b))
  }
  xs
}



#[cfg(test)]
mod tests {
  use super::*;
  use crate::ops::add;

  #[test]
  fn test_foldl() {
    assert_eq!(foldl(add, 0, 0 ..= 10), Some(55));
    assert_eq!(foldl(|acc: String, c| acc + c, String::from(">"), ["a","b"]),
               Some(">ab".to_string()));
    assert_eq!(foldl(|a, b| a - b, 10, [1,2,3]), Some(4));
  }

  #[test]
  fn test_foldl_empty() {
    assert_eq!(foldl(add, 0, Vec::<i32>::new()), None);
    assert_eq!(reduce(add, 7, 0 .. 0), None);
    assert_eq!(reduce(add, 7, 0 .. 1), Some(7));
  }

  #[test]
  fn test_all() {
    assert!(!all([0,1,0]));
    assert!(all([1,1,1]));
    assert!(all(["yes","t","True"]));
    assert!(!all([1,2]));
    assert!(!all(Vec::<bool>::new()));
  }

  #[test]
  fn test_all_checks_every_element() {
    assert!(!all(["no","yes"]));
    assert!(!all(["yes","no","yes"]));
    assert!(all(["t","yes"]));
  }

  #[test]
  fn test_any() {
    assert!(any([0,1,0]));
    assert!(!any([0,0,0]));
    assert!(any(["no","yes"]));
    assert!(!any(Vec::<bool>::new()));
  }

  #[test]
  fn test_any_short_circuits() {
    let mut pulled = 0;
    let seq = (0 .. 10).map(|x| { pulled += 1; x == 1 });
    assert!(any(seq));
    assert_eq!(pulled, 2);
  }

  #[test]
  fn test_sorted() {
    assert_eq!(sorted(0 .. 10, true), vec![9,8,7,6,5,4,3,2,1,0]);
    assert_eq!(sorted(vec![3,1,2], false), vec![1,2,3]);
    assert_eq!(sorted(Vec::<u8>::new(), false), vec![]);
  }

  #[test]
  fn test_sorted_by_key() {
    let xs = vec!["bb","a","ccc","dd","e"];
    assert_eq!(sorted_by_key(xs.clone(), |s| s.len(), false),
               vec!["a","e","bb","dd","ccc"]);
    assert_eq!(sorted_by_key(xs, |s| s.len(), true),
               vec!["ccc","bb","dd","a","e"]);
  }
}
