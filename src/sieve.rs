//! Prime and Fibonacci streams built out of lazy filters.

use std::ops::Add;
use tracing::trace;
use crate::transform::{takewhile,TakeWhile};

/// Elements of `ints` that are not multiples of `m`.
pub fn remove_multiples<T, I>(m: T, ints: I) -> RemoveMultiples<T, I::IntoIter>
  where T: num::Integer, I: IntoIterator<Item=T> {
  RemoveMultiples { m: m, ints: ints.into_iter() }
}

#[derive(Clone,Debug)]
pub struct RemoveMultiples<T, I> {
  m:    T,
  ints: I
}

impl<T: num::Integer, I: Iterator<Item=T>> Iterator for RemoveMultiples<T, I> {
  type Item = T;
  fn next(&mut self) -> Option<T> {
    loop {
      let x = self.ints.next()?;
      if !x.is_multiple_of(&self.m) { return Some(x) }
    }
  }
}


// -----------------------------------------------------------------------------

/// Sieve of Eratosthenes over a stream of integers.
///
/// The head of the remaining stream is always prime. After producing it,
/// the rest of the stream is wrapped in one more filter removing its
/// multiples, so the sieve grows by one filter per prime found.
/// Starting from `count(2,1)` this gives every prime.
pub fn sieve<'a, T, I>(ints: I) -> Sieve<'a, T>
  where T: num::Integer + Clone + 'a, I: IntoIterator<Item=T>, I::IntoIter: 'a {
  Sieve { ints: Box::new(ints.into_iter()), found: 0 }
}

pub struct Sieve<'a, T> {
  ints:  Box<dyn Iterator<Item=T> + 'a>,
  found: usize
}

impl<'a, T: num::Integer + Clone + 'a> Iterator for Sieve<'a, T> {
  type Item = T;
  fn next(&mut self) -> Option<T> {
    let prime = self.ints.next()?;
    let rest  = std::mem::replace(&mut self.ints, Box::new(std::iter::empty()));
    self.ints = Box::new(remove_multiples(prime.clone(), rest));
    self.found += 1;
    trace!(filters = self.found, "sieve: found prime");
    Some(prime)
  }
}


// -----------------------------------------------------------------------------

/// The Fibonacci numbers 0, 1, 1, 2, 3, 5, ...
pub fn fib<T>() -> Fib<T>
  where T: num::Zero + num::One + Clone + Add<Output=T> {
  Fib { index: 0, history: [T::zero(), T::zero()] }
}

/// Keeps the two most recently produced values, oldest first.
/// Each element is computed only when it is pulled.
#[derive(Clone,Debug)]
pub struct Fib<T> {
  index:   usize,   // saturates at 2, only the first two elements are special
  history: [T; 2]
}

impl<T> Iterator for Fib<T>
  where T: num::Zero + num::One + Clone + Add<Output=T> {
  type Item = T;
  fn next(&mut self) -> Option<T> {
    let element =
      match self.index {
        0 => T::zero(),
        1 => T::one(),
        _ => self.history[0].clone() + self.history[1].clone()
      };
    let newest = std::mem::replace(&mut self.history[1], element.clone());
    self.history[0] = newest;
    if self.index < 2 { self.index += 1 }
    Some(element)
  }

  fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}


/// Same as `takewhile`.
pub fn take<P, I>(pred: P, seq: I) -> TakeWhile<P, I::IntoIter>
  where I: IntoIterator, P: FnMut(&I::Item) -> bool {
  takewhile(pred, seq)
}
