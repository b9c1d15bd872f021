use std::iter::Fuse;
use crate::truth::Truthy;

/// Apply `f` to every element.
pub fn map<F, I, B>(f: F, seq: I) -> Map<F, I::IntoIter>
  where I: IntoIterator, F: FnMut(I::Item) -> B {
  Map { f: f, seq: seq.into_iter() }
}

#[derive(Clone)]
pub struct Map<F, I> {
  f:   F,
  seq: I
}

impl<F, I, B> Iterator for Map<F, I>
  where I: Iterator, F: FnMut(I::Item) -> B {
  type Item = B;
  fn next(&mut self) -> Option<B> {
    let x = self.seq.next()?;
    Some((self.f)(x))
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.seq.size_hint() }
}


/// Keep the elements for which `pred` holds.
pub fn filter<P, I>(pred: P, seq: I) -> Filter<P, I::IntoIter>
  where I: IntoIterator, P: FnMut(&I::Item) -> bool {
  Filter { pred: pred, seq: seq.into_iter(), keep: true }
}

/// Keep the elements for which `pred` does not hold.
pub fn filterfalse<P, I>(pred: P, seq: I) -> Filter<P, I::IntoIter>
  where I: IntoIterator, P: FnMut(&I::Item) -> bool {
  Filter { pred: pred, seq: seq.into_iter(), keep: false }
}

/// Selection in either direction: an element passes when
/// `pred(x) == keep`.
#[derive(Clone)]
pub struct Filter<P, I> {
  pred: P,
  seq:  I,
  keep: bool
}

impl<P, I> Iterator for Filter<P, I>
  where I: Iterator, P: FnMut(&I::Item) -> bool {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let x = self.seq.next()?;
      if (self.pred)(&x) == self.keep { return Some(x) }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, self.seq.size_hint().1)
  }
}


/// The elements of `data` whose corresponding selector is true.
/// Stops as soon as either input runs out.
pub fn compress<D, S>(data: D, selectors: S) ->
  Compress<D::IntoIter, S::IntoIter>
  where D: IntoIterator, S: IntoIterator, S::Item: Truthy {
  Compress { data: data.into_iter().fuse(), selectors: selectors.into_iter().fuse() }
}

#[derive(Clone,Debug)]
pub struct Compress<D, S> {
  data:      Fuse<D>,
  selectors: Fuse<S>
}

impl<D, S> Iterator for Compress<D, S>
  where D: Iterator, S: Iterator, S::Item: Truthy {
  type Item = D::Item;
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let x   = self.data.next()?;
      let sel = self.selectors.next()?;
      if sel.is_true() { return Some(x) }
    }
  }
}


/// Elements up to, not including, the first one that fails `pred`.
/// Nothing after the first failure is produced, even if it would pass.
pub fn takewhile<P, I>(pred: P, seq: I) -> TakeWhile<P, I::IntoIter>
  where I: IntoIterator, P: FnMut(&I::Item) -> bool {
  TakeWhile { pred: pred, seq: seq.into_iter(), done: false }
}

#[derive(Clone)]
pub struct TakeWhile<P, I> {
  pred: P,
  seq:  I,
  done: bool
}

impl<P, I> Iterator for TakeWhile<P, I>
  where I: Iterator, P: FnMut(&I::Item) -> bool {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    if self.done { return None }
    let x = self.seq.next()?;
    if (self.pred)(&x) { return Some(x) }
    self.done = true;
    None
  }
}


/// Skip the longest prefix satisfying `pred`, then produce everything else.
/// `pred` is not consulted again after the first element that fails it.
pub fn dropwhile<P, I>(pred: P, seq: I) -> DropWhile<P, I::IntoIter>
  where I: IntoIterator, P: FnMut(&I::Item) -> bool {
  DropWhile { pred: Some(pred), seq: seq.into_iter() }
}

#[derive(Clone)]
pub struct DropWhile<P, I> {
  pred: Option<P>,    // `None` once the prefix is gone
  seq:  I
}

impl<P, I> Iterator for DropWhile<P, I>
  where I: Iterator, P: FnMut(&I::Item) -> bool {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    let Some(mut pred) = self.pred.take() else { return self.seq.next() };
    loop {
      let x = match self.seq.next() {
        Some(x) => x,
        None    => { self.pred = Some(pred); return None }
      };
      if !pred(&x) { return Some(x) }
    }
  }
}


/// Running fold: one partial result per input element.
///   * `f`    - combines the accumulator with the next element
///   * `base` - starting accumulator, not itself produced
pub fn accumulate<F, B, I>(f: F, base: B, seq: I) -> Accumulate<F, B, I::IntoIter>
  where I: IntoIterator, B: Clone, F: FnMut(B, I::Item) -> B {
  Accumulate { f: f, acc: base, seq: seq.into_iter() }
}

#[derive(Clone)]
pub struct Accumulate<F, B, I> {
  f:   F,
  acc: B,
  seq: I
}

impl<F, B, I> Iterator for Accumulate<F, B, I>
  where I: Iterator, B: Clone, F: FnMut(B, I::Item) -> B {
  type Item = B;
  fn next(&mut self) -> Option<B> {
    let x = self.seq.next()?;
    self.acc = (self.f)(self.acc.clone(), x);
    Some(self.acc.clone())
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.seq.size_hint() }
}
