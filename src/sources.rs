use std::cell::RefCell;
use std::iter::Fuse;
use std::rc::Rc;
use tracing::debug;
use crate::error::{SeqError,SeqResult};

/* Cycle */

/// Repeat the elements of `seq` forever.
/// The input is buffered in full before the first element is produced.
pub fn cycle<I: IntoIterator>(seq: I) -> SeqResult<Cycle<I::Item>> {
  let items: Vec<I::Item> = seq.into_iter().collect();
  if items.is_empty() { return Err(SeqError::EmptyInput { op: "cycle" }) }
  debug!(len = items.len(), "cycle: buffered input");
  Ok(Cycle { items: items, ix: 0 })
}

#[derive(Clone,Debug)]
pub struct Cycle<T> {
  items: Vec<T>,
  ix:    usize
}

impl<T: Clone> Iterator for Cycle<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    let x = self.items[self.ix].clone();
    self.ix = (self.ix + 1) % self.items.len();
    Some(x)
  }

  fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}


/* Repeat */

/// Produce `elem` over and over.
/// With `Some(n)` exactly `n` copies are produced, otherwise forever.
pub fn repeat<T: Clone>(elem: T, times: Option<usize>) -> Repeat<T> {
  Repeat { elem: elem, left: times }
}

#[derive(Clone,Debug)]
pub struct Repeat<T> {
  elem: T,
  left: Option<usize>
}

impl<T: Clone> Iterator for Repeat<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    match &mut self.left {
      None    => Some(self.elem.clone()),
      Some(0) => None,
      Some(n) => { *n -= 1; Some(self.elem.clone()) }
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    match self.left {
      None    => (usize::MAX, None),
      Some(n) => (n, Some(n))
    }
  }
}


/* Chain */

/// Concatenate sequences, exhausting each one before starting the next.
pub fn chain<I>(seqs: I) -> Chain<I::IntoIter, <I::Item as IntoIterator>::IntoIter>
  where
  I: IntoIterator,
  I::Item: IntoIterator
{
  Chain { seqs: seqs.into_iter().fuse(), current: None }
}

#[derive(Clone,Debug)]
pub struct Chain<I, J> {
  seqs:    Fuse<I>,
  current: Option<J>
}

impl<I, J> Iterator for Chain<I, J>
  where
  I: Iterator,
  I::Item: IntoIterator<IntoIter=J>,
  J: Iterator
{
  type Item = J::Item;
  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(cur) = &mut self.current {
        if let Some(x) = cur.next() { return Some(x) }
      }
      self.current = Some(self.seqs.next()?.into_iter());
    }
  }
}


/* Tee */

/// Hand out `n` handles to the same sequence.
///
/// The handles are aliases, not independent copies: they share a single
/// cursor, so pulling from any one of them advances all of them.
pub fn tee<I: IntoIterator>(seq: I, n: usize) -> Vec<Tee<I::IntoIter>> {
  let shared = Rc::new(RefCell::new(seq.into_iter()));
  (0 .. n).map(|_| Tee { shared: shared.clone() }).collect()
}

#[derive(Debug)]
pub struct Tee<I> {
  shared: Rc<RefCell<I>>
}

impl<I> Clone for Tee<I> {
  fn clone(&self) -> Self { Tee { shared: self.shared.clone() } }
}

impl<I> Tee<I> {
  /// Do both handles refer to the same underlying sequence.
  pub fn same_source(&self, other: &Tee<I>) -> bool {
    Rc::ptr_eq(&self.shared, &other.shared)
  }
}

impl<I: Iterator> Iterator for Tee<I> {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    self.shared.borrow_mut().next()
  }
}


/* Firstn */

/// At most the first `n` elements of `seq`.
/// Running out early is not an error, the result is just shorter.
pub fn firstn<I: IntoIterator>(seq: I, n: usize) -> Firstn<I::IntoIter> {
  Firstn { seq: seq.into_iter(), left: n }
}

#[derive(Clone,Debug)]
pub struct Firstn<I> {
  seq:  I,
  left: usize
}

impl<I: Iterator> Iterator for Firstn<I> {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    if self.left == 0 { return None }
    match self.seq.next() {
      Some(x) => { self.left -= 1; Some(x) }
      None    => { self.left = 0; None }
    }
  }
}


/* Islice */

/// The elements of `seq` at positions `start, start + step, ...` below
/// `stop`. `stop = None` means unbounded.
///
/// Elements before `start` are read and discarded. Nothing at or past
/// `stop` is ever read.
pub fn islice<I: IntoIterator>
  (seq: I, start: usize, stop: Option<usize>, step: usize) ->
    SeqResult<Islice<I::IntoIter>> {
  if step == 0 { return Err(SeqError::ZeroStep { op: "islice" }) }
  Ok(Islice { seq: seq.into_iter().fuse(), pos: 0, want: start, stop, step })
}

#[derive(Clone,Debug)]
pub struct Islice<I> {
  seq:  Fuse<I>,
  pos:  usize,        // index of the next element `seq` would produce
  want: usize,        // index of the next element to emit
  stop: Option<usize>,
  step: usize
}

impl<I: Iterator> Iterator for Islice<I> {
  type Item = I::Item;
  fn next(&mut self) -> Option<Self::Item> {
    if let Some(stop) = self.stop {
      if self.want >= stop { return None }
    }
    while self.pos < self.want {
      self.seq.next()?;
      self.pos += 1;
    }
    let x = self.seq.next()?;
    self.pos += 1;
    self.want = self.want.saturating_add(self.step);
    Some(x)
  }
}


/* Zip */

/// Pair up corresponding elements, stopping at the end of the shorter input.
pub fn zip<A: IntoIterator, B: IntoIterator>(a: A, b: B) ->
  Zip<A::IntoIter, B::IntoIter> {
  Zip { a: a.into_iter().fuse(), b: b.into_iter().fuse() }
}

#[derive(Clone,Debug)]
pub struct Zip<A, B> {
  a: Fuse<A>,
  b: Fuse<B>
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
  type Item = (A::Item, B::Item);
  fn next(&mut self) -> Option<Self::Item> {
    let x = self.a.next()?;
    let y = self.b.next()?;
    Some((x,y))
  }
}



#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use crate::count::count;

  #[test]
  fn test_cycle() {
    let xs = firstn(cycle([1,2,3]).unwrap(), 9).collect::<Vec<_>>();
    assert_eq!(xs, vec![1,2,3,1,2,3,1,2,3]);

    let xs = firstn(cycle(0 .. 3).unwrap(), 7).collect::<Vec<_>>();
    assert_eq!(xs, vec![0,1,2,0,1,2,0]);
  }

  #[test]
  fn test_cycle_empty() {
    let err = cycle(Vec::<u8>::new()).unwrap_err();
    assert_eq!(err, SeqError::EmptyInput { op: "cycle" });
  }

  #[test]
  fn test_repeat() {
    assert_eq!(repeat("abc", Some(5)).collect::<Vec<_>>(), vec!["abc"; 5]);
    assert_eq!(repeat("abc", Some(0)).count(), 0);
    assert_eq!(firstn(repeat("cba", None), 3).collect::<Vec<_>>(),
               vec!["cba"; 3]);
    assert_eq!(repeat(1, Some(4)).size_hint(), (4, Some(4)));
  }

  #[test]
  fn test_chain() {
    let xs = chain(vec![vec!['a','b','c'], vec![], vec!['1','2','3']])
               .collect::<String>();
    assert_eq!(xs, "abc123");
    assert_eq!(chain(Vec::<Vec<u8>>::new()).next(), None);
  }

  #[test]
  fn test_chain_is_lazy() {
    let xs = chain(vec![count(0,1), count(100,1)]);
    assert_eq!(firstn(xs, 3).collect::<Vec<_>>(), vec![0,1,2]);
  }

  #[test]
  fn test_tee_aliases() {
    let mut hs = tee(1 ..= 4, 3);
    assert_eq!(hs.len(), 3);
    assert!(hs[0].same_source(&hs[2]));

    assert_eq!(hs[0].next(), Some(1));
    assert_eq!(hs[1].next(), Some(2));
    assert_eq!(hs[2].next(), Some(3));
    assert_eq!(hs[0].next(), Some(4));
    assert_eq!(hs[1].next(), None);
    assert_eq!(hs[2].next(), None);
  }

  #[test]
  fn test_tee_zero() {
    assert!(tee(0 .. 3, 0).is_empty());
  }

  #[test]
  fn test_firstn() {
    assert_eq!(firstn(0 .. 10, 5).collect::<Vec<_>>(), vec![0,1,2,3,4]);
    assert_eq!(firstn(0 .. 3, 5).collect::<Vec<_>>(), vec![0,1,2]);
    assert_eq!(firstn(0 .. 3, 0).count(), 0);
  }

  #[test]
  fn test_islice() {
    let xs = islice(0 .. 10, 0, Some(5), 1).unwrap().collect::<Vec<_>>();
    assert_eq!(xs, vec![0,1,2,3,4]);

    let xs = islice(0 .. 10, 2, Some(8), 2).unwrap().collect::<Vec<_>>();
    assert_eq!(xs, vec![2,4,6]);

    let xs = islice("ABCDEFG".chars(), 0, None, 2).unwrap()
               .collect::<String>();
    assert_eq!(xs, "ACEG");

    assert_eq!(islice(0 .. 10, 5, Some(2), 1).unwrap().count(), 0);
    assert_eq!(islice(0 .. 3, 5, None, 1).unwrap().count(), 0);
  }

  #[test]
  fn test_islice_infinite() {
    let xs = islice(count(0,1), 3, Some(12), 4).unwrap().collect::<Vec<_>>();
    assert_eq!(xs, vec![3,7,11]);
  }

  #[test]
  fn test_islice_does_not_read_past_stop() {
    let reads = Cell::new(0);
    let seq = (0 .. 100).inspect(|_| reads.set(reads.get() + 1));
    let xs = islice(seq, 1, Some(4), 1).unwrap().collect::<Vec<_>>();
    assert_eq!(xs, vec![1,2,3]);
    assert_eq!(reads.get(), 4);
  }

  #[test]
  fn test_islice_zero_step() {
    let err = islice(0 .. 10, 0, None, 0).unwrap_err();
    assert_eq!(err, SeqError::ZeroStep { op: "islice" });
  }

  #[test]
  fn test_zip() {
    let xs = zip(vec!['a','b','c'], [1,2,3]).collect::<Vec<_>>();
    assert_eq!(xs, vec![('a',1),('b',2),('c',3)]);
    assert_eq!(zip(0 .. 2, count(5,1)).collect::<Vec<_>>(), vec![(0,5),(1,6)]);
    assert_eq!(zip(count(5,1), 0 .. 0).count(), 0);
  }
}
