use std::iter::Fuse;
use tracing::trace;

/// The elements of one run, buffered.
pub type Group<T> = std::vec::IntoIter<T>;

/// Group runs of equal consecutive elements.
pub fn groupby<I>(seq: I) -> GroupBy<I::IntoIter, fn(&I::Item) -> I::Item, I::Item>
  where I: IntoIterator, I::Item: Clone + PartialEq {
  groupby_key(seq, <I::Item as Clone>::clone as fn(&I::Item) -> I::Item)
}

/// Group runs of consecutive elements whose keys are equal.
///
/// A new group starts whenever the key changes, so a key that shows up
/// again after a different one starts a fresh group. Each group is fully
/// buffered before it is produced, so groups stay valid however far the
/// outer sequence is advanced.
pub fn groupby_key<I, F, K>(seq: I, keyfun: F) -> GroupBy<I::IntoIter, F, K>
  where I: IntoIterator, F: FnMut(&I::Item) -> K, K: PartialEq {
  GroupBy { seq: seq.into_iter().fuse(), keyfun: keyfun, pending: None }
}

pub struct GroupBy<I: Iterator, F, K> {
  seq:     Fuse<I>,
  keyfun:  F,
  pending: Option<(K, I::Item)>   // first element of the next group
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
  where I: Iterator, F: FnMut(&I::Item) -> K, K: PartialEq {
  type Item = (K, Group<I::Item>);
  fn next(&mut self) -> Option<Self::Item> {
    let (key, first) = match self.pending.take() {
      Some(p) => p,
      None    => {
        let x = self.seq.next()?;
        ((self.keyfun)(&x), x)
      }
    };

    let mut run = vec![first];
    for x in self.seq.by_ref() {
      let k = (self.keyfun)(&x);
      if k != key {
        self.pending = Some((k, x));
        break
      }
      run.push(x)
    }
    trace!(len = run.len(), "groupby: closed group");
    Some((key, run.into_iter()))
  }
}
