//! Enumerating structured finite sets.
//!
//! All three generators buffer their input once and then walk an index
//! vector, so the result set itself is never materialized. Results are
//! produced in lexicographic order of input positions.

use tracing::trace;

fn pick<T: Clone>(pool: &[T], idx: &[usize]) -> Vec<T> {
  idx.iter().map(|i| pool[*i].clone()).collect()
}


// -----------------------------------------------------------------------------

/// All `r`-element selections of `seq` without repetition, in input order.
/// Produces `C(n,r)` results, none if `r > n`.
pub fn combinations<I: IntoIterator>(seq: I, r: usize) -> Combinations<I::Item> {
  let pool: Vec<I::Item> = seq.into_iter().collect();
  let done = r > pool.len();
  Combinations { pool: pool, idx: (0 .. r).collect(), started: false, done }
}

#[derive(Clone,Debug)]
pub struct Combinations<T> {
  pool:    Vec<T>,
  idx:     Vec<usize>,
  started: bool,
  done:    bool
}

impl<T: Clone> Iterator for Combinations<T> {
  type Item = Vec<T>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.done { return None }
    if !self.started {
      self.started = true;
      return Some(pick(&self.pool, &self.idx))
    }

    let n = self.pool.len();
    let r = self.idx.len();
    let Some(i) = (0 .. r).rev().find(|&i| self.idx[i] != i + n - r) else {
      self.done = true;
      return None
    };
    self.idx[i] += 1;
    for j in i + 1 .. r {
      self.idx[j] = self.idx[j - 1] + 1
    }
    Some(pick(&self.pool, &self.idx))
  }
}


// -----------------------------------------------------------------------------

/// All `r`-element selections of `seq` where an element may be picked
/// more than once. Produces `C(n+r-1,r)` results.
pub fn combinations_with_replacement<I: IntoIterator>
  (seq: I, r: usize) -> CombinationsWithReplacement<I::Item> {
  let pool: Vec<I::Item> = seq.into_iter().collect();
  let done = pool.is_empty() && r > 0;
  CombinationsWithReplacement { pool: pool, idx: vec![0; r], started: false, done }
}

#[derive(Clone,Debug)]
pub struct CombinationsWithReplacement<T> {
  pool:    Vec<T>,
  idx:     Vec<usize>,
  started: bool,
  done:    bool
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
  type Item = Vec<T>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.done { return None }
    if !self.started {
      self.started = true;
      return Some(pick(&self.pool, &self.idx))
    }

    let n = self.pool.len();
    let Some(i) = self.idx.iter().rposition(|&x| x + 1 != n) else {
      self.done = true;
      return None
    };
    let v = self.idx[i] + 1;
    self.idx[i ..].fill(v);
    Some(pick(&self.pool, &self.idx))
  }
}


// -----------------------------------------------------------------------------

/// Successive `r`-length orderings of the elements of `seq`.
/// `r = None` means full-length permutations.
/// Produces `n!/(n-r)!` results, none if `r > n`.
pub fn permutations<I: IntoIterator>
  (seq: I, r: Option<usize>) -> Permutations<I::Item> {
  let pool: Vec<I::Item> = seq.into_iter().collect();
  let n = pool.len();
  let r = r.unwrap_or(n);
  Permutations
    { pool:    pool
    , idx:     (0 .. n).collect()
    , cycles:  (0 .. r.min(n)).map(|i| n - i).collect()
    , r:       r
    , started: false
    , done:    r > n
    }
}

/// Walks permutations with a "cycles" counter per output position.
/// `cycles[i]` counts how many more candidates position `i` will take
/// before the suffix from `i` is rotated back to where it started.
#[derive(Clone,Debug)]
pub struct Permutations<T> {
  pool:    Vec<T>,
  idx:     Vec<usize>,
  cycles:  Vec<usize>,
  r:       usize,
  started: bool,
  done:    bool
}

impl<T: Clone> Iterator for Permutations<T> {
  type Item = Vec<T>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.done { return None }
    if !self.started {
      self.started = true;
      return Some(pick(&self.pool, &self.idx[.. self.r]))
    }

    let n = self.pool.len();
    for i in (0 .. self.r).rev() {
      self.cycles[i] -= 1;
      if self.cycles[i] == 0 {
        self.idx[i ..].rotate_left(1);
        self.cycles[i] = n - i;
      } else {
        let j = self.cycles[i];
        self.idx.swap(i, n - j);
        return Some(pick(&self.pool, &self.idx[.. self.r]))
      }
    }

    trace!(n, r = self.r, "permutations: exhausted");
    self.done = true;
    None
  }
}
