use std::ops::Add;
use tracing::trace;

/// An infinite arithmetic sequence that also accepts injected values.
///
/// Each pull returns the current value; `step` is only added when the
/// following value is pulled. A caller may override the value produced by
/// the next pull, after which counting resumes from the injected value.
#[derive(Clone,Debug)]
pub struct Count<T> {
  current: T,
  step:    T,
  started: bool   // `current` has been produced already
}

/// Count up from `start` in increments of `step`.
pub fn count<T>(start: T, step: T) -> Count<T>
  where T: Clone + Add<Output=T> {
  Count { current: start, step: step, started: false }
}

impl<T: Clone + Add<Output=T>> Count<T> {

  /// The value the next pull will produce.
  pub fn peek(&self) -> T {
    if self.started { self.current.clone() + self.step.clone() }
    else { self.current.clone() }
  }

  /// The amount added between pulls.
  pub fn step(&self) -> &T { &self.step }

  /// Override the value produced by the next pull.
  pub fn set_next(&mut self, value: T) {
    trace!("count: next value overridden");
    self.current = value;
    self.started = false
  }

  /// Inject `value` and pull it immediately.
  /// Subsequent pulls continue from `value + step`.
  pub fn send(&mut self, value: T) -> T {
    self.set_next(value);
    self.advance()
  }

  fn advance(&mut self) -> T {
    if self.started {
      self.current = self.current.clone() + self.step.clone()
    }
    self.started = true;
    self.current.clone()
  }
}

/// Counts 2, 3, 4, ...
impl<T: Clone + Add<Output=T> + num::One> Default for Count<T> {
  fn default() -> Self {
    count(T::one() + T::one(), T::one())
  }
}

impl<T: Clone + Add<Output=T>> Iterator for Count<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    Some(self.advance())
  }

  fn size_hint(&self) -> (usize, Option<usize>) { (usize::MAX, None) }
}


// -----------------------------------------------------------------------------

/// Pairs every element of `seq` with its position, counting from `start`.
pub fn enumerate<T, I>(seq: I, start: T) -> Enumerate<T, I::IntoIter>
  where
  T: Clone + Add<Output=T> + num::One,
  I: IntoIterator
{
  Enumerate { index: count(start, T::one()), seq: seq.into_iter() }
}

#[derive(Clone,Debug)]
pub struct Enumerate<T, I> {
  index: Count<T>,
  seq:   I
}

impl<T, I> Iterator for Enumerate<T, I>
  where
  T: Clone + Add<Output=T>,
  I: Iterator
{
  type Item = (T, I::Item);
  fn next(&mut self) -> Option<Self::Item> {
    let x = self.seq.next()?;
    Some((self.index.advance(), x))
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.seq.size_hint() }
}
