use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
  /// The operation needs at least one element to do anything useful.
  #[error("{op}: input sequence is empty")]
  EmptyInput { op: &'static str },

  /// A step of 0 would never advance through the input.
  #[error("{op}: step must be greater than 0")]
  ZeroStep { op: &'static str },
}

pub type SeqResult<T> = Result<T, SeqError>;
