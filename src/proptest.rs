use proptest::prelude::*;
use proptest::test_runner::*;

/// Run `p` on inputs drawn from `strategy`.
/// `p` returns `None` to reject an input, `Some(ok)` otherwise.
pub fn do_test<S: Strategy>(strategy: S, p: fn(S::Value) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&strategy, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

/// Short vectors of small integers, duplicates likely.
pub fn small_vec() -> impl Strategy<Value=Vec<i32>> {
  proptest::collection::vec(-20_i32 .. 20, 0 .. 30)
}
