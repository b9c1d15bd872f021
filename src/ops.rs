//! Binary and unary operators as plain functions, for passing to folds.

use std::ops::{Add,Sub,Mul};

pub fn add<T: Add<Output=T>>(a: T, b: T) -> T { a + b }

pub fn sub<T: Sub<Output=T>>(a: T, b: T) -> T { a - b }

pub fn mul<T: Mul<Output=T>>(a: T, b: T) -> T { a * b }

/// Division rounding towards negative infinity.
pub fn floordiv<T: num::Integer>(a: T, b: T) -> T { a.div_floor(&b) }

/// Division rounding towards positive infinity.
pub fn ceildiv<T: num::Integer + num::Signed>(a: T, b: T) -> T {
  -((-a).div_floor(&b))
}

pub fn abs<T: num::Signed>(a: T) -> T { a.abs() }
