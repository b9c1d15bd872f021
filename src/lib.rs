pub mod error;
pub mod truth;
pub mod count;
pub mod sources;
pub mod transform;
pub mod fold;
pub mod combinatorics;
pub mod group;
pub mod sieve;
pub mod ops;

#[cfg(test)]
pub mod proptest;

pub use crate::error::{SeqError,SeqResult};
pub use crate::truth::{Truthy,is_true};
pub use crate::count::{Count,count,enumerate};
pub use crate::sources::{cycle,repeat,chain,tee,firstn,islice,zip};
pub use crate::transform::{map,filter,filterfalse,compress,takewhile,dropwhile,accumulate};
pub use crate::fold::{foldl,reduce,all,any,sorted,sorted_by_key};
pub use crate::combinatorics::{combinations,combinations_with_replacement,permutations};
pub use crate::group::{Group,groupby,groupby_key};
pub use crate::sieve::{sieve,fib,take,remove_multiples};
