//! Single-slot memoization with pluggable shallow equality.
//!
//! This crate provides the caching engine that selectors are built on:
//!
//! - [`Comparator`] predicates deciding whether two values are "the same",
//!   with [`Identity`] (value for plain data, address for `Rc`/`Arc`/`&T`) as
//!   the default and [`DeepEqual`] as the `PartialEq` alternative
//! - [`ArgumentList`] / [`ShallowEq`] for tuples, vectors, arrays and shared
//!   state, and the [`shallow_equal`] check over them
//! - [`Memoized`], a function wrapper that remembers its most recent call
//! - [`MemoizeStrategy`], the seam through which selector creators accept
//!   alternative caches
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use memo_core::{DeepEqual, default_memoize, default_memoize_with};
//!
//! let total = default_memoize(|items: &Rc<Vec<u32>>| items.iter().sum::<u32>());
//! let items = Rc::new(vec![1, 2, 3]);
//! assert_eq!(total.call(Rc::clone(&items)), 6);
//!
//! // Structural comparison treats a rebuilt vector with the same items as a hit.
//! let total = default_memoize_with(|items: &Rc<Vec<u32>>| items.iter().sum::<u32>(), DeepEqual);
//! assert_eq!(total.call(Rc::new(vec![1, 2, 3])), 6);
//! assert_eq!(total.call(Rc::new(vec![1, 2, 3])), 6);
//! ```

pub mod args;
pub mod compare;
pub mod memoize;

pub use args::{ArgumentList, ShallowEq, shallow_equal};
pub use compare::{Comparator, DeepEqual, Identical, Identity};
pub use memoize::{
    BoxedFn, DefaultMemoize, MemoizeStrategy, Memoized, MemoizedFn, default_memoize,
    default_memoize_with,
};
