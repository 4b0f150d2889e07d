//! Argument lists and shallow equality.
//!
//! An argument list is an ordered, fixed-length sequence of values. Tuples are
//! heterogeneous lists of their arity, `Vec<T>`, slices and arrays are
//! homogeneous lists of their length, and a bare `Rc<T>` or `Arc<T>` is a list
//! of one (the usual "whole state" argument).

use std::rc::Rc;
use std::sync::Arc;

use crate::compare::Comparator;

/// An ordered sequence of values with a fixed arity.
pub trait ArgumentList {
    fn arity(&self) -> usize;
}

/// Position-by-position comparison of two argument lists.
pub trait ShallowEq<C>: ArgumentList {
    /// Compares positions left to right and stops at the first pair the
    /// comparator rejects. Callers check arity first.
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool;
}

/// Shallow equality of two argument lists under `comparator`.
///
/// A missing list (`None`) means "no previous call" and is never equal to
/// anything, including another missing list. Lists of different arity are
/// unequal without consulting the comparator.
pub fn shallow_equal<L, C>(comparator: &C, prev: Option<&L>, next: Option<&L>) -> bool
where
    L: ShallowEq<C> + ?Sized,
{
    let (Some(prev), Some(next)) = (prev, next) else {
        return false;
    };
    if prev.arity() != next.arity() {
        return false;
    }
    prev.positions_equal(next, comparator)
}

impl<T> ArgumentList for [T] {
    fn arity(&self) -> usize {
        self.len()
    }
}

impl<T, C: Comparator<T>> ShallowEq<C> for [T] {
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool {
        self.iter()
            .zip(other)
            .all(|(prev, next)| comparator.equals(prev, next))
    }
}

impl<T> ArgumentList for Vec<T> {
    fn arity(&self) -> usize {
        self.len()
    }
}

impl<T, C: Comparator<T>> ShallowEq<C> for Vec<T> {
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool {
        self.as_slice().positions_equal(other.as_slice(), comparator)
    }
}

impl<T, const N: usize> ArgumentList for [T; N] {
    fn arity(&self) -> usize {
        N
    }
}

impl<T, C: Comparator<T>, const N: usize> ShallowEq<C> for [T; N] {
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool {
        self.as_slice().positions_equal(other.as_slice(), comparator)
    }
}

impl<T: ?Sized> ArgumentList for Rc<T> {
    fn arity(&self) -> usize {
        1
    }
}

impl<T: ?Sized, C: Comparator<Rc<T>>> ShallowEq<C> for Rc<T> {
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool {
        comparator.equals(self, other)
    }
}

impl<T: ?Sized> ArgumentList for Arc<T> {
    fn arity(&self) -> usize {
        1
    }
}

impl<T: ?Sized, C: Comparator<Arc<T>>> ShallowEq<C> for Arc<T> {
    fn positions_equal(&self, other: &Self, comparator: &C) -> bool {
        comparator.equals(self, other)
    }
}

macro_rules! tuple_argument_list {
    ($len:expr; $($idx:tt $name:ident),*) => {
        impl<$($name),*> ArgumentList for ($($name,)*) {
            #[inline]
            fn arity(&self) -> usize {
                $len
            }
        }

        impl<Cmp, $($name),*> ShallowEq<Cmp> for ($($name,)*)
        where
            $(Cmp: Comparator<$name>,)*
        {
            #[allow(unused_variables)]
            fn positions_equal(&self, other: &Self, comparator: &Cmp) -> bool {
                true $(&& comparator.equals(&self.$idx, &other.$idx))*
            }
        }
    };
}

tuple_argument_list!(0;);
tuple_argument_list!(1; 0 A);
tuple_argument_list!(2; 0 A, 1 B);
tuple_argument_list!(3; 0 A, 1 B, 2 C);
tuple_argument_list!(4; 0 A, 1 B, 2 C, 3 D);
tuple_argument_list!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
tuple_argument_list!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
tuple_argument_list!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
tuple_argument_list!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
