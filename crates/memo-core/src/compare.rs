//! Per-element equality predicates.
//!
//! A [`Comparator`] decides whether two values at the same position of two
//! argument lists are "the same" for caching purposes. The default,
//! [`Identity`], answers the cheapest question possible: plain values compare
//! by value, shared allocations (`Rc`, `Arc`) and references compare by
//! address. [`DeepEqual`] falls back to `PartialEq`, and any
//! `Fn(&T, &T) -> bool` closure can be used directly.

use std::rc::Rc;
use std::sync::Arc;

/// Identity equality for a single value.
///
/// Value types (integers, floats, `bool`, `char`, strings, `()`) are
/// identical when they are equal. `Rc`, `Arc` and `&T` are identical only
/// when they point at the same allocation, regardless of contents.
pub trait Identical {
    fn identical(&self, other: &Self) -> bool;
}

macro_rules! identical_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identical for $ty {
                #[inline]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identical_by_value!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T: ?Sized> Identical for Rc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for Arc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identical for &T {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: Identical> Identical for Option<T> {
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(prev), Some(next)) => prev.identical(next),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Equality predicate applied to one position of an argument list.
pub trait Comparator<T: ?Sized> {
    fn equals(&self, prev: &T, next: &T) -> bool;
}

/// The default comparator: [`Identical`] semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T: Identical + ?Sized> Comparator<T> for Identity {
    #[inline]
    fn equals(&self, prev: &T, next: &T) -> bool {
        prev.identical(next)
    }
}

/// Structural comparison through `PartialEq`.
///
/// Two distinct `Rc<Vec<i32>>` holding the same items are equal here, while
/// [`Identity`] would treat them as different.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepEqual;

impl<T: PartialEq + ?Sized> Comparator<T> for DeepEqual {
    #[inline]
    fn equals(&self, prev: &T, next: &T) -> bool {
        prev == next
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, prev: &T, next: &T) -> bool {
        self(prev, next)
    }
}
