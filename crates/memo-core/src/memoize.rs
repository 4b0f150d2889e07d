//! Single-slot memoization.
//!
//! A [`Memoized`] function remembers exactly one call: the most recent
//! argument list and the result computed for it. A call whose arguments are
//! shallowly equal to the remembered ones returns the cached result; any other
//! call recomputes and replaces the slot. There is no history and no eviction
//! policy beyond "the next different call wins".
//!
//! The slot lives in a `RefCell`, so a memoized function is `!Sync` and is
//! meant to be driven from one thread. The slot is not borrowed while the
//! wrapped function runs, which lets it call other memoized functions.

use std::cell::RefCell;
use std::fmt;

use tracing::trace;

use crate::args::{ShallowEq, shallow_equal};
use crate::compare::Identity;

/// A boxed function from an argument list to a result.
pub type BoxedFn<P, R> = Box<dyn Fn(&P) -> R>;

/// The remembered call.
struct Slot<P, R> {
    args: P,
    result: R,
}

/// A function wrapped with a single-entry cache.
pub struct Memoized<P, R, F, C = Identity> {
    func: F,
    comparator: C,
    slot: RefCell<Option<Slot<P, R>>>,
}

impl<P, R, F, C> Memoized<P, R, F, C>
where
    F: Fn(&P) -> R,
    P: ShallowEq<C>,
    R: Clone,
{
    /// Wraps `func`, comparing argument positions with `comparator`.
    pub fn new(func: F, comparator: C) -> Self {
        Self {
            func,
            comparator,
            slot: RefCell::new(None),
        }
    }

    /// Returns the cached result when `args` matches the previous call,
    /// otherwise runs the wrapped function and caches its result.
    ///
    /// The remembered arguments are replaced by `args` on every call, hit or
    /// miss.
    pub fn call(&self, args: P) -> R {
        {
            let mut slot = self.slot.borrow_mut();
            if let Some(cached) = slot.as_mut()
                && shallow_equal(&self.comparator, Some(&cached.args), Some(&args))
            {
                trace!(arity = args.arity(), hit = true, "memoized call");
                cached.args = args;
                return cached.result.clone();
            }
        }

        trace!(arity = args.arity(), hit = false, "memoized call");
        let result = (self.func)(&args);
        self.slot.replace(Some(Slot {
            args,
            result: result.clone(),
        }));
        result
    }
}

impl<P, R, F, C> Memoized<P, R, F, C> {
    /// Forgets the remembered call; the next call always recomputes.
    pub fn clear(&self) {
        self.slot.replace(None);
    }

    /// The cached result, if any call has been made since creation or the
    /// last [`clear`](Self::clear).
    pub fn last_result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.slot
            .borrow()
            .as_ref()
            .map(|cached| cached.result.clone())
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The wrapped function.
    pub fn func(&self) -> &F {
        &self.func
    }
}

impl<P, R, F, C: fmt::Debug> fmt::Debug for Memoized<P, R, F, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.slot.try_borrow().map(|slot| slot.is_some()).ok();
        f.debug_struct("Memoized")
            .field("comparator", &self.comparator)
            .field("cached", &cached)
            .finish_non_exhaustive()
    }
}

/// A memoized function as seen by selector composition.
///
/// [`Memoized`] is the stock implementation; custom strategies supply their
/// own.
pub trait MemoizedFn<P> {
    type Output;

    fn call(&self, args: P) -> Self::Output;

    /// Drops any cached state. The default does nothing.
    fn clear(&self) {}
}

impl<P, R, F, C> MemoizedFn<P> for Memoized<P, R, F, C>
where
    F: Fn(&P) -> R,
    P: ShallowEq<C>,
    R: Clone,
{
    type Output = R;

    fn call(&self, args: P) -> R {
        Memoized::call(self, args)
    }

    fn clear(&self) {
        Memoized::clear(self);
    }
}

/// A way of wrapping a function in a cache, configured by options `O`.
///
/// Selector creators hand the result function to a strategy together with
/// the options they were built with.
pub trait MemoizeStrategy<P, R, O> {
    type Wrapped: MemoizedFn<P, Output = R>;

    fn memoize(&self, func: BoxedFn<P, R>, options: &O) -> Self::Wrapped;
}

/// The single-slot strategy; its options are the comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMemoize;

impl<P, R, C> MemoizeStrategy<P, R, C> for DefaultMemoize
where
    P: ShallowEq<C>,
    R: Clone,
    C: Clone,
{
    type Wrapped = Memoized<P, R, BoxedFn<P, R>, C>;

    fn memoize(&self, func: BoxedFn<P, R>, options: &C) -> Self::Wrapped {
        Memoized::new(func, options.clone())
    }
}

/// Memoizes `func` with [`Identity`] comparison.
///
/// ```
/// use std::cell::Cell;
/// use memo_core::default_memoize;
///
/// let calls = Cell::new(0);
/// let add = default_memoize(|(a, b): &(i32, i32)| {
///     calls.set(calls.get() + 1);
///     a + b
/// });
///
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(add.call((1, 2)), 3);
/// assert_eq!(calls.get(), 1);
/// ```
pub fn default_memoize<P, R, F>(func: F) -> Memoized<P, R, F>
where
    F: Fn(&P) -> R,
    P: ShallowEq<Identity>,
    R: Clone,
{
    Memoized::new(func, Identity)
}

/// Memoizes `func` with a custom per-position comparator.
pub fn default_memoize_with<P, R, F, C>(func: F, comparator: C) -> Memoized<P, R, F, C>
where
    F: Fn(&P) -> R,
    P: ShallowEq<C>,
    R: Clone,
{
    Memoized::new(func, comparator)
}
