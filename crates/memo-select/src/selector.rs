//! The selector value returned by selector creators.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use memo_core::{BoxedFn, Identity, Memoized, ShallowEq};
use tracing::trace;

use crate::input::Select;

/// A memoized derived-value computation.
///
/// Calling a selector runs through two caches. The outer one compares the
/// whole argument list by identity and skips dependency extraction when the
/// caller repeats itself. The inner one, built by the creator's strategy,
/// compares the extracted parameters and skips the result function when they
/// did not change.
///
/// Every hit clones the cached result, so results that feed other selectors
/// are best returned as `Rc` values, which clone cheaply and compare by
/// pointer under [`Identity`].
///
/// Selectors hold their caches in `RefCell`/`Cell` and are not `Sync`; use one
/// instance per thread.
pub struct Selector<A, R, F> {
    pub(crate) outer: Memoized<A, R, BoxedFn<A, R>>,
    pub(crate) result_func: Rc<F>,
    pub(crate) recomputations: Rc<Cell<usize>>,
    pub(crate) clear_inner: Box<dyn Fn()>,
    pub(crate) dependency_count: usize,
    pub(crate) label: Option<String>,
}

impl<A, R, F> Selector<A, R, F>
where
    A: ShallowEq<Identity>,
    R: Clone,
{
    /// Evaluates the selector for `args`.
    pub fn call(&self, args: A) -> R {
        let before = self.recomputations.get();
        let result = self.outer.call(args);
        let after = self.recomputations.get();
        if after != before {
            trace!(
                label = self.label.as_deref().unwrap_or("selector"),
                recomputations = after,
                "selector recomputed"
            );
        }
        result
    }

    /// Evaluates the selector for a borrowed argument list, cloning it into
    /// the cache.
    pub fn select(&self, args: &A) -> R
    where
        A: Clone,
    {
        self.call(args.clone())
    }
}

impl<A, R, F> Selector<A, R, F> {
    /// The result function the selector was built from.
    pub fn result_func(&self) -> &F {
        &self.result_func
    }

    /// How many times the result function actually ran since creation or
    /// the last [`reset_recomputations`](Self::reset_recomputations).
    pub fn recomputations(&self) -> usize {
        self.recomputations.get()
    }

    pub fn reset_recomputations(&self) {
        self.recomputations.set(0);
    }

    /// The most recent result, without evaluating anything.
    pub fn last_result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.outer.last_result()
    }

    /// Empties both caches. The recomputation counter is left alone.
    pub fn clear_cache(&self) {
        self.outer.clear();
        (self.clear_inner)();
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Names the selector in log output.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl<A, R, F> Select<A> for Selector<A, R, F>
where
    A: ShallowEq<Identity> + Clone,
    R: Clone,
{
    type Output = R;

    fn select(&self, args: &A) -> R {
        Selector::select(self, args)
    }
}

impl<A, R, F> fmt::Debug for Selector<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("label", &self.label)
            .field("dependencies", &self.dependency_count)
            .field("recomputations", &self.recomputations.get())
            .finish_non_exhaustive()
    }
}
