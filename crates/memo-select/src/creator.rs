//! Selector creators.
//!
//! A [`SelectorCreator`] pairs a memoization strategy with its options and
//! builds selectors from a dependency list and a result function. The
//! default creator uses [`DefaultMemoize`] with [`Identity`] comparison.

use std::cell::Cell;
use std::rc::Rc;

use memo_core::{
    BoxedFn, DefaultMemoize, Identity, MemoizeStrategy, MemoizedFn, ShallowEq, default_memoize,
};
use tracing::debug;

use crate::combine::Combiner;
use crate::dependencies::{Dependencies, IntoDependencies};
use crate::error::Result;
use crate::selector::Selector;

/// The parameter list a dependency list produces for arguments `A`.
pub type ParamsOf<I, A> = <<I as IntoDependencies<A>>::Dependencies as Dependencies<A>>::Params;

/// Builds selectors with a fixed memoization strategy for the result function.
#[derive(Debug, Clone, Default)]
pub struct SelectorCreator<M = DefaultMemoize, O = Identity> {
    strategy: M,
    options: O,
    label: Option<String>,
}

/// A creator whose result functions are memoized by `strategy`, configured
/// with `options`.
///
/// For [`DefaultMemoize`] the options are the comparator, so
/// `create_selector_creator(DefaultMemoize, DeepEqual)` builds selectors that
/// treat structurally equal parameters as unchanged.
pub fn create_selector_creator<M, O>(strategy: M, options: O) -> SelectorCreator<M, O> {
    SelectorCreator::new(strategy, options)
}

/// Builds a selector with the default creator.
///
/// ```
/// use std::rc::Rc;
/// use memo_select::create_selector;
///
/// struct State {
///     a: i32,
///     b: i32,
/// }
///
/// let sum = create_selector(
///     (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
///     |a: &i32, b: &i32| a + b,
/// )
/// .unwrap();
///
/// assert_eq!(sum.call(Rc::new(State { a: 1, b: 2 })), 3);
/// assert_eq!(sum.call(Rc::new(State { a: 1, b: 2 })), 3);
/// assert_eq!(sum.recomputations(), 1);
/// ```
pub fn create_selector<A, I, F, R>(dependencies: I, result_func: F) -> Result<Selector<A, R, F>>
where
    A: ShallowEq<Identity> + 'static,
    I: IntoDependencies<A>,
    I::Dependencies: 'static,
    ParamsOf<I, A>: ShallowEq<Identity> + 'static,
    F: Combiner<ParamsOf<I, A>, Output = R> + 'static,
    R: Clone + 'static,
{
    SelectorCreator::<DefaultMemoize, Identity>::default().create(dependencies, result_func)
}

impl<M, O> SelectorCreator<M, O> {
    pub fn new(strategy: M, options: O) -> Self {
        Self {
            strategy,
            options,
            label: None,
        }
    }

    /// Label given to every selector this creator builds.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn strategy(&self) -> &M {
        &self.strategy
    }

    pub fn options(&self) -> &O {
        &self.options
    }

    /// Builds a selector from `dependencies` and `result_func`.
    ///
    /// Fails only when a runtime-assembled dependency list contains
    /// something other than a function.
    pub fn create<A, I, F, R>(&self, dependencies: I, result_func: F) -> Result<Selector<A, R, F>>
    where
        A: ShallowEq<Identity> + 'static,
        I: IntoDependencies<A>,
        I::Dependencies: 'static,
        ParamsOf<I, A>: 'static,
        F: Combiner<ParamsOf<I, A>, Output = R> + 'static,
        R: Clone + 'static,
        M: MemoizeStrategy<ParamsOf<I, A>, R, O>,
        M::Wrapped: 'static,
    {
        let dependencies = dependencies.into_dependencies()?;
        let dependency_count = dependencies.arity();

        let recomputations = Rc::new(Cell::new(0));
        let result_func = Rc::new(result_func);

        let counted: BoxedFn<ParamsOf<I, A>, R> = {
            let recomputations = Rc::clone(&recomputations);
            let result_func = Rc::clone(&result_func);
            Box::new(move |params: &ParamsOf<I, A>| {
                recomputations.set(recomputations.get() + 1);
                Combiner::combine(&*result_func, params)
            })
        };
        let inner = Rc::new(self.strategy.memoize(counted, &self.options));

        let clear_inner: Box<dyn Fn()> = {
            let inner = Rc::clone(&inner);
            Box::new(move || inner.clear())
        };
        let outer: BoxedFn<A, R> =
            Box::new(move |args: &A| inner.call(dependencies.collect(args)));

        debug!(
            dependencies = dependency_count,
            label = self.label.as_deref().unwrap_or("selector"),
            "created selector"
        );

        Ok(Selector {
            outer: default_memoize(outer),
            result_func,
            recomputations,
            clear_inner,
            dependency_count,
            label: self.label.clone(),
        })
    }
}
