//! Dependency lists and their extraction.
//!
//! Dependencies come in two calling conventions:
//!
//! - a tuple of input selectors, `(by_id, by_filter)`: heterogeneous outputs,
//!   checked entirely by the compiler, producing a tuple of parameters
//! - a `Vec` (or array) of [`InputSelector`] entries: homogeneous outputs,
//!   assembled at runtime, validated once when the selector is created and
//!   producing a `Vec` of parameters
//!
//! [`IntoDependencies`] is the only place that knows about the two shapes;
//! everything downstream works against [`Dependencies`].

use tracing::debug;

use crate::error::{Result, SelectorError};
use crate::input::{InputSelector, Select, SharedSelect};

/// A normalized, ordered dependency list.
pub trait Dependencies<A> {
    /// The flat parameter list handed to the result function.
    type Params;

    fn arity(&self) -> usize;

    /// Runs every dependency against `args`, in order.
    fn collect(&self, args: &A) -> Self::Params;
}

/// Conversion of a caller-supplied dependency list into [`Dependencies`].
pub trait IntoDependencies<A> {
    type Dependencies: Dependencies<A>;

    fn into_dependencies(self) -> Result<Self::Dependencies>;
}

/// A validated list of type-erased input selectors.
pub struct DependencyList<A, D> {
    selectors: Vec<SharedSelect<A, D>>,
}

impl<A, D> Dependencies<A> for DependencyList<A, D> {
    type Params = Vec<D>;

    fn arity(&self) -> usize {
        self.selectors.len()
    }

    fn collect(&self, args: &A) -> Vec<D> {
        self.selectors
            .iter()
            .map(|selector| selector.select(args))
            .collect()
    }
}

impl<A, D> IntoDependencies<A> for Vec<InputSelector<A, D>> {
    type Dependencies = DependencyList<A, D>;

    fn into_dependencies(self) -> Result<DependencyList<A, D>> {
        if !self.iter().all(InputSelector::is_function) {
            let kinds: Vec<String> = self.iter().map(InputSelector::kind).collect();
            debug!(kinds = ?kinds, "rejected dependency list");
            return Err(SelectorError::InvalidDependencies { kinds });
        }
        let selectors = self
            .into_iter()
            .filter_map(InputSelector::into_function)
            .collect();
        Ok(DependencyList { selectors })
    }
}

impl<A, D, const N: usize> IntoDependencies<A> for [InputSelector<A, D>; N] {
    type Dependencies = DependencyList<A, D>;

    fn into_dependencies(self) -> Result<DependencyList<A, D>> {
        Vec::from(self).into_dependencies()
    }
}

macro_rules! tuple_dependencies {
    ($len:expr; $($idx:tt $name:ident),*) => {
        impl<Args, $($name),*> Dependencies<Args> for ($($name,)*)
        where
            $($name: Select<Args>,)*
        {
            type Params = ($(<$name as Select<Args>>::Output,)*);

            #[inline]
            fn arity(&self) -> usize {
                $len
            }

            #[allow(unused_variables)]
            fn collect(&self, args: &Args) -> Self::Params {
                ($(self.$idx.select(args),)*)
            }
        }

        impl<Args, $($name),*> IntoDependencies<Args> for ($($name,)*)
        where
            $($name: Select<Args>,)*
        {
            type Dependencies = Self;

            #[inline]
            fn into_dependencies(self) -> Result<Self> {
                Ok(self)
            }
        }
    };
}

tuple_dependencies!(0;);
tuple_dependencies!(1; 0 S0);
tuple_dependencies!(2; 0 S0, 1 S1);
tuple_dependencies!(3; 0 S0, 1 S1, 2 S2);
tuple_dependencies!(4; 0 S0, 1 S1, 2 S2, 3 S3);
tuple_dependencies!(5; 0 S0, 1 S1, 2 S2, 3 S3, 4 S4);
tuple_dependencies!(6; 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5);
tuple_dependencies!(7; 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6);
tuple_dependencies!(8; 0 S0, 1 S1, 2 S2, 3 S3, 4 S4, 5 S5, 6 S6, 7 S7);
