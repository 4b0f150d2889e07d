//! Result functions.
//!
//! A result function receives the parameter list produced by the
//! dependencies. For tuple dependencies it takes one reference per
//! dependency, `|todos: &Rc<Vec<Todo>>, filter: &Filter| ...`; for list
//! dependencies it takes the whole slice, `|values: &[u32]| ...`.

/// Combines a parameter list into the selector's result.
pub trait Combiner<P> {
    type Output;

    fn combine(&self, params: &P) -> Self::Output;
}

impl<Func, D, R> Combiner<Vec<D>> for Func
where
    Func: Fn(&[D]) -> R,
{
    type Output = R;

    #[inline]
    fn combine(&self, params: &Vec<D>) -> R {
        self(params.as_slice())
    }
}

macro_rules! tuple_combiner {
    ($($idx:tt $name:ident),*) => {
        impl<Func, R, $($name),*> Combiner<($($name,)*)> for Func
        where
            Func: Fn($(&$name),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(unused_variables)]
            fn combine(&self, params: &($($name,)*)) -> R {
                self($(&params.$idx),*)
            }
        }
    };
}

tuple_combiner!();
tuple_combiner!(0 D0);
tuple_combiner!(0 D0, 1 D1);
tuple_combiner!(0 D0, 1 D1, 2 D2);
tuple_combiner!(0 D0, 1 D1, 2 D2, 3 D3);
tuple_combiner!(0 D0, 1 D1, 2 D2, 3 D3, 4 D4);
tuple_combiner!(0 D0, 1 D1, 2 D2, 3 D3, 4 D4, 5 D5);
tuple_combiner!(0 D0, 1 D1, 2 D2, 3 D3, 4 D4, 5 D5, 6 D6);
tuple_combiner!(0 D0, 1 D1, 2 D2, 3 D3, 4 D4, 5 D5, 6 D6, 7 D7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_spread_into_arguments() {
        let join = |a: &i32, b: &String| format!("{a}{b}");
        assert_eq!(join.combine(&(1, "x".to_string())), "1x");

        let constant = || 42;
        assert_eq!(constant.combine(&()), 42);
    }

    #[test]
    fn lists_arrive_as_slices() {
        let sum = |values: &[u32]| values.iter().sum::<u32>();
        assert_eq!(sum.combine(&vec![1, 2, 3]), 6);
    }
}
