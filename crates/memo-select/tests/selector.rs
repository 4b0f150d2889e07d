//! Integration tests for composed selectors.

use std::cell::Cell;
use std::rc::Rc;

use memo_select::{
    DeepEqual, DefaultMemoize, InputSelector, MemoizeStrategy, MemoizedFn, SelectorError,
    create_selector, create_selector_creator,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: &'static str,
    price: u32,
}

struct State {
    a: i32,
    b: i32,
    items: Rc<Vec<Item>>,
    tax_percent: u32,
}

fn state(a: i32, b: i32) -> Rc<State> {
    Rc::new(State {
        a,
        b,
        items: Rc::new(Vec::new()),
        tax_percent: 0,
    })
}

fn shop(items: Rc<Vec<Item>>, tax_percent: u32) -> Rc<State> {
    Rc::new(State {
        a: 0,
        b: 0,
        items,
        tax_percent,
    })
}

#[test]
fn sums_two_fields() {
    let sum = create_selector(
        (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
        |a: &i32, b: &i32| a + b,
    )
    .expect("tuple dependencies always build");

    assert_eq!(sum.call(state(1, 2)), 3);
    assert_eq!(sum.recomputations(), 1);

    // A new state object with the same fields does not recompute.
    assert_eq!(sum.call(state(1, 2)), 3);
    assert_eq!(sum.recomputations(), 1);

    assert_eq!(sum.call(state(1, 3)), 4);
    assert_eq!(sum.recomputations(), 2);
}

#[test]
fn identical_arguments_skip_dependencies() {
    let reads = Rc::new(Cell::new(0));
    let counter = Rc::clone(&reads);
    let doubled = create_selector(
        (move |s: &Rc<State>| {
            counter.set(counter.get() + 1);
            s.a
        },),
        |a: &i32| a * 2,
    )
    .expect("selector");

    let shared = state(4, 0);
    for _ in 0..5 {
        assert_eq!(doubled.call(Rc::clone(&shared)), 8);
    }
    assert_eq!(reads.get(), 1);
    assert_eq!(doubled.recomputations(), 1);
}

#[test]
fn reset_recomputations_zeroes_the_counter() {
    let sum = create_selector(
        (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
        |a: &i32, b: &i32| a + b,
    )
    .expect("selector");

    sum.call(state(1, 1));
    sum.call(state(1, 2));
    assert_eq!(sum.recomputations(), 2);

    sum.reset_recomputations();
    assert_eq!(sum.recomputations(), 0);

    sum.call(state(1, 2));
    assert_eq!(sum.recomputations(), 0);

    sum.call(state(5, 2));
    assert_eq!(sum.recomputations(), 1);
}

#[test]
fn extra_arguments_take_part_in_caching() {
    let priced = create_selector(
        (
            |(s, _): &(Rc<State>, u32)| Rc::clone(&s.items),
            |(_, min_price): &(Rc<State>, u32)| *min_price,
        ),
        |items: &Rc<Vec<Item>>, min_price: &u32| {
            items
                .iter()
                .filter(|item| item.price >= *min_price)
                .map(|item| item.name)
                .collect::<Vec<_>>()
        },
    )
    .expect("selector");

    let items = Rc::new(vec![
        Item {
            name: "pen",
            price: 2,
        },
        Item {
            name: "lamp",
            price: 40,
        },
    ]);
    let s = shop(Rc::clone(&items), 0);

    assert_eq!(priced.call((Rc::clone(&s), 10)), vec!["lamp"]);
    assert_eq!(priced.call((Rc::clone(&s), 10)), vec!["lamp"]);
    assert_eq!(priced.call((Rc::clone(&s), 1)), vec!["pen", "lamp"]);
    assert_eq!(priced.recomputations(), 2);
}

#[test]
fn selectors_feed_other_selectors() {
    let subtotal = create_selector(
        (|s: &Rc<State>| Rc::clone(&s.items),),
        |items: &Rc<Vec<Item>>| items.iter().map(|item| item.price).sum::<u32>(),
    )
    .expect("subtotal");
    let subtotal = Rc::new(subtotal);

    let total = create_selector(
        (
            {
                let subtotal = Rc::clone(&subtotal);
                move |s: &Rc<State>| subtotal.select(s)
            },
            |s: &Rc<State>| s.tax_percent,
        ),
        |subtotal: &u32, tax: &u32| subtotal + subtotal * tax / 100,
    )
    .expect("total");

    let items = Rc::new(vec![Item {
        name: "desk",
        price: 200,
    }]);
    assert_eq!(total.call(shop(Rc::clone(&items), 10)), 220);
    assert_eq!(total.call(shop(Rc::clone(&items), 10)), 220);
    assert_eq!(total.call(shop(Rc::clone(&items), 20)), 240);

    assert_eq!(subtotal.recomputations(), 1);
    assert_eq!(total.recomputations(), 2);
}

#[test]
fn selector_values_are_input_selectors() {
    let a = create_selector((|s: &Rc<State>| s.a,), |a: &i32| *a).expect("a");
    let b = create_selector((|s: &Rc<State>| s.b,), |b: &i32| *b).expect("b");

    let product = create_selector((a, b), |a: &i32, b: &i32| a * b).expect("product");
    assert_eq!(product.call(state(3, 4)), 12);
    assert_eq!(product.call(state(3, 4)), 12);
    assert_eq!(product.recomputations(), 1);
}

#[test]
fn deep_equality_creator_reuses_rebuilt_collections() {
    let filtered = |creator_deep: bool| {
        let deps = (|s: &Rc<State>| Rc::new((*s.items).clone()),);
        let names = |items: &Rc<Vec<Item>>| items.iter().map(|item| item.name).collect::<Vec<_>>();
        if creator_deep {
            let creator = create_selector_creator(DefaultMemoize, DeepEqual);
            let selector = creator.create(deps, names).expect("deep selector");
            selector.call(shop(Rc::new(vec![]), 0));
            selector.call(shop(Rc::new(vec![]), 0));
            selector.recomputations()
        } else {
            let selector = create_selector(deps, names).expect("identity selector");
            selector.call(shop(Rc::new(vec![]), 0));
            selector.call(shop(Rc::new(vec![]), 0));
            selector.recomputations()
        }
    };

    assert_eq!(filtered(true), 1);
    assert_eq!(filtered(false), 2);
}

#[test]
fn result_func_is_exposed() {
    let sum = create_selector(
        (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
        |a: &i32, b: &i32| a + b,
    )
    .expect("selector");

    assert_eq!((sum.result_func())(&2, &5), 7);
    assert_eq!(sum.recomputations(), 0);
    assert_eq!(sum.dependency_count(), 2);
}

#[test]
fn list_dependencies_pass_a_slice() {
    let deps = vec![
        InputSelector::from_fn(|s: &Rc<State>| s.a),
        InputSelector::from_fn(|s: &Rc<State>| s.b),
        InputSelector::from_fn(|s: &Rc<State>| s.a * s.b),
    ];
    let sum = create_selector(deps, |values: &[i32]| values.iter().sum::<i32>()).expect("sum");

    assert_eq!(sum.call(state(2, 3)), 11);
    assert_eq!(sum.call(state(2, 3)), 11);
    assert_eq!(sum.recomputations(), 1);
}

#[test]
fn non_function_dependency_is_rejected_before_use() {
    let deps = vec![
        InputSelector::from_fn(|s: &Rc<State>| s.a),
        InputSelector::Constant(7),
        InputSelector::Constant(8),
    ];
    let err = create_selector(deps, |values: &[i32]| values.len()).expect_err("constants rejected");

    assert_eq!(
        err,
        SelectorError::InvalidDependencies {
            kinds: vec!["function".into(), "i32".into(), "i32".into()],
        }
    );
    assert_eq!(
        err.to_string(),
        "selector creators expect all input selectors to be functions, \
         instead received the following types: [function, i32, i32]"
    );
}

#[test]
fn clear_cache_forces_recomputation() {
    let sum = create_selector(
        (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
        |a: &i32, b: &i32| a + b,
    )
    .expect("selector");

    let shared = state(1, 1);
    assert_eq!(sum.last_result(), None);
    sum.call(Rc::clone(&shared));
    assert_eq!(sum.last_result(), Some(2));

    sum.clear_cache();
    assert_eq!(sum.last_result(), None);
    sum.call(Rc::clone(&shared));
    assert_eq!(sum.recomputations(), 2);
}

#[test]
fn zero_dependencies_compute_once() {
    let constant = create_selector((), || 42_u8).expect("selector");
    assert_eq!(constant.call(state(0, 0)), 42);
    assert_eq!(constant.call(state(9, 9)), 42);
    assert_eq!(constant.recomputations(), 1);
}

#[test]
fn result_function_panics_propagate() {
    let picky = create_selector((|s: &Rc<State>| s.a,), |a: &i32| {
        assert!(*a >= 0, "negative input");
        *a
    })
    .expect("selector");

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| picky.call(state(-1, 0))));
    assert!(outcome.is_err());
    assert_eq!(picky.call(state(1, 0)), 1);
}

/// Remembers every parameter list it has seen.
struct Unbounded;

struct History<P, R> {
    func: Box<dyn Fn(&P) -> R>,
    seen: std::cell::RefCell<Vec<(P, R)>>,
}

impl<P: PartialEq + Clone, R: Clone> MemoizedFn<P> for History<P, R> {
    type Output = R;

    fn call(&self, args: P) -> R {
        if let Some((_, result)) = self.seen.borrow().iter().find(|(seen, _)| *seen == args) {
            return result.clone();
        }
        let result = (self.func)(&args);
        self.seen.borrow_mut().push((args, result.clone()));
        result
    }
}

impl<P: PartialEq + Clone, R: Clone> MemoizeStrategy<P, R, ()> for Unbounded {
    type Wrapped = History<P, R>;

    fn memoize(&self, func: Box<dyn Fn(&P) -> R>, _options: &()) -> History<P, R> {
        History {
            func,
            seen: std::cell::RefCell::new(Vec::new()),
        }
    }
}

#[test]
fn custom_strategy_replaces_the_inner_cache() {
    let creator = create_selector_creator(Unbounded, ()).with_label("history");
    let sum = creator
        .create(
            (|s: &Rc<State>| s.a, |s: &Rc<State>| s.b),
            |a: &i32, b: &i32| a + b,
        )
        .expect("selector");

    sum.call(state(1, 1));
    sum.call(state(2, 2));
    sum.call(state(1, 1));
    assert_eq!(sum.recomputations(), 2);
    assert_eq!(sum.label(), Some("history"));
}

#[test]
fn outer_cache_stays_identity_under_a_deep_creator() {
    let creator = create_selector_creator(DefaultMemoize, DeepEqual);
    assert_eq!(*creator.strategy(), DefaultMemoize);
    assert_eq!(*creator.options(), DeepEqual);

    let reads = Rc::new(Cell::new(0));
    let counter = Rc::clone(&reads);
    let total = creator
        .create(
            (move |items: &Rc<Vec<i32>>| {
                counter.set(counter.get() + 1);
                Rc::clone(items)
            },),
            |items: &Rc<Vec<i32>>| items.iter().sum::<i32>(),
        )
        .expect("selector");

    assert_eq!(total.call(Rc::new(vec![1, 2, 3])), 6);
    assert_eq!(total.call(Rc::new(vec![1, 2, 3])), 6);

    // Equal but distinct arguments miss the outer cache and hit the inner one.
    assert_eq!(reads.get(), 2);
    assert_eq!(total.recomputations(), 1);
}
