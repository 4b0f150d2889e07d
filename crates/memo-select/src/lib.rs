//! Memoized selectors.
//!
//! A selector derives a value from some larger state. It is built from input
//! selectors, each reading one piece of the state, and a result function
//! combining those pieces. The result function only runs again when the
//! pieces change:
//!
//! - calling with the very same arguments (same `Rc`, same numbers) skips even
//!   the input selectors
//! - calling with new arguments whose pieces are unchanged reruns the input
//!   selectors but reuses the cached result
//!
//! ```
//! use std::rc::Rc;
//! use memo_select::create_selector;
//!
//! #[derive(Clone)]
//! struct Todo {
//!     title: &'static str,
//!     done: bool,
//! }
//!
//! struct State {
//!     todos: Rc<Vec<Todo>>,
//!     show_done: bool,
//! }
//!
//! let visible = create_selector(
//!     (|s: &Rc<State>| Rc::clone(&s.todos), |s: &Rc<State>| s.show_done),
//!     |todos: &Rc<Vec<Todo>>, show_done: &bool| {
//!         Rc::new(
//!             todos
//!                 .iter()
//!                 .filter(|todo| *show_done || !todo.done)
//!                 .map(|todo| todo.title)
//!                 .collect::<Vec<_>>(),
//!         )
//!     },
//! )
//! .unwrap();
//!
//! let todos = Rc::new(vec![
//!     Todo { title: "write", done: true },
//!     Todo { title: "ship", done: false },
//! ]);
//! let state = Rc::new(State { todos: Rc::clone(&todos), show_done: false });
//! let first = visible.call(state);
//! assert_eq!(*first, ["ship"]);
//!
//! // A rebuilt state holding the same todo list does not recompute.
//! let state = Rc::new(State { todos, show_done: false });
//! assert!(Rc::ptr_eq(&first, &visible.call(state)));
//! assert_eq!(visible.recomputations(), 1);
//! ```
//!
//! Custom caching goes through [`create_selector_creator`], and
//! [`create_structured_selector`] builds selectors returning a [`Record`] of
//! named fields.

pub mod combine;
pub mod creator;
pub mod dependencies;
pub mod error;
pub mod input;
pub mod selector;
pub mod structured;

pub use combine::Combiner;
pub use creator::{ParamsOf, SelectorCreator, create_selector, create_selector_creator};
pub use dependencies::{Dependencies, DependencyList, IntoDependencies};
pub use error::{Result, SelectorError};
pub use input::{InputSelector, Select, SharedSelect};
pub use selector::Selector;
pub use structured::{
    Record, RecordShape, StructuredInput, StructuredSelector, create_structured_selector,
    create_structured_selector_with,
};

pub use memo_core::{
    DeepEqual, DefaultMemoize, Identical, Identity, MemoizeStrategy, Memoized, MemoizedFn,
    default_memoize, default_memoize_with,
};
