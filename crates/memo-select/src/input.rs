//! Input selectors: functions reading one value out of the selector arguments.

use std::fmt;
use std::rc::Rc;

/// Something that derives a value from selector arguments.
///
/// Implemented for every `Fn(&A) -> D` closure and for [`Selector`], so
/// selectors can feed other selectors.
///
/// [`Selector`]: crate::Selector
pub trait Select<A: ?Sized> {
    type Output;

    fn select(&self, args: &A) -> Self::Output;
}

impl<A: ?Sized, D, F> Select<A> for F
where
    F: Fn(&A) -> D,
{
    type Output = D;

    #[inline]
    fn select(&self, args: &A) -> D {
        self(args)
    }
}

/// A shared, type-erased input selector.
pub type SharedSelect<A, D> = Rc<dyn Select<A, Output = D>>;

/// One entry of a dependency list assembled at runtime.
///
/// Lists built from configuration or plugins may contain plain values where a
/// function was expected. Such lists are rejected when the selector is
/// created, see [`SelectorError::InvalidDependencies`].
///
/// [`SelectorError::InvalidDependencies`]: crate::SelectorError::InvalidDependencies
pub enum InputSelector<A, D> {
    Function(SharedSelect<A, D>),
    Constant(D),
}

impl<A, D> InputSelector<A, D> {
    /// Wraps a closure.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(&A) -> D + 'static,
    {
        Self::Function(Rc::new(func))
    }

    /// Wraps any [`Select`] implementation, such as another selector.
    pub fn new<S>(selector: S) -> Self
    where
        S: Select<A, Output = D> + 'static,
    {
        Self::Function(Rc::new(selector))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// The kind reported in error messages: `function`, or the value's type.
    pub fn kind(&self) -> String {
        match self {
            Self::Function(_) => "function".to_string(),
            Self::Constant(_) => short_type_name::<D>(),
        }
    }

    pub(crate) fn into_function(self) -> Option<SharedSelect<A, D>> {
        match self {
            Self::Function(selector) => Some(selector),
            Self::Constant(_) => None,
        }
    }
}

impl<A, D> Clone for InputSelector<A, D>
where
    D: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Function(selector) => Self::Function(Rc::clone(selector)),
            Self::Constant(value) => Self::Constant(value.clone()),
        }
    }
}

impl<A, D: fmt::Debug> fmt::Debug for InputSelector<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
        }
    }
}

/// `std::any::type_name` with module paths stripped, so
/// `alloc::vec::Vec<alloc::string::String>` reads `Vec<String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if ch.is_alphanumeric() || ch == '_' {
            segment.push(ch);
        } else {
            short.push_str(&segment);
            segment.clear();
            short.push(ch);
        }
    }
    short.push_str(&segment);
    short
}
