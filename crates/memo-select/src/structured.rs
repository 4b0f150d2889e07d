//! Structured selectors: one input selector per named field.
//!
//! ```
//! use std::rc::Rc;
//! use memo_select::{InputSelector, create_structured_selector};
//!
//! struct Cart {
//!     items: u32,
//!     total_cents: u32,
//! }
//!
//! let summary = create_structured_selector(vec![
//!     ("items", InputSelector::from_fn(|c: &Rc<Cart>| c.items)),
//!     ("total", InputSelector::from_fn(|c: &Rc<Cart>| c.total_cents)),
//! ])
//! .unwrap();
//!
//! let record = summary.call(Rc::new(Cart { items: 3, total_cents: 1250 }));
//! assert_eq!(record["items"], 3);
//! assert_eq!(record["total"], 1250);
//! ```
//!
//! Every field shares one output type `D`. Fields of different types go
//! through an enum wrapping each of them.

use std::ops::Index;

use memo_core::{DefaultMemoize, Identical, Identity, MemoizeStrategy, ShallowEq};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::combine::Combiner;
use crate::creator::SelectorCreator;
use crate::error::{Result, SelectorError};
use crate::input::{InputSelector, SharedSelect, short_type_name};
use crate::selector::Selector;

/// The output of a structured selector: field names in input order, each
/// mapped to its selector's output.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<D> {
    fields: Vec<(String, D)>,
}

impl<D> Record<D> {
    pub fn get(&self, key: &str) -> Option<&D> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &D> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &D)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Vec<(String, D)> {
        self.fields
    }
}

impl<D> Index<&str> for Record<D> {
    type Output = D;

    fn index(&self, key: &str) -> &D {
        match self.get(key) {
            Some(value) => value,
            None => panic!("record has no field named {key:?}"),
        }
    }
}

/// Records are identical when they have the same keys in the same order and
/// every value is identical.
impl<D: Identical> Identical for Record<D> {
    fn identical(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|((prev_key, prev), (next_key, next))| {
                    prev_key == next_key && prev.identical(next)
                })
    }
}

impl<D: Serialize> Serialize for Record<D> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The result function of a structured selector: rebuilds a [`Record`] from
/// the field names and the dependency outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordShape {
    keys: Vec<String>,
}

impl RecordShape {
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn build<D: Clone>(&self, values: &[D]) -> Record<D> {
        Record {
            fields: self.keys.iter().cloned().zip(values.iter().cloned()).collect(),
        }
    }
}

impl<D: Clone> Combiner<Vec<D>> for RecordShape {
    type Output = Record<D>;

    fn combine(&self, params: &Vec<D>) -> Record<D> {
        self.build(params)
    }
}

/// A selector producing a [`Record`].
pub type StructuredSelector<A, D> = Selector<A, Record<D>, RecordShape>;

/// What a structured selector is built from.
///
/// Only [`StructuredInput::Fields`] is accepted; the other variants exist so
/// that runtime-assembled configuration reports what it actually held.
pub enum StructuredInput<A, D> {
    Fields(Vec<(String, InputSelector<A, D>)>),
    Function(SharedSelect<A, D>),
    Constant(D),
}

impl<A, D> StructuredInput<A, D> {
    /// The kind reported in error messages.
    pub fn kind(&self) -> String {
        match self {
            Self::Fields(_) => "map".to_string(),
            Self::Function(_) => "function".to_string(),
            Self::Constant(_) => short_type_name::<D>(),
        }
    }
}

impl<A, D, K: Into<String>> From<Vec<(K, InputSelector<A, D>)>> for StructuredInput<A, D> {
    fn from(fields: Vec<(K, InputSelector<A, D>)>) -> Self {
        Self::Fields(
            fields
                .into_iter()
                .map(|(name, selector)| (name.into(), selector))
                .collect(),
        )
    }
}

impl<A, D, K: Into<String>, const N: usize> From<[(K, InputSelector<A, D>); N]>
    for StructuredInput<A, D>
{
    fn from(fields: [(K, InputSelector<A, D>); N]) -> Self {
        Vec::from(fields).into()
    }
}

impl<A, D> From<InputSelector<A, D>> for StructuredInput<A, D> {
    fn from(input: InputSelector<A, D>) -> Self {
        match input {
            InputSelector::Function(selector) => Self::Function(selector),
            InputSelector::Constant(value) => Self::Constant(value),
        }
    }
}

/// Builds a structured selector with the default creator.
pub fn create_structured_selector<A, D>(
    input: impl Into<StructuredInput<A, D>>,
) -> Result<StructuredSelector<A, D>>
where
    A: ShallowEq<Identity> + 'static,
    D: Clone + 'static,
    Vec<D>: ShallowEq<Identity>,
{
    create_structured_selector_with(input, &SelectorCreator::<DefaultMemoize, Identity>::default())
}

/// Builds a structured selector with `creator`.
///
/// A repeated field name keeps its first position and takes the last
/// selector given for it.
pub fn create_structured_selector_with<A, D, M, O>(
    input: impl Into<StructuredInput<A, D>>,
    creator: &SelectorCreator<M, O>,
) -> Result<StructuredSelector<A, D>>
where
    A: ShallowEq<Identity> + 'static,
    D: Clone + 'static,
    M: MemoizeStrategy<Vec<D>, Record<D>, O>,
    M::Wrapped: 'static,
{
    let fields = match input.into() {
        StructuredInput::Fields(fields) => fields,
        other => {
            return Err(SelectorError::InvalidStructuredInput {
                received: other.kind(),
            });
        }
    };

    let mut keys: Vec<String> = Vec::with_capacity(fields.len());
    let mut selectors: Vec<InputSelector<A, D>> = Vec::with_capacity(fields.len());
    for (name, selector) in fields {
        match keys.iter().position(|key| *key == name) {
            Some(index) => selectors[index] = selector,
            None => {
                keys.push(name);
                selectors.push(selector);
            }
        }
    }

    creator.create(selectors, RecordShape { keys })
}
