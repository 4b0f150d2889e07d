//! Error types for selector construction.

use thiserror::Error;

/// Errors raised while building a selector.
///
/// Both variants are configuration errors: they are returned by the creating
/// call and no selector exists afterwards. Invoking a selector never fails on
/// its own account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// One or more entries of a dependency list is not a function.
    #[error(
        "selector creators expect all input selectors to be functions, instead received the following types: [{}]",
        .kinds.join(", ")
    )]
    InvalidDependencies { kinds: Vec<String> },

    /// A structured selector was given something other than a field map.
    #[error(
        "structured selectors expect a map of input selectors, instead received a {received}"
    )]
    InvalidStructuredInput { received: String },
}

pub type Result<T> = std::result::Result<T, SelectorError>;
