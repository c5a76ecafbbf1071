//! Error types for selector stringification.

use thiserror::Error;

/// Raised by [`Selector::stringify`](crate::Selector::stringify) when an
/// element, id, or pseudo-element occurs more than once in one compound
/// selector.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Element, id and pseudo-element should not occur more than once inside the selector.")]
pub struct ValidationError;
