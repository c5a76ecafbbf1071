//! Immutable CSS selector builder for Selkie.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Combining two selectors with a combinator symbol
//!   - Deferred validation on stringification
//!
//! # Not Implemented
//!
//! - Selector parsing or matching
//! - Checking fragment order inside a compound selector
//! - Escaping of identifiers and attribute values

/// Errors raised while stringifying a selector.
pub mod error;
/// Selector value type and chain-starting functions.
pub mod selector;

// Re-exports for convenience
pub use error::ValidationError;
pub use selector::{
    Combinator, FragmentKind, Selector, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};
