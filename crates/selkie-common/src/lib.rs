//! Common utilities for Selkie.
//!
//! This crate provides shared infrastructure used by the selector builder and the CLI:
//! - **Warning System** - colored terminal output for suspicious input
//! - **JSON helpers** - `serialize` / `deserialize` over `serde_json`
//! - **Geometry** - the `Rectangle` value

pub mod geometry;
pub mod json;
pub mod warning;

pub use geometry::Rectangle;
pub use json::{JsonError, deserialize, serialize};
