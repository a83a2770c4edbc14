//! Core types, error taxonomy, static tables and query classification.
//!
//! Everything here is pure: no I/O, no shared mutable state.

mod classify;
mod error;
pub mod tables;
mod types;

pub use classify::{classify, digits_only};
pub use error::*;
pub use types::*;
