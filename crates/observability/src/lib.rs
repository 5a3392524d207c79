//! Tracing/logging setup shared by anything embedding these crates.

pub mod tracing;

pub use self::tracing::{init, init_with_filter};
