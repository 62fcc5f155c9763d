//! Configuration model for layout-cgi.
//!
//! This module defines the Config struct that represents `layout-cgi.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults that reproduce the stock success page, and validation of values.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub use types::{BUILTIN_PLACEHOLDERS, PageConfig};
