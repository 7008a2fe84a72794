//! Configuration model for hunkrev.
//!
//! This module defines the Config struct that represents `.hunkrev.yaml`
//! at the repository root. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{CONFIG_FILE_NAME, Config};
