//! Configuration types
//!
//! Board-agnostic settings. The firmware deserializes them from
//! `scope.toml` at build time and embeds the result as a constant.

pub mod types;

pub use types::*;
