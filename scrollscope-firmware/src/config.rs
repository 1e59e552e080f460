//! Build-time configuration
//!
//! `build.rs` validates scope.toml and generates the constants below.

use scrollscope_core::ScopeConfig;

include!(concat!(env!("OUT_DIR"), "/scope_config.rs"));
