//! Configuration types
//!
//! Board-agnostic driver settings. All types have sensible defaults and can
//! be deserialized with the `serde` feature for boards that keep settings in
//! flash.

pub mod types;

pub use types::*;
