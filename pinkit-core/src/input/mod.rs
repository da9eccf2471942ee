//! Input logic

pub mod debounce;

pub use debounce::{ClickEvent, DebounceState, Debouncer};
