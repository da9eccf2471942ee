//! Input drivers

pub mod button;

pub use button::{ClickChannel, ClickListener, DebouncedButton, ReleaseListener};
pub use pinkit_core::input::{ClickEvent, DebounceState};
