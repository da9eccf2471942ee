//! Push-button debounce state machine
//!
//! Driven by every edge (rising and falling) on the button line. The
//! handler only looks at the level *after* the edge and the time since the
//! last accepted transition, so it is safe to run from interrupt context.
//!
//! ```text
//!            release edge (any state)
//!   ┌───────────────────────────────────────────┐
//!   ▼                                           │
//! Idle ──press, window not elapsed──► PressedPending
//!   │                                       │
//!   │ press, window elapsed                 │ press, window elapsed
//!   ▼                                       ▼
//! PressedReported ◄─────────────────────────┘   (click dispatched)
//! ```
//!
//! Every release edge restarts the debounce window, so contact bounce on
//! release cannot produce a second click.

/// Debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// Line released
    #[default]
    Idle,
    /// Press observed but the debounce window had not elapsed
    PressedPending,
    /// Click already fired for the current physical press
    PressedReported,
}

/// Accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickEvent {
    /// Clock reading when the press was accepted (ms)
    pub timestamp_ms: u32,
    /// Running number of accepted clicks, starting at 1
    pub count: u32,
}

/// Edge-driven debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    debounce_ms: u32,
    /// Time of the last accepted transition
    last_event_ms: u32,
    clicks: u32,
}

impl Debouncer {
    /// Create a debouncer
    ///
    /// `now_ms` seeds the window, so a press within `debounce_ms` of
    /// construction is treated as noise.
    pub fn new(debounce_ms: u32, now_ms: u32) -> Self {
        Self {
            state: DebounceState::Idle,
            debounce_ms,
            last_event_ms: now_ms,
            clicks: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// Configured debounce window
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Timestamp of the last accepted transition
    pub fn last_event_ms(&self) -> u32 {
        self.last_event_ms
    }

    /// Number of clicks accepted so far
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Process one edge
    ///
    /// `pressed` is the debounced meaning of the line level right after the
    /// edge. Returns the click to dispatch, if the edge completes one.
    pub fn on_edge(&mut self, pressed: bool, now_ms: u32) -> Option<ClickEvent> {
        if !pressed {
            // Release re-arms detection and restarts the window
            self.last_event_ms = now_ms;
            self.state = DebounceState::Idle;
            return None;
        }

        if self.state == DebounceState::PressedReported {
            return None;
        }

        if now_ms.wrapping_sub(self.last_event_ms) >= self.debounce_ms {
            self.last_event_ms = now_ms;
            self.state = DebounceState::PressedReported;
            self.clicks = self.clicks.wrapping_add(1);
            Some(ClickEvent {
                timestamp_ms: now_ms,
                count: self.clicks,
            })
        } else {
            self.state = DebounceState::PressedPending;
            None
        }
    }
}
