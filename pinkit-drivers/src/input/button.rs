//! Debounced push-button with click listeners
//!
//! Edges reach the button through [`DebouncedButton::handle_edge`], which
//! never suspends and is safe to call from a GPIO interrupt handler. On
//! boards where the HAL exposes edges as futures, run
//! [`DebouncedButton::watch`] in a task instead.
//!
//! A click is dispatched to two kinds of listeners:
//! - Synchronous listeners: plain callbacks, invoked inline in registration
//!   order. They run in the edge handler's context and must be short.
//! - Deferred listeners: channels read by other tasks. The click is queued
//!   with a non-blocking send after all synchronous listeners returned.
//!
//! # Usage
//!
//! ```ignore
//! static CLICKS: Channel<CriticalSectionRawMutex, ClickEvent, 4> = Channel::new();
//! static BUTTON: StaticCell<DebouncedButton<'static, CriticalSectionRawMutex, 4>> = StaticCell::new();
//!
//! let button = BUTTON.init(DebouncedButton::new(ButtonConfig::default(), clock.now_ms()));
//! button.on_click(&|click| defmt::info!("click {}", click.count))?;
//! button.on_click_deferred(&CLICKS)?;
//! spawner.spawn(button_task(button, pin))?;
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;
use heapless::Vec;
use pinkit_core::config::{ButtonConfig, MAX_CLICK_LISTENERS, MAX_DEFERRED_LISTENERS};
use pinkit_core::input::{ClickEvent, DebounceState, Debouncer};
use pinkit_core::DriverError;
use pinkit_hal::{Clock, EdgeInput, InputPin};

/// Synchronous click callback
pub type ClickListener<'a> = &'a (dyn Fn(ClickEvent) + Sync);

/// Release callback (accepted but never invoked, see [`DebouncedButton::on_release`])
pub type ReleaseListener<'a> = &'a (dyn Fn() + Sync);

/// Queue a deferred listener task reads clicks from
pub type ClickChannel<M, const Q: usize> = Channel<M, ClickEvent, Q>;

type Listeners<'a> = Vec<ClickListener<'a>, MAX_CLICK_LISTENERS>;
type DeferredListeners<'a, M, const Q: usize> = Vec<&'a ClickChannel<M, Q>, MAX_DEFERRED_LISTENERS>;

struct ButtonState<'a, M: RawMutex, const Q: usize> {
    debouncer: Debouncer,
    pressed: bool,
    listeners: Listeners<'a>,
    deferred: DeferredListeners<'a, M, Q>,
    dropped_events: u32,
}

/// Interrupt-driven debounced button
///
/// `M` is the mutex protecting the button state from concurrent edge
/// handling; use `CriticalSectionRawMutex` when edges arrive from an
/// interrupt. `Q` is the depth of deferred listener channels.
pub struct DebouncedButton<'a, M: RawMutex, const Q: usize = 4> {
    config: ButtonConfig,
    state: Mutex<M, RefCell<ButtonState<'a, M, Q>>>,
}

impl<'a, M: RawMutex, const Q: usize> DebouncedButton<'a, M, Q> {
    /// Create a new button
    ///
    /// `now_ms` seeds the debounce window. The line is assumed released.
    pub fn new(config: ButtonConfig, now_ms: u32) -> Self {
        Self {
            config,
            state: Mutex::new(RefCell::new(ButtonState {
                debouncer: Debouncer::new(config.debounce_ms, now_ms),
                pressed: false,
                listeners: Vec::new(),
                deferred: Vec::new(),
                dropped_events: 0,
            })),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Check if the last observed level was "pressed"
    pub fn is_pressed(&self) -> bool {
        self.state.lock(|state| state.borrow().pressed)
    }

    /// Read `pin` now and check whether it is at the pressed level
    ///
    /// Bypasses debouncing.
    pub fn is_pressed_now<P: InputPin>(&self, pin: &P) -> bool {
        self.config.is_pressed_level(pin.is_high())
    }

    /// Current debounce state
    pub fn debounce_state(&self) -> DebounceState {
        self.state.lock(|state| state.borrow().debouncer.state())
    }

    /// Number of clicks dispatched so far
    pub fn clicks(&self) -> u32 {
        self.state.lock(|state| state.borrow().debouncer.clicks())
    }

    /// Deferred notifications dropped because a listener queue was full
    pub fn dropped_events(&self) -> u32 {
        self.state.lock(|state| state.borrow().dropped_events)
    }

    /// Register a synchronous click listener
    ///
    /// Listeners are called in registration order from the edge handler.
    pub fn on_click(&self, listener: ClickListener<'a>) -> Result<(), DriverError> {
        self.state.lock(|state| {
            state
                .borrow_mut()
                .listeners
                .push(listener)
                .map_err(|_| DriverError::CapacityExceeded)
        })
    }

    /// Register a deferred click listener
    ///
    /// Each click is queued on `channel` after the synchronous listeners
    /// ran; the task reading the channel handles it on its own schedule.
    pub fn on_click_deferred(&self, channel: &'a ClickChannel<M, Q>) -> Result<(), DriverError> {
        self.state.lock(|state| {
            state
                .borrow_mut()
                .deferred
                .push(channel)
                .map_err(|_| DriverError::CapacityExceeded)
        })
    }

    /// Register a release listener
    ///
    /// Release events are not generated: the listener is accepted and
    /// dropped, and this always succeeds.
    pub fn on_release(&self, _listener: ReleaseListener<'a>) -> Result<(), DriverError> {
        #[cfg(feature = "defmt")]
        defmt::warn!("button: release listeners are not supported, ignoring");
        Ok(())
    }

    /// Remove all click listeners, synchronous and deferred
    pub fn clear_listeners(&self) {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.listeners.clear();
            state.deferred.clear();
        });
    }

    /// Process one edge on the button line
    ///
    /// `line_high` is the line level read right after the edge. Returns the
    /// click if this edge produced one. Never suspends.
    pub fn handle_edge(&self, line_high: bool, now_ms: u32) -> Option<ClickEvent> {
        let pressed = self.config.is_pressed_level(line_high);

        // Copy the listener lists out so callbacks run without the lock held
        let (click, listeners, deferred) = self.state.lock(|state| {
            let mut state = state.borrow_mut();
            state.pressed = pressed;
            let click = state.debouncer.on_edge(pressed, now_ms)?;
            Some((click, state.listeners.clone(), state.deferred.clone()))
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("button: click {} at {} ms", click.count, click.timestamp_ms);

        for listener in listeners.iter() {
            listener(click);
        }

        for channel in deferred.iter() {
            if channel.try_send(click).is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("button: deferred listener queue full, dropping click");
                self.state
                    .lock(|state| state.borrow_mut().dropped_events += 1);
            }
        }

        Some(click)
    }

    /// Feed edges from an interrupt-capable input forever
    pub async fn watch<P: EdgeInput, C: Clock>(&self, pin: &mut P, clock: &C) -> ! {
        loop {
            pin.wait_for_any_edge().await;
            self.handle_edge(pin.is_high(), clock.now_ms());
        }
    }
}
