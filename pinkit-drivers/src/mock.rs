//! In-memory hardware mocks shared by the driver tests

use core::cell::{Cell, RefCell};
use core::future::Future;

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;
use pinkit_hal::{AnalogInput, Clock, EdgeInput, InputPin, OutputPin, PwmOutput};

/// Hardware interaction recorded by a mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    InitOutput,
    High,
    Low,
    Init(u32),
    Deinit,
    Duty(u16),
    Sleep(u32),
}

/// Ordered record of writes and sleeps across several mocks
#[derive(Default)]
pub struct EventLog {
    events: RefCell<Vec<Event, 128>>,
}

impl EventLog {
    pub fn push(&self, event: Event) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("event log full");
    }

    pub fn events(&self) -> Vec<Event, 128> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<Event> {
        self.events.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// PWM-capable output line
pub struct MockPwmPin<'a> {
    log: &'a EventLog,
    max: u16,
    high: bool,
}

impl<'a> MockPwmPin<'a> {
    pub fn new(log: &'a EventLog, max: u16) -> Self {
        Self {
            log,
            max,
            high: false,
        }
    }
}

impl OutputPin for MockPwmPin<'_> {
    fn init_output(&mut self) {
        self.log.push(Event::InitOutput);
    }

    fn set_high(&mut self) {
        self.high = true;
        self.log.push(Event::High);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.push(Event::Low);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl PwmOutput for MockPwmPin<'_> {
    fn init(&mut self, frequency_hz: u32) {
        self.log.push(Event::Init(frequency_hz));
    }

    fn deinit(&mut self) {
        self.log.push(Event::Deinit);
    }

    fn max_duty(&self) -> u16 {
        self.max
    }

    fn set_duty(&mut self, duty: u16) {
        self.log.push(Event::Duty(duty));
    }
}

/// PWM channel that only remembers its last duty
pub struct MockChannel {
    pub duty: u16,
    pub max: u16,
    pub frequency_hz: Option<u32>,
}

impl MockChannel {
    pub fn new(max: u16) -> Self {
        Self {
            duty: 0,
            max,
            frequency_hz: None,
        }
    }
}

impl PwmOutput for MockChannel {
    fn init(&mut self, frequency_hz: u32) {
        self.frequency_hz = Some(frequency_hz);
    }

    fn deinit(&mut self) {
        self.frequency_hz = None;
    }

    fn max_duty(&self) -> u16 {
        self.max
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
    }
}

/// Delay that records the requested duration and returns immediately
pub struct MockDelay<'a> {
    log: &'a EventLog,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a EventLog) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Sleep(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Sleep(ms));
    }
}

/// ADC that replays a fixed list of samples, repeating the last one
pub struct MockAdc<const N: usize> {
    samples: [u16; N],
    next: usize,
}

impl<const N: usize> MockAdc<N> {
    pub fn new(samples: [u16; N]) -> Self {
        Self { samples, next: 0 }
    }
}

impl<const N: usize> AnalogInput for MockAdc<N> {
    fn read_raw(&mut self) -> u16 {
        let sample = self.samples[self.next.min(N - 1)];
        self.next += 1;
        sample
    }
}

/// Clock moved by hand
#[derive(Default)]
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Edge-capable input that replays `(time_ms, line_high)` edges
///
/// Once the list is exhausted the edge future never completes.
pub struct MockEdgePin<'a, const N: usize> {
    edges: [(u32, bool); N],
    next: usize,
    high: bool,
    clock: &'a MockClock,
}

impl<'a, const N: usize> MockEdgePin<'a, N> {
    pub fn new(edges: [(u32, bool); N], clock: &'a MockClock) -> Self {
        Self {
            edges,
            next: 0,
            high: true,
            clock,
        }
    }
}

impl<const N: usize> InputPin for MockEdgePin<'_, N> {
    fn is_high(&self) -> bool {
        self.high
    }
}

impl<const N: usize> EdgeInput for MockEdgePin<'_, N> {
    fn wait_for_any_edge(&mut self) -> impl Future<Output = ()> {
        async move {
            match self.edges.get(self.next).copied() {
                Some((at_ms, high)) => {
                    self.next += 1;
                    self.clock.set(at_ms);
                    self.high = high;
                }
                None => core::future::pending::<()>().await,
            }
        }
    }
}
