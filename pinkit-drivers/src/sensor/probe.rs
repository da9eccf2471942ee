//! Thermistor probe with a smoothed reading
//!
//! The probe converts raw ADC samples with a [`Thermistor`] model. Once
//! measuring, a sampling loop pushes one converted reading per interval
//! into a sliding window and keeps the window mean as the stable value.
//!
//! The loop does not spawn itself: [`SmoothedTemperatureProbe::start_measuring`]
//! hands back a [`SamplingTask`] that the caller runs on its executor.
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn sampling(task: SamplingTask<'static, NoopRawMutex, AdcChannel>) {
//!     let report = task.run(&mut Delay).await;
//!     defmt::info!("sampling stopped after {} samples", report.samples);
//! }
//!
//! if let Some(task) = probe.start_measuring(SamplingConfig::default())? {
//!     spawner.spawn(sampling(task))?;
//! }
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use pinkit_core::config::{SamplingConfig, MAX_MEAN_COUNT};
use pinkit_core::sensor::{celsius_to_fahrenheit, round_to, SlidingMean, Thermistor};
use pinkit_core::{DriverError, SensorError};
use pinkit_hal::AnalogInput;

/// Summary of a finished sampling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplingReport {
    /// Readings pushed into the window
    pub samples: u32,
    /// Samples skipped because the conversion failed
    pub faults: u32,
}

struct ProbeState<A, const N: usize> {
    adc: A,
    thermistor: Thermistor,
    window: SlidingMean<N>,
    stable: f32,
    measuring: bool,
    /// Bumped on every start so a loop from an earlier start can tell it is stale
    generation: u32,
    interval_ms: u32,
}

impl<A: AnalogInput, const N: usize> ProbeState<A, N> {
    fn read_celsius(&mut self) -> Result<f32, SensorError> {
        let raw = self.adc.read_raw();
        self.thermistor.celsius(raw)
    }
}

/// Outcome of one sampling iteration
enum Tick {
    Sampled { interval_ms: u32 },
    Fault { interval_ms: u32 },
    Stopped,
}

/// Temperature probe with a sliding-window stable value
///
/// `N` bounds the window size accepted by [`start_measuring`](Self::start_measuring).
pub struct SmoothedTemperatureProbe<M: RawMutex, A, const N: usize = MAX_MEAN_COUNT> {
    state: Mutex<M, RefCell<ProbeState<A, N>>>,
}

impl<M: RawMutex, A: AnalogInput, const N: usize> SmoothedTemperatureProbe<M, A, N> {
    /// Create a probe and seed the stable value with one reading
    pub fn new(mut adc: A, thermistor: Thermistor) -> Result<Self, DriverError> {
        let stable = thermistor.celsius(adc.read_raw())?;
        let window = SlidingMean::new(SamplingConfig::default().mean_count.min(N))?;

        Ok(Self {
            state: Mutex::new(RefCell::new(ProbeState {
                adc,
                thermistor,
                window,
                stable,
                measuring: false,
                generation: 0,
                interval_ms: SamplingConfig::default().interval_ms,
            })),
        })
    }

    /// Take one reading now, in degrees Celsius
    pub fn get_temperature(&self) -> Result<f32, DriverError> {
        self.state
            .lock(|state| state.borrow_mut().read_celsius())
            .map_err(DriverError::from)
    }

    /// Take one reading now, in degrees Fahrenheit
    pub fn get_temperature_fahrenheit(&self) -> Result<f32, DriverError> {
        self.get_temperature().map(celsius_to_fahrenheit)
    }

    /// Window mean in degrees Celsius, rounded to `digits` decimal places
    ///
    /// Fails with [`DriverError::PreconditionViolation`] unless measuring.
    pub fn get_stable_temperature(&self, digits: u8) -> Result<f32, DriverError> {
        self.state.lock(|state| {
            let state = state.borrow();
            if !state.measuring {
                return Err(DriverError::PreconditionViolation);
            }
            Ok(round_to(state.stable, digits))
        })
    }

    /// Window mean in degrees Fahrenheit
    ///
    /// The Celsius value is rounded first, then converted.
    pub fn get_stable_temperature_fahrenheit(&self, digits: u8) -> Result<f32, DriverError> {
        self.get_stable_temperature(digits).map(celsius_to_fahrenheit)
    }

    /// Check if a sampling loop is supposed to be running
    pub fn is_measuring(&self) -> bool {
        self.state.lock(|state| state.borrow().measuring)
    }

    /// Number of readings currently in the window
    pub fn window_len(&self) -> usize {
        self.state.lock(|state| state.borrow().window.len())
    }

    /// Start periodic sampling
    ///
    /// Returns the loop to run when sampling was stopped. When already
    /// measuring, the interval and window size are updated in place, the
    /// running loop picks them up, and `None` is returned.
    ///
    /// A zero interval is rejected: the loop must sleep between samples so
    /// other tasks, including the one that stops it, get to run.
    pub fn start_measuring(
        &self,
        config: SamplingConfig,
    ) -> Result<Option<SamplingTask<'_, M, A, N>>, DriverError> {
        self.state.lock(|state| {
            if config.interval_ms == 0 {
                return Err(DriverError::InvalidArgument);
            }
            let mut state = state.borrow_mut();
            state.window.set_window(config.mean_count)?;
            state.interval_ms = config.interval_ms;

            if state.measuring {
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "probe: reconfigured, interval {} ms, window {}",
                    config.interval_ms,
                    config.mean_count
                );
                return Ok(None);
            }

            state.measuring = true;
            state.generation = state.generation.wrapping_add(1);

            #[cfg(feature = "defmt")]
            defmt::info!(
                "probe: measuring every {} ms over {} samples",
                config.interval_ms,
                config.mean_count
            );

            Ok(Some(SamplingTask {
                probe: self,
                generation: state.generation,
            }))
        })
    }

    /// Stop sampling
    ///
    /// The loop notices at its next wake, so it may run for up to one more
    /// interval. The window keeps its readings.
    pub fn stop_measuring(&self) {
        self.state.lock(|state| state.borrow_mut().measuring = false);
    }

    fn sample(&self, generation: u32) -> Tick {
        self.state.lock(|state| {
            let mut state = state.borrow_mut();
            if !state.measuring || state.generation != generation {
                return Tick::Stopped;
            }

            let interval_ms = state.interval_ms;
            match state.read_celsius() {
                Ok(celsius) => {
                    state.window.push(celsius);
                    if let Some(mean) = state.window.mean() {
                        state.stable = mean;
                    }
                    Tick::Sampled { interval_ms }
                }
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("probe: skipping sample: {}", _e);
                    Tick::Fault { interval_ms }
                }
            }
        })
    }
}

/// Sampling loop handed out by [`SmoothedTemperatureProbe::start_measuring`]
#[must_use = "sampling only happens while the task is run"]
pub struct SamplingTask<'p, M: RawMutex, A, const N: usize = MAX_MEAN_COUNT> {
    probe: &'p SmoothedTemperatureProbe<M, A, N>,
    generation: u32,
}

impl<M: RawMutex, A: AnalogInput, const N: usize> SamplingTask<'_, M, A, N> {
    /// Sample until measuring stops, sleeping on `delay` between samples
    pub async fn run<D: DelayNs>(self, delay: &mut D) -> SamplingReport {
        let mut report = SamplingReport::default();

        loop {
            let interval_ms = match self.probe.sample(self.generation) {
                Tick::Sampled { interval_ms } => {
                    report.samples += 1;
                    interval_ms
                }
                Tick::Fault { interval_ms } => {
                    report.faults += 1;
                    interval_ms
                }
                Tick::Stopped => break,
            };
            delay.delay_ms(interval_ms).await;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "probe: sampling loop exited after {} samples",
            report.samples
        );
        report
    }
}
