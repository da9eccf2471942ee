//! Sliding-window mean
//!
//! Bounded FIFO of the most recent samples. `N` is the storage capacity;
//! the active window size can be lowered at runtime without reallocating.

use heapless::Deque;

use crate::error::DriverError;

/// Mean of the most recent `window` samples
#[derive(Debug, Clone)]
pub struct SlidingMean<const N: usize> {
    samples: Deque<f32, N>,
    window: usize,
}

impl<const N: usize> Default for SlidingMean<N> {
    fn default() -> Self {
        Self {
            samples: Deque::new(),
            window: N,
        }
    }
}

impl<const N: usize> SlidingMean<N> {
    /// Create an empty window of size `window` (`1..=N`)
    pub fn new(window: usize) -> Result<Self, DriverError> {
        let mut mean = Self::default();
        mean.set_window(window)?;
        Ok(mean)
    }

    /// Active window size
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Change the window size, evicting the oldest samples if it shrinks
    pub fn set_window(&mut self, window: usize) -> Result<(), DriverError> {
        if window == 0 || window > N {
            return Err(DriverError::InvalidArgument);
        }
        self.window = window;
        while self.samples.len() > window {
            self.samples.pop_front();
        }
        Ok(())
    }

    /// Append a sample, evicting the oldest one once the window is full
    pub fn push(&mut self, sample: f32) {
        while self.samples.len() >= self.window {
            self.samples.pop_front();
        }
        // Cannot fail: len < window <= N after eviction
        let _ = self.samples.push_back(sample);
    }

    /// Arithmetic mean of the held samples
    pub fn mean(&self) -> Option<f32> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f32 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f32)
    }

    /// Drop all samples, keeping the window size
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Iterate samples oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_before_full() {
        let mut window: SlidingMean<8> = SlidingMean::new(4).unwrap();
        assert_eq!(window.mean(), None);

        window.push(1.0);
        window.push(3.0);
        assert_eq!(window.len(), 2);
        assert_eq!(window.mean(), Some(2.0));
    }

    #[test]
    fn test_evicts_oldest() {
        let mut window: SlidingMean<8> = SlidingMean::new(3).unwrap();
        for sample in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(sample);
        }

        assert_eq!(window.len(), 3);
        let held: heapless::Vec<f32, 3> = window.iter().copied().collect();
        assert_eq!(held.as_slice(), &[3.0, 4.0, 5.0]);
        assert_eq!(window.mean(), Some(4.0));
    }

    #[test]
    fn test_shrink_window() {
        let mut window: SlidingMean<8> = SlidingMean::new(5).unwrap();
        for sample in [1.0, 2.0, 3.0, 4.0, 5.0] {
            window.push(sample);
        }

        window.set_window(2).unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!(window.mean(), Some(4.5));
    }

    #[test]
    fn test_window_bounds() {
        assert!(SlidingMean::<4>::new(0).is_err());
        assert!(SlidingMean::<4>::new(5).is_err());
        assert!(SlidingMean::<4>::new(4).is_ok());
    }

    #[test]
    fn test_full_capacity_window() {
        let mut window: SlidingMean<2> = SlidingMean::new(2).unwrap();
        window.push(1.0);
        window.push(2.0);
        window.push(3.0);
        assert_eq!(window.len(), 2);
        assert_eq!(window.mean(), Some(2.5));
    }
}
