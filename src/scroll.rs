//! Rotary input accumulation.
//!
//! Rotary crowns, bezels and high-resolution wheels report small deltas.
//! Pickers move in whole items, so deltas are accumulated over a short time
//! window and converted to item steps once they cross a threshold.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut rotary = RotaryAccumulator::default();
//!
//! // In event loop:
//! if let Some(steps) = rotary.accumulate(delta) {
//!     group.rotate_active(steps).await;
//! }
//! ```

use std::time::{Duration, Instant};

/// Converts raw rotary deltas into whole item steps.
#[derive(Debug, Clone)]
pub struct RotaryAccumulator {
    /// Accumulated delta not yet converted into steps
    accumulated_delta: f32,
    /// Time of last rotary event
    last_event: Option<Instant>,
    /// Idle time after which a partial accumulation is discarded
    debounce: Duration,
    /// Delta per item step
    threshold: f32,
}

impl Default for RotaryAccumulator {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), 1.0)
    }
}

impl RotaryAccumulator {
    /// Create an accumulator.
    ///
    /// # Arguments
    /// * `debounce` - Idle window after which partial deltas are dropped
    /// * `threshold` - Delta that makes up one item step
    pub fn new(debounce: Duration, threshold: f32) -> Self {
        Self {
            accumulated_delta: 0.0,
            last_event: None,
            debounce,
            threshold: threshold.abs().max(f32::EPSILON),
        }
    }

    /// Accumulate a delta and return the whole steps it completes, if any.
    ///
    /// The fractional remainder is kept for the next event.
    pub fn accumulate(&mut self, delta: f32) -> Option<i64> {
        self.accumulate_at(delta, Instant::now())
    }

    fn accumulate_at(&mut self, delta: f32, now: Instant) -> Option<i64> {
        match self.last_event {
            Some(last) if now.duration_since(last) <= self.debounce => {
                self.accumulated_delta += delta;
            }
            _ => {
                self.accumulated_delta = delta;
            }
        }
        self.last_event = Some(now);
        self.take_steps()
    }

    fn take_steps(&mut self) -> Option<i64> {
        let steps = (self.accumulated_delta / self.threshold).trunc();
        if steps == 0.0 {
            return None;
        }
        self.accumulated_delta -= steps * self.threshold;
        Some(steps as i64)
    }

    /// Reset the accumulator state.
    pub fn reset(&mut self) {
        self.accumulated_delta = 0.0;
        self.last_event = None;
    }

    /// Round any pending partial delta to the nearest step and clear it.
    ///
    /// Call this when the input source goes idle.
    pub fn flush(&mut self) -> Option<i64> {
        let steps = (self.accumulated_delta / self.threshold).round();
        self.accumulated_delta = 0.0;
        (steps != 0.0).then_some(steps as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_within_debounce() {
        let mut rotary = RotaryAccumulator::new(Duration::from_millis(100), 3.0);
        let start = Instant::now();

        assert!(rotary.accumulate_at(1.0, start).is_none());
        assert!(rotary.accumulate_at(1.0, start + Duration::from_millis(10)).is_none());
        assert_eq!(rotary.accumulate_at(1.0, start + Duration::from_millis(20)), Some(1));
    }

    #[test]
    fn test_keeps_remainder() {
        let mut rotary = RotaryAccumulator::new(Duration::from_millis(100), 2.0);
        let start = Instant::now();

        assert_eq!(rotary.accumulate_at(5.0, start), Some(2));
        assert_eq!(rotary.accumulate_at(1.0, start + Duration::from_millis(1)), Some(1));
    }

    #[test]
    fn test_idle_drops_partial_delta() {
        let mut rotary = RotaryAccumulator::new(Duration::from_millis(10), 2.0);
        let start = Instant::now();

        assert!(rotary.accumulate_at(1.5, start).is_none());
        assert!(rotary.accumulate_at(1.5, start + Duration::from_millis(50)).is_none());
    }

    #[test]
    fn test_negative_delta() {
        let mut rotary = RotaryAccumulator::new(Duration::from_millis(100), 1.0);
        let start = Instant::now();

        assert_eq!(rotary.accumulate_at(-1.0, start), Some(-1));
        assert_eq!(rotary.accumulate_at(-2.5, start), Some(-2));
        assert_eq!(rotary.flush(), Some(-1));
        assert_eq!(rotary.flush(), None);
    }
}
