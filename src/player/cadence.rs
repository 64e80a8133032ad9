//! Typing cadence and playback speed.
//!
//! Characters are revealed at an irregular rate: every delay is drawn
//! uniformly from `[min, max)`. The speed multiplier scales every wait the
//! player hands out, including pre-delays and the loop pause.

use std::time::Duration;

use rand::Rng;

/// Default lower bound of the per-character delay.
pub const DEFAULT_MIN_CHAR: Duration = Duration::from_millis(30);
/// Default upper bound (exclusive) of the per-character delay.
pub const DEFAULT_MAX_CHAR: Duration = Duration::from_millis(80);

pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 16.0;
const SPEED_STEP: f64 = 1.5;

/// Randomized per-character delay range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingCadence {
    min: Duration,
    max: Duration,
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_CHAR,
            max: DEFAULT_MAX_CHAR,
        }
    }
}

impl TypingCadence {
    /// Create a cadence; bounds are swapped if given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// Fixed-rate cadence (mostly useful for tests).
    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw the next per-character delay.
    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        let min = self.min.as_micros() as u64;
        let max = self.max.as_micros() as u64;
        Duration::from_micros(rng.random_range(min..max))
    }
}

/// Clamp a speed multiplier into the supported range.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        1.0
    }
}

/// Next faster speed (max 16x).
pub fn faster(speed: f64) -> f64 {
    (speed * SPEED_STEP).min(MAX_SPEED)
}

/// Next slower speed (min 0.1x).
pub fn slower(speed: f64) -> f64 {
    (speed / SPEED_STEP).max(MIN_SPEED)
}

/// Scale a wait by the speed multiplier.
pub fn scale(wait: Duration, speed: f64) -> Duration {
    let speed = clamp_speed(speed);
    if speed == 1.0 {
        return wait;
    }
    Duration::from_nanos((wait.as_nanos() as f64 / speed).round() as u64)
}
