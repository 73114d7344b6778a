//! Oscillating obstacle motion
//!
//! Position is a pure function of elapsed time: a sine wave remapped to
//! [0, 1] scales the movement vector, offset from the cached start position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{OSCILLATOR_PERIOD, PERIOD_EPSILON};
use crate::error::{Error, Result};

/// Tunable oscillator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OscillatorConfig {
    /// Full displacement at the top of the wave
    pub movement: Vec3,
    /// Seconds per full cycle
    pub period: f32,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            movement: Vec3::ZERO,
            period: OSCILLATOR_PERIOD,
        }
    }
}

impl OscillatorConfig {
    /// Period and movement must be finite; a period at or below zero is allowed
    pub fn validate(&self) -> Result<()> {
        if !self.period.is_finite() || !self.movement.is_finite() {
            return Err(Error::InvalidOscillator {
                period: self.period,
                movement: self.movement,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    start: Vec3,
    config: OscillatorConfig,
}

impl Oscillator {
    pub fn new(start: Vec3, config: OscillatorConfig) -> Self {
        Self { start, config }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn config(&self) -> &OscillatorConfig {
        &self.config
    }

    /// Movement factor in [0, 1] at `elapsed` seconds, `None` for a zero period
    pub fn factor_at(&self, elapsed: f32) -> Option<f32> {
        if self.config.period <= PERIOD_EPSILON {
            return None;
        }
        let cycles = elapsed / self.config.period;
        let raw = (cycles * std::f32::consts::TAU).sin();
        Some(raw / 2.0 + 0.5)
    }

    /// World position at `elapsed` seconds
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        match self.factor_at(elapsed) {
            Some(factor) => self.start + self.config.movement * factor,
            None => self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn oscillator(period: f32) -> Oscillator {
        Oscillator::new(
            Vec3::new(1.0, 2.0, 3.0),
            OscillatorConfig {
                movement: Vec3::Y,
                period,
            },
        )
    }

    #[test]
    fn test_quarter_points() {
        let osc = oscillator(2.0);
        // sin(0) = 0 remaps to the midpoint
        assert!(osc.position_at(0.0).abs_diff_eq(Vec3::new(1.0, 2.5, 3.0), 1e-5));
        assert!(osc.position_at(0.5).abs_diff_eq(Vec3::new(1.0, 3.0, 3.0), 1e-5));
        assert!(osc.position_at(1.0).abs_diff_eq(Vec3::new(1.0, 2.5, 3.0), 1e-5));
        assert!(osc.position_at(1.5).abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-5));
    }

    #[test]
    fn test_zero_period_never_moves() {
        for period in [0.0, f32::EPSILON, -1.0] {
            let osc = oscillator(period);
            assert_eq!(osc.config().period, period);
            assert_eq!(osc.factor_at(0.7), None);
            assert_eq!(osc.position_at(0.7), osc.start());
            assert_eq!(osc.position_at(123.0), osc.start());
        }
    }

    proptest! {
        #[test]
        fn factor_stays_in_unit_range(t in 0.0f32..1000.0, period in 0.01f32..100.0) {
            let factor = oscillator(period).factor_at(t).unwrap();
            prop_assert!((-1e-6..=1.0 + 1e-6).contains(&factor));
        }

        #[test]
        fn repeats_every_period(t in 0.0f32..10.0, period in 0.5f32..5.0) {
            let osc = oscillator(period);
            let a = osc.position_at(t);
            let b = osc.position_at(t + period);
            prop_assert!(a.abs_diff_eq(b, 1e-3));
        }
    }
}
