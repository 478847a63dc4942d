//! Pulse animation of the circle field.
//!
//! A single clock value, `increment`, advances by a fixed `delta` per frame
//! and never resets. Each circle's rendered scale is
//! `lerp(sin(2π·(increment - phase) / period), [-1, 1] → [0, 1])`, where the
//! phase is the circle's sampled scale. Circles from brighter texture bands
//! therefore pulse at a different phase than their neighbours, while colors
//! stay fixed.

use heartfield_core::config::SceneConfig;
use heartfield_core::error::HeartfieldError;
use heartfield_core::math::{linear_interpolation, sinusoidal};
use heartfield_core::scene::FrameState;

use crate::field::CircleField;

/// Rendered scale of a circle with the given phase at clock value `increment`.
pub fn pulse_scale(increment: f64, phase: f64, period: f64) -> Result<f64, HeartfieldError> {
    let wave = sinusoidal(increment - phase, 1.0, period)?;
    linear_interpolation(wave, -1.0, 1.0, 0.0, 1.0)
}

/// The animation clock, passed by value instead of living in global state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationContext {
    increment: f64,
    delta: f64,
    period: f64,
}

impl AnimationContext {
    /// Creates a clock at `increment = 0`.
    ///
    /// Returns `HeartfieldError::ZeroPeriod` if `period == 0`.
    pub fn new(delta: f64, period: f64) -> Result<Self, HeartfieldError> {
        if period == 0.0 {
            return Err(HeartfieldError::ZeroPeriod);
        }
        Ok(Self {
            increment: 0.0,
            delta,
            period,
        })
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, HeartfieldError> {
        Self::new(config.delta, config.period)
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// The clock moved forward by `delta_time` increment units.
    #[must_use]
    pub fn advance(&self, delta_time: f64) -> Self {
        Self {
            increment: self.increment + delta_time,
            ..*self
        }
    }

    /// The clock one frame later.
    #[must_use]
    pub fn next_frame(&self) -> Self {
        self.advance(self.delta)
    }

    /// The clock as it stands after `frame` frames from zero.
    #[must_use]
    pub fn at_frame(&self, frame: u64) -> Self {
        Self {
            increment: self.delta * frame as f64,
            ..*self
        }
    }

    /// Rendered scale for a circle with `phase` at the current clock value.
    pub fn scale_for(&self, phase: f64) -> Result<f64, HeartfieldError> {
        pulse_scale(self.increment, phase, self.period)
    }

    /// Computes every circle's rendered scale at the current clock value.
    pub fn frame(&self, field: &CircleField) -> Result<FrameState, HeartfieldError> {
        let scales = field
            .cells()
            .iter()
            .map(|cell| self.scale_for(cell.scale))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FrameState {
            increment: self.increment,
            scales,
        })
    }
}

/// The frame shown before the first tick: every circle at its sampled scale.
pub fn initial_frame(field: &CircleField) -> FrameState {
    FrameState {
        increment: 0.0,
        scales: field.cells().iter().map(|c| c.scale).collect(),
    }
}
