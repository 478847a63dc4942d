//! Parametric heart outline.
//!
//! `x(θ) = 16·sin³θ`, `y(θ) = -(13cosθ - 5cos2θ - 2cos3θ - cos4θ)`, both scaled
//! by `amplitude · size`. The y term is negated so the tip points down in
//! screen coordinates. θ runs over `[0, 2π]` inclusive, so the first and last
//! vertices coincide (up to rounding) and the fill sees a zero-length closing
//! edge.

use std::f64::consts::TAU;

use heartfield_core::error::HeartfieldError;
use heartfield_core::math::linspace;
use heartfield_core::DVec2;

/// Fewest vertices a drawable curve may have.
pub const MIN_CURVE_POINTS: usize = 2;

/// An ordered outline in centered local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<DVec2>,
}

impl Curve {
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the curve shifted by `offset`.
    pub fn translated(&self, offset: DVec2) -> Curve {
        Curve {
            points: self.points.iter().map(|&p| p + offset).collect(),
        }
    }
}

/// Samples `points` vertices of the heart.
///
/// Returns `HeartfieldError::InvalidPointCount` if `points < 2`.
pub fn heart_curve(amplitude: f64, points: usize, size: f64) -> Result<Curve, HeartfieldError> {
    if points < MIN_CURVE_POINTS {
        return Err(HeartfieldError::InvalidPointCount {
            got: points,
            min: MIN_CURVE_POINTS,
        });
    }
    let k = amplitude * size;
    let points = linspace(0.0, TAU, points, true)
        .into_iter()
        .map(|theta| {
            let x = 16.0 * theta.sin().powi(3);
            let y = -(13.0 * theta.cos()
                - 5.0 * (2.0 * theta).cos()
                - 2.0 * (3.0 * theta).cos()
                - (4.0 * theta).cos());
            DVec2::new(x * k, y * k)
        })
        .collect();
    Ok(Curve { points })
}
