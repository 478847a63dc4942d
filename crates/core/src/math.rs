//! Pure numeric helpers shared by the curve generator, the sampler and the
//! animation loop.
//!
//! The degenerate inputs that would otherwise produce NaN or infinity
//! (collapsed interpolation interval, zero period) are rejected with a
//! [`HeartfieldError`] instead.

use std::f64::consts::TAU;

use crate::error::HeartfieldError;

/// Affine map of `x` from the domain `[x1, x2]` onto the range `[y1, y2]`.
///
/// No domain check is made: values outside `[x1, x2]` extrapolate linearly,
/// which is how a sine output in [-1, 1] is remapped onto [0, 1].
///
/// Returns `HeartfieldError::DegenerateInterval` if `x1 == x2`.
pub fn linear_interpolation(
    x: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
) -> Result<f64, HeartfieldError> {
    if x1 == x2 {
        return Err(HeartfieldError::DegenerateInterval { bound: x1 });
    }
    Ok(y1 + (y2 - y1) * (x - x1) / (x2 - x1))
}

/// Produces exactly `num` evenly spaced values starting at `start`.
///
/// With `endpoint` the step is `(stop - start) / (num - 1)` and the last value
/// is `stop`; without it the step is `(stop - start) / num` and `stop` is
/// excluded. `num == 0` yields an empty vector and `num == 1` yields
/// `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize, endpoint: bool) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let div = if endpoint { num - 1 } else { num };
            let step = (stop - start) / div as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            if endpoint {
                values[num - 1] = stop;
            }
            values
        }
    }
}

/// Evaluates `amplitude * sin(2π·x / period)`.
///
/// Returns `HeartfieldError::ZeroPeriod` if `period == 0`.
pub fn sinusoidal(x: f64, amplitude: f64, period: f64) -> Result<f64, HeartfieldError> {
    if period == 0.0 {
        return Err(HeartfieldError::ZeroPeriod);
    }
    Ok(amplitude * (TAU * x / period).sin())
}
