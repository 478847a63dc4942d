//! The grid of circles colored and scaled by the heart texture.
//!
//! Cells are stored densely in column-major order (all rows of the first
//! column, then the next column), which is the order they are built,
//! animated, and drawn in.

use heartfield_core::color::{Hsl, Rgba};
use heartfield_core::config::SceneConfig;
use heartfield_core::error::HeartfieldError;
use heartfield_core::DVec2;
use serde::Serialize;

use crate::sampler::PixelSampler;

/// Color parameters of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldParams {
    pub grid_divisions: usize,
    pub saturation: f64,
    pub lightness: f64,
}

impl From<&SceneConfig> for FieldParams {
    fn from(c: &SceneConfig) -> Self {
        Self {
            grid_divisions: c.grid_divisions,
            saturation: c.saturation,
            lightness: c.lightness,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::from(&SceneConfig::default())
    }
}

/// One circle of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCell {
    /// Center in canvas coordinates.
    pub position: DVec2,
    /// Radius at scale 1.
    pub base_radius: f64,
    /// Sampled red channel in [0, 1]; initial scale and animation phase.
    pub scale: f64,
    /// `round(scale · 360)`.
    pub hue: f64,
    pub color: Rgba,
}

/// Summary of a built field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    pub circles: usize,
    pub columns: usize,
    pub rows: usize,
    pub step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

#[derive(Debug, Clone)]
pub struct CircleField {
    cells: Vec<CircleCell>,
    columns: usize,
    rows: usize,
    step: f64,
}

/// Grid spacing: `max(width, height) / divisions`.
pub fn grid_step(width: usize, height: usize, divisions: usize) -> Result<f64, HeartfieldError> {
    if width == 0 || height == 0 {
        return Err(HeartfieldError::InvalidDimensions);
    }
    let longest = width.max(height);
    if divisions == 0 || divisions > longest {
        return Err(HeartfieldError::InvalidParam(format!(
            "grid_divisions must be in 1..={longest}, got {divisions}"
        )));
    }
    Ok(longest as f64 / divisions as f64)
}

/// Positions `step, 2·step, …` accumulated by repeated addition up to and
/// including `extent`, keeping only those whose floored pixel lies inside
/// `[0, extent)`.
fn grid_axis(step: f64, extent: usize) -> Vec<f64> {
    std::iter::successors(Some(step), |v| Some(v + step))
        .take_while(|&v| v <= extent as f64)
        .filter(|&v| (v.floor() as usize) < extent)
        .collect()
}

impl CircleField {
    /// Lays out the grid over the sampler's canvas and samples each cell.
    pub fn build(sampler: &PixelSampler, params: &FieldParams) -> Result<Self, HeartfieldError> {
        let width = sampler.width();
        let height = sampler.height();
        let step = grid_step(width, height, params.grid_divisions)?;
        let xs = grid_axis(step, width);
        let ys = grid_axis(step, height);

        let mut cells = Vec::with_capacity(xs.len() * ys.len());
        for &x in &xs {
            for &y in &ys {
                let scale = sampler.scale_at(x.floor() as usize, y.floor() as usize)?;
                let hue = (scale * 360.0).round();
                let color = Hsl::new(hue, params.saturation, params.lightness)
                    .to_srgb()
                    .to_rgba();
                cells.push(CircleCell {
                    position: DVec2::new(x, y),
                    base_radius: step / 2.0,
                    scale,
                    hue,
                    color,
                });
            }
        }
        log::debug!(
            "built circle field: {}x{} cells, step {step:.3}",
            xs.len(),
            ys.len()
        );
        Ok(Self {
            cells,
            columns: xs.len(),
            rows: ys.len(),
            step,
        })
    }

    pub fn cells(&self) -> &[CircleCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Cell at grid column `col`, row `row`.
    pub fn get(&self, col: usize, row: usize) -> Option<&CircleCell> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(col * self.rows + row)
    }

    pub fn stats(&self) -> FieldStats {
        let (min_scale, max_scale) = self
            .cells
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
                (lo.min(c.scale), hi.max(c.scale))
            });
        FieldStats {
            circles: self.cells.len(),
            columns: self.columns,
            rows: self.rows,
            step: self.step,
            min_scale: if self.cells.is_empty() { 0.0 } else { min_scale },
            max_scale: if self.cells.is_empty() { 0.0 } else { max_scale },
        }
    }
}
