//! Offscreen heart texture.
//!
//! Nested hearts are filled from the largest (index `heart_count - 1`, full
//! red) down to the smallest (index 0, black), so each smaller heart
//! overdraws the band inside it. The result is a set of concentric red bands
//! whose intensity grows outward; the circle field later reads that red
//! channel as its scale.

use heartfield_core::color::{rgb_to_hex, Rgba};
use heartfield_core::config::SceneConfig;
use heartfield_core::error::HeartfieldError;
use heartfield_core::surface::{Backend, Surface};
use heartfield_core::DVec2;

use crate::curve::heart_curve;

/// Parameters of the nested-heart pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureParams {
    pub heart_count: usize,
    pub base_amplitude: f64,
    pub point_count: usize,
    pub heart_size: f64,
}

impl From<&SceneConfig> for TextureParams {
    fn from(c: &SceneConfig) -> Self {
        Self {
            heart_count: c.heart_count,
            base_amplitude: c.base_amplitude,
            point_count: c.point_count,
            heart_size: c.heart_size,
        }
    }
}

impl Default for TextureParams {
    fn default() -> Self {
        Self::from(&SceneConfig::default())
    }
}

/// One heart of the pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartInstance {
    pub index: usize,
    pub amplitude: f64,
    pub color: Rgba,
}

/// Red intensity of heart `index`: `floor(index / (heart_count - 1) · 255)`.
///
/// A single-heart pattern has a zero-width ramp and gets 0.
pub fn heart_red(index: usize, heart_count: usize) -> u8 {
    if heart_count < 2 {
        return 0;
    }
    let t = index as f64 / (heart_count - 1) as f64;
    (t * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// All hearts in draw order (descending index).
pub fn heart_instances(params: &TextureParams) -> Vec<HeartInstance> {
    (0..params.heart_count)
        .rev()
        .map(|index| {
            let packed = rgb_to_hex(heart_red(index, params.heart_count), 0, 0);
            HeartInstance {
                index,
                amplitude: params.base_amplitude + index as f64,
                color: Rgba::from_packed(packed),
            }
        })
        .collect()
}

/// Clears `surface` and fills every heart, centered on the surface.
pub fn rasterize_hearts(
    surface: &mut dyn Surface,
    params: &TextureParams,
) -> Result<(), HeartfieldError> {
    let center = DVec2::new(surface.width() as f64 / 2.0, surface.height() as f64 / 2.0);
    surface.clear(Rgba::TRANSPARENT);
    for heart in heart_instances(params) {
        let curve = heart_curve(heart.amplitude, params.point_count, params.heart_size)?;
        surface.fill_polygon(curve.translated(center).points(), heart.color);
    }
    log::debug!(
        "rasterized {} hearts into {}x{} texture",
        params.heart_count,
        surface.width(),
        surface.height()
    );
    Ok(())
}

/// Creates an offscreen target from `backend` and rasterizes the pattern into it.
pub fn render_texture(
    backend: &dyn Backend,
    width: usize,
    height: usize,
    params: &TextureParams,
) -> Result<Box<dyn Surface>, HeartfieldError> {
    let mut target = backend.create_target(width, height)?;
    rasterize_hearts(target.as_mut(), params)?;
    Ok(target)
}
