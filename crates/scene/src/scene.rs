//! The assembled heart scene.
//!
//! Construction runs the one-time pipeline (rasterize hearts → extract pixels
//! → build the circle field); afterwards only the animation clock moves.

use heartfield_core::color::Rgba;
use heartfield_core::config::SceneConfig;
use heartfield_core::error::HeartfieldError;
use heartfield_core::scene::{FrameState, Scene};
use heartfield_core::surface::{Backend, Surface};
use serde_json::Value;

use crate::animation::{initial_frame, AnimationContext};
use crate::field::{CircleField, FieldParams};
use crate::sampler::PixelSampler;
use crate::texture::{render_texture, TextureParams};

/// Heart texture sampled into an animated circle field.
#[derive(Debug, Clone)]
pub struct HeartScene {
    config: SceneConfig,
    texture: PixelSampler,
    field: CircleField,
    clock: AnimationContext,
    frame: FrameState,
}

impl HeartScene {
    /// Builds the scene, drawing the texture through `backend`.
    pub fn new(backend: &dyn Backend, config: SceneConfig) -> Result<Self, HeartfieldError> {
        config.validate()?;
        let target = render_texture(
            backend,
            config.width,
            config.height,
            &TextureParams::from(&config),
        )?;
        let texture = PixelSampler::extract(target.as_ref());
        let field = CircleField::build(&texture, &FieldParams::from(&config))?;
        let clock = AnimationContext::from_config(&config)?;
        let frame = initial_frame(&field);
        log::debug!(
            "scene ready: {}x{} canvas, {} circles",
            config.width,
            config.height,
            field.len()
        );
        Ok(Self {
            config,
            texture,
            field,
            clock,
            frame,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The extracted heart texture.
    pub fn texture(&self) -> &PixelSampler {
        &self.texture
    }

    pub fn field(&self) -> &CircleField {
        &self.field
    }

    pub fn clock(&self) -> AnimationContext {
        self.clock
    }

    /// The frame `delta_time` increment units past the pending clock value,
    /// without moving the scene's own clock.
    pub fn advance(&self, delta_time: f64) -> Result<FrameState, HeartfieldError> {
        self.clock.advance(delta_time).frame(&self.field)
    }

    /// Shows absolute frame number `frame` (clock at `delta · frame`); the
    /// next `step` shows `frame + 1`.
    pub fn seek(&mut self, frame: u64) -> Result<(), HeartfieldError> {
        let clock = self.clock.at_frame(frame);
        self.frame = clock.frame(&self.field)?;
        self.clock = clock.next_frame();
        Ok(())
    }

    fn background(&self) -> Rgba {
        self.config.background.to_rgba()
    }
}

impl Scene for HeartScene {
    /// Shows the frame at the pending clock value, then advances the clock.
    fn step(&mut self) -> Result<(), HeartfieldError> {
        self.frame = self.clock.frame(&self.field)?;
        self.clock = self.clock.next_frame();
        log::trace!("showing increment {:.4}", self.frame.increment);
        Ok(())
    }

    fn frame(&self) -> &FrameState {
        &self.frame
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), HeartfieldError> {
        render_frame(surface, &self.field, &self.frame, self.background())
    }

    fn params(&self) -> Value {
        self.config.to_json()
    }

    fn param_schema(&self) -> Value {
        SceneConfig::schema()
    }
}

/// Clears `surface` to `background` and draws every circle at its frame scale.
///
/// Returns `HeartfieldError::FrameMismatch` if the frame was computed for a
/// different field.
pub fn render_frame(
    surface: &mut dyn Surface,
    field: &CircleField,
    frame: &FrameState,
    background: Rgba,
) -> Result<(), HeartfieldError> {
    if frame.scales.len() != field.len() {
        return Err(HeartfieldError::FrameMismatch {
            cells: field.len(),
            scales: frame.scales.len(),
        });
    }
    surface.clear(background);
    for (cell, &scale) in field.cells().iter().zip(&frame.scales) {
        surface.fill_circle(cell.position, cell.base_radius * scale, cell.color);
    }
    Ok(())
}
