#![deny(unsafe_code)]
//! The heart scene: nested hearts rasterized into an offscreen texture, the
//! texture's red channel sampled onto a grid of circles, and the circles
//! pulsed by a sinusoid whose phase is each circle's sampled value.
//!
//! Pipeline, run once by [`HeartScene::new`]:
//!
//! 1. [`curve`] samples heart outlines.
//! 2. [`texture`] fills them, largest first, into a backend target.
//! 3. [`sampler`] extracts the target's pixels.
//! 4. [`field`] lays out and colors the circle grid.
//!
//! Per frame, [`animation`] turns the clock into one scale per circle and
//! [`scene::render_frame`] composites them.

pub mod animation;
pub mod curve;
pub mod field;
pub mod sampler;
pub mod scene;
pub mod texture;

pub use animation::{pulse_scale, AnimationContext};
pub use curve::{heart_curve, Curve};
pub use field::{CircleCell, CircleField, FieldParams, FieldStats};
pub use sampler::PixelSampler;
pub use scene::{render_frame, HeartScene};
pub use texture::{heart_instances, rasterize_hearts, render_texture, HeartInstance, TextureParams};
