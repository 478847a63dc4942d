#![deny(unsafe_code)]
//! Core types and traits for heartfield.
//!
//! Provides the numeric helpers (`linear_interpolation`, `linspace`,
//! `sinusoidal`), the color model (`Srgb`, `Hsl`, `Rgba`, `rgb_to_hex`,
//! `get_color`), the checked `PixelBuffer`, the `Surface`/`Backend` rendering
//! seam, the `Scene` trait, and `SceneConfig`.

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod math;
pub mod params;
pub mod scene;
pub mod surface;

pub use buffer::PixelBuffer;
pub use color::{get_color, rgb_to_hex, Hsl, Rgba, Srgb};
pub use config::SceneConfig;
pub use error::HeartfieldError;
pub use glam::DVec2;
pub use math::{linear_interpolation, linspace, sinusoidal};
pub use scene::{FrameState, Scene};
pub use surface::{Backend, Surface};
