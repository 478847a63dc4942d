#![deny(unsafe_code)]
//! Software rendering backend for heartfield.
//!
//! [`SoftwareBackend`] implements the core `Backend`/`Surface` seam with a
//! center-sampled scanline rasterizer, so both the offscreen heart texture and
//! the visible circle frames are plain RGBA8 buffers. With the `png` feature
//! (default on) buffers can be written out via [`snapshot::write_png`].

pub mod surface;

#[cfg(feature = "png")]
pub mod snapshot;

pub use surface::{SoftwareBackend, SoftwareSurface};
