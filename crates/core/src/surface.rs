//! Rendering backend seam.
//!
//! The pipeline needs only a small capability set from a renderer: create an
//! offscreen target, fill polygons and circles into it, and read its pixels
//! back. [`Surface`] and [`Backend`] capture exactly that, so the scene crate
//! never depends on a particular rasterizer.
//!
//! Both traits are **object-safe**: the scene holds `&dyn Backend` and draws
//! through `&mut dyn Surface`.

use glam::DVec2;

use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::error::HeartfieldError;

/// A drawable pixel target.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Overwrites every pixel with `color`.
    fn clear(&mut self, color: Rgba);

    /// Fills the closed polygon through `points` (last vertex joins the first).
    ///
    /// Fewer than three vertices enclose no area and draw nothing.
    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba);

    /// Fills a disc of `radius` centered at `center`. Non-positive radii draw nothing.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Extracts the full RGBA contents.
    fn pixels(&self) -> PixelBuffer;
}

/// Factory for offscreen targets.
pub trait Backend {
    /// Creates a transparent target of the given size.
    ///
    /// Returns `HeartfieldError::InvalidDimensions` for an empty size.
    fn create_target(&self, width: usize, height: usize)
        -> Result<Box<dyn Surface>, HeartfieldError>;
}
