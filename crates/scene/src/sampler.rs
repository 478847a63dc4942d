//! One-shot pixel extraction from the heart texture.
//!
//! The texture is never redrawn, so the sampler copies its pixels exactly once
//! and serves every later lookup from that copy.

use heartfield_core::buffer::PixelBuffer;
use heartfield_core::error::HeartfieldError;
use heartfield_core::math::linear_interpolation;
use heartfield_core::surface::Surface;

/// Read-only view of the extracted texture.
#[derive(Debug, Clone)]
pub struct PixelSampler {
    pixels: PixelBuffer,
}

impl PixelSampler {
    /// Extracts the full RGBA contents of `surface`.
    pub fn extract(surface: &dyn Surface) -> Self {
        Self {
            pixels: surface.pixels(),
        }
    }

    pub fn from_buffer(pixels: PixelBuffer) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Red-channel byte at `(x, y)`.
    pub fn red_at(&self, x: usize, y: usize) -> Result<u8, HeartfieldError> {
        self.pixels.red(x, y)
    }

    /// Red channel at `(x, y)` remapped from [0, 255] onto [0, 1].
    pub fn scale_at(&self, x: usize, y: usize) -> Result<f64, HeartfieldError> {
        let r = self.red_at(x, y)?;
        linear_interpolation(f64::from(r), 0.0, 255.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartfield_core::color::Rgba;
    use heartfield_raster::SoftwareSurface;

    fn sampler_with(x: usize, y: usize, color: Rgba) -> PixelSampler {
        let mut buffer = PixelBuffer::new(4, 3).unwrap();
        buffer.set(x, y, color).unwrap();
        PixelSampler::from_buffer(buffer)
    }

    #[test]
    fn extract_copies_surface_pixels() {
        let mut surface = SoftwareSurface::new(5, 5).unwrap();
        surface.clear(Rgba::opaque(51, 0, 0));
        let sampler = PixelSampler::extract(&surface);
        assert_eq!((sampler.width(), sampler.height()), (5, 5));
        assert_eq!(sampler.red_at(4, 4).unwrap(), 51);
    }

    #[test]
    fn extraction_is_a_snapshot() {
        let mut surface = SoftwareSurface::new(2, 2).unwrap();
        let sampler = PixelSampler::extract(&surface);
        surface.clear(Rgba::opaque(255, 255, 255));
        assert_eq!(sampler.red_at(0, 0).unwrap(), 0);
    }

    #[test]
    fn scale_maps_red_to_unit_interval() {
        let s = sampler_with(1, 2, Rgba::opaque(255, 9, 9));
        assert!((s.scale_at(1, 2).unwrap() - 1.0).abs() < 1e-12);
        assert!(s.scale_at(0, 0).unwrap().abs() < 1e-12);

        let half = sampler_with(0, 0, Rgba::opaque(51, 0, 0));
        assert!((half.scale_at(0, 0).unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn sampling_ignores_other_channels() {
        let s = sampler_with(3, 0, Rgba::opaque(0, 255, 255));
        assert_eq!(s.red_at(3, 0).unwrap(), 0);
    }

    #[test]
    fn out_of_bounds_is_reported() {
        let s = sampler_with(0, 0, Rgba::TRANSPARENT);
        assert!(!s.contains(4, 0));
        assert!(matches!(
            s.scale_at(4, 0),
            Err(HeartfieldError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        ));
        assert!(s.red_at(0, 3).is_err());
    }
}
