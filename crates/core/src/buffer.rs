//! Row-major RGBA8 pixel buffer.
//!
//! A `PixelBuffer` stores `width * height * 4` bytes; the red channel of pixel
//! `(x, y)` lives at `(y * width + x) * 4`. Unlike a raw slice, every
//! coordinate access is bounds-checked so a mismatched sampling grid is
//! reported rather than reading a neighbouring row.

use crate::color::Rgba;
use crate::error::HeartfieldError;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An RGBA8 pixel buffer with checked coordinate access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent-black buffer of the given dimensions.
    ///
    /// Returns `HeartfieldError::InvalidDimensions` if either dimension is zero
    /// or if the byte length overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, HeartfieldError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wraps an existing RGBA8 byte vector, validating its length.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, HeartfieldError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(HeartfieldError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the raw RGBA bytes, for rasterizers writing whole spans.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the red channel of `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> Result<usize, HeartfieldError> {
        if x >= self.width || y >= self.height {
            return Err(HeartfieldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y * self.width + x) * CHANNELS)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Rgba, HeartfieldError> {
        let i = self.index(x, y)?;
        let px = &self.data[i..i + CHANNELS];
        Ok(Rgba {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    pub fn set(&mut self, x: usize, y: usize, color: Rgba) -> Result<(), HeartfieldError> {
        let i = self.index(x, y)?;
        self.data[i..i + CHANNELS].copy_from_slice(&[color.r, color.g, color.b, color.a]);
        Ok(())
    }

    /// Red channel of `(x, y)`.
    pub fn red(&self, x: usize, y: usize) -> Result<u8, HeartfieldError> {
        let i = self.index(x, y)?;
        Ok(self.data[i])
    }

    /// Fills every pixel with `color`.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Packs every pixel as `0x00RRGGBB`, dropping alpha.
    ///
    /// This is the layout framebuffer windows such as `minifb` display.
    pub fn to_packed_rgb(&self) -> Vec<u32> {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| crate::color::rgb_to_hex(px[0], px[1], px[2]))
            .collect()
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize, HeartfieldError> {
    if width == 0 || height == 0 {
        return Err(HeartfieldError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(HeartfieldError::InvalidDimensions)
}
