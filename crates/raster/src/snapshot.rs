//! PNG export of a [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on) so that consumers that only need
//! the rasterizer do not pull in the `image` crate.

use heartfield_core::buffer::PixelBuffer;
use heartfield_core::error::HeartfieldError;
use std::path::Path;

/// Writes the buffer as an RGBA PNG.
///
/// Returns `HeartfieldError::InvalidDimensions` if the dimensions overflow
/// `u32`, or `HeartfieldError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), HeartfieldError> {
    let w = u32::try_from(buffer.width()).map_err(|_| HeartfieldError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| HeartfieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, buffer.data().to_vec())
        .ok_or_else(|| HeartfieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| HeartfieldError::Io(format!("{}: {e}", path.display())))?;
    log::debug!("wrote {}x{} png to {}", w, h, path.display());
    Ok(())
}
