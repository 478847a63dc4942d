//! Color types and conversion functions for heartfield.
//!
//! Three color types cover the pipeline: [`Srgb`] (float components, the
//! serializable form used in configuration), [`Hsl`] (the hue-driven model the
//! circle field colors itself with) and [`Rgba`] (8-bit channels as stored in
//! a [`PixelBuffer`](crate::buffer::PixelBuffer)). Packed `0xRRGGBB`
//! integers come from [`rgb_to_hex`].

use crate::error::HeartfieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Hue / saturation / lightness color.
///
/// `h` is in degrees and wraps around 360; `s` and `l` are percentages in
/// [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// 8-bit RGBA color, the unit a surface is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `HeartfieldError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, HeartfieldError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(HeartfieldError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| HeartfieldError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| HeartfieldError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| HeartfieldError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        let Rgba { r, g, b, .. } = self.to_rgba();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to an opaque [`Rgba`].
    pub fn to_rgba(self) -> Rgba {
        Rgba::opaque(
            clamp_channel(self.r * 255.0),
            clamp_channel(self.g * 255.0),
            clamp_channel(self.b * 255.0),
        )
    }

    /// Packs the quantized color as `0xRRGGBB`.
    pub fn to_packed(self) -> u32 {
        let Rgba { r, g, b, .. } = self.to_rgba();
        rgb_to_hex(r, g, b)
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Converts to sRGB using the standard chroma/hue-sector construction.
    ///
    /// Hue wraps modulo 360; saturation and lightness are clamped to [0, 100].
    pub fn to_srgb(self) -> Srgb {
        let h = self.h.rem_euclid(360.0);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        Srgb {
            r: r + m,
            g: g + m,
            b: b + m,
        }
    }

    pub fn to_hex(self) -> String {
        self.to_srgb().to_hex()
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpacks a `0xRRGGBB` integer into an opaque color. Bits above 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Self::opaque((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    pub fn to_packed(self) -> u32 {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

impl From<Srgb> for Rgba {
    fn from(c: Srgb) -> Self {
        c.to_rgba()
    }
}

/// Rounds and clamps an unbounded channel value into [0, 255].
///
/// NaN maps to 0.
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        value.round().clamp(0.0, 255.0) as u8
    }
}

/// Packs three channels as `(r << 16) | (g << 8) | b`.
///
/// Channels are `u8`, so the packed value never has overlapping bits; use
/// [`clamp_channel`] to bring computed values into range first.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> u32 {
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Hue of element `index` on a linear ramp from `hue_start` to `hue_end`.
///
/// `hue = hue_start + floor(index / total * (hue_end - hue_start))`.
/// `index == total` yields `hue_end`; larger indices extrapolate past it.
///
/// Returns `HeartfieldError::ZeroTotal` if `total == 0`.
pub fn ramp_hue(
    index: usize,
    total: usize,
    hue_start: f64,
    hue_end: f64,
) -> Result<f64, HeartfieldError> {
    if total == 0 {
        return Err(HeartfieldError::ZeroTotal);
    }
    let t = index as f64 / total as f64;
    Ok(hue_start + (t * (hue_end - hue_start)).floor())
}

/// Formats the ramp hue of `index` as a CSS-style `hsl(H, 100%, 50%)` string.
pub fn get_color(
    index: usize,
    total: usize,
    hue_start: f64,
    hue_end: f64,
) -> Result<String, HeartfieldError> {
    let hue = ramp_hue(index, total, hue_start, hue_end)?;
    Ok(format!("hsl({hue}, 100%, 50%)"))
}
