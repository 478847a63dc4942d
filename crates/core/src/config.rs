//! Scene configuration.
//!
//! [`SceneConfig::default`] reproduces the classic piece: a 900×900 canvas,
//! 48 nested hearts, a 90-division circle grid, and a 0.4-period pulse that
//! advances 0.005 per frame. Configurations deserialize from JSON files with
//! any subset of keys (the rest take defaults) and can be overridden by an
//! inline JSON object via [`SceneConfig::apply_json`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::color::Srgb;
use crate::error::HeartfieldError;
use crate::params::{param_color, param_f64, param_usize};

pub const DEFAULT_WIDTH: usize = 900;
pub const DEFAULT_HEIGHT: usize = 900;
/// Number of nested hearts drawn into the texture.
pub const DEFAULT_HEART_COUNT: usize = 48;
/// Amplitude of the innermost heart; heart `i` uses `base + i`.
pub const DEFAULT_BASE_AMPLITUDE: f64 = 1.0;
/// Vertices per heart outline.
pub const DEFAULT_POINT_COUNT: usize = 100;
/// Uniform scale applied to every heart.
pub const DEFAULT_HEART_SIZE: f64 = 2.0;
/// The grid step is `max(width, height) / grid_divisions`.
pub const DEFAULT_GRID_DIVISIONS: usize = 90;
pub const DEFAULT_SATURATION: f64 = 70.0;
pub const DEFAULT_LIGHTNESS: f64 = 50.0;
/// Pulse period in increment units.
pub const DEFAULT_PERIOD: f64 = 0.4;
/// Increment added per frame.
pub const DEFAULT_DELTA: f64 = 0.005;

/// Every tunable constant of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub width: usize,
    pub height: usize,
    pub heart_count: usize,
    pub base_amplitude: f64,
    pub point_count: usize,
    pub heart_size: f64,
    pub grid_divisions: usize,
    pub saturation: f64,
    pub lightness: f64,
    pub period: f64,
    pub delta: f64,
    pub background: Srgb,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            heart_count: DEFAULT_HEART_COUNT,
            base_amplitude: DEFAULT_BASE_AMPLITUDE,
            point_count: DEFAULT_POINT_COUNT,
            heart_size: DEFAULT_HEART_SIZE,
            grid_divisions: DEFAULT_GRID_DIVISIONS,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            period: DEFAULT_PERIOD,
            delta: DEFAULT_DELTA,
            background: Srgb::BLACK,
        }
    }
}

impl SceneConfig {
    /// Builds a configuration from a JSON params object, falling back to
    /// defaults for missing keys.
    pub fn from_json(params: &Value) -> Result<Self, HeartfieldError> {
        Self::default().apply_json(params)
    }

    /// Returns a copy with every key present in `params` overriding `self`.
    pub fn apply_json(&self, params: &Value) -> Result<Self, HeartfieldError> {
        Ok(Self {
            width: param_usize(params, "width", self.width)?,
            height: param_usize(params, "height", self.height)?,
            heart_count: param_usize(params, "heart_count", self.heart_count)?,
            base_amplitude: param_f64(params, "base_amplitude", self.base_amplitude)?,
            point_count: param_usize(params, "point_count", self.point_count)?,
            heart_size: param_f64(params, "heart_size", self.heart_size)?,
            grid_divisions: param_usize(params, "grid_divisions", self.grid_divisions)?,
            saturation: param_f64(params, "saturation", self.saturation)?,
            lightness: param_f64(params, "lightness", self.lightness)?,
            period: param_f64(params, "period", self.period)?,
            delta: param_f64(params, "delta", self.delta)?,
            background: param_color(params, "background", self.background)?,
        })
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, HeartfieldError> {
        serde_json::from_str(text).map_err(|e| HeartfieldError::InvalidParam(e.to_string()))
    }

    /// Checks the preconditions the pipeline relies on.
    pub fn validate(&self) -> Result<(), HeartfieldError> {
        if self.width == 0 || self.height == 0 {
            return Err(HeartfieldError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(HeartfieldError::InvalidDimensions)?;
        if self.heart_count == 0 {
            return Err(HeartfieldError::InvalidParam(
                "heart_count must be at least 1".into(),
            ));
        }
        if self.point_count < 2 {
            return Err(HeartfieldError::InvalidPointCount {
                got: self.point_count,
                min: 2,
            });
        }
        let longest = self.width.max(self.height);
        if self.grid_divisions == 0 || self.grid_divisions > longest {
            return Err(HeartfieldError::InvalidParam(format!(
                "grid_divisions must be in 1..={longest}, got {}",
                self.grid_divisions
            )));
        }
        if self.period == 0.0 {
            return Err(HeartfieldError::ZeroPeriod);
        }
        let finite = [
            ("base_amplitude", self.base_amplitude),
            ("heart_size", self.heart_size),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
            ("period", self.period),
            ("delta", self.delta),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(HeartfieldError::InvalidParam(format!(
                "{name} must be finite"
            )));
        }
        Ok(())
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "width": self.width,
            "height": self.height,
            "heart_count": self.heart_count,
            "base_amplitude": self.base_amplitude,
            "point_count": self.point_count,
            "heart_size": self.heart_size,
            "grid_divisions": self.grid_divisions,
            "saturation": self.saturation,
            "lightness": self.lightness,
            "period": self.period,
            "delta": self.delta,
            "background": self.background.to_hex(),
        })
    }

    /// Schema describing all parameters, their types, ranges, and defaults.
    pub fn schema() -> Value {
        json!({
            "width": {
                "type": "integer",
                "default": DEFAULT_WIDTH,
                "min": 1,
                "description": "Canvas width in pixels"
            },
            "height": {
                "type": "integer",
                "default": DEFAULT_HEIGHT,
                "min": 1,
                "description": "Canvas height in pixels"
            },
            "heart_count": {
                "type": "integer",
                "default": DEFAULT_HEART_COUNT,
                "min": 1,
                "description": "Number of nested hearts rasterized into the texture"
            },
            "base_amplitude": {
                "type": "number",
                "default": DEFAULT_BASE_AMPLITUDE,
                "description": "Amplitude of the innermost heart"
            },
            "point_count": {
                "type": "integer",
                "default": DEFAULT_POINT_COUNT,
                "min": 2,
                "description": "Vertices per heart outline"
            },
            "heart_size": {
                "type": "number",
                "default": DEFAULT_HEART_SIZE,
                "description": "Uniform heart scale"
            },
            "grid_divisions": {
                "type": "integer",
                "default": DEFAULT_GRID_DIVISIONS,
                "min": 1,
                "description": "Grid step is max(width, height) / grid_divisions"
            },
            "saturation": {
                "type": "number",
                "default": DEFAULT_SATURATION,
                "min": 0.0,
                "max": 100.0,
                "description": "Circle color saturation (percent)"
            },
            "lightness": {
                "type": "number",
                "default": DEFAULT_LIGHTNESS,
                "min": 0.0,
                "max": 100.0,
                "description": "Circle color lightness (percent)"
            },
            "period": {
                "type": "number",
                "default": DEFAULT_PERIOD,
                "description": "Pulse period in increment units (non-zero)"
            },
            "delta": {
                "type": "number",
                "default": DEFAULT_DELTA,
                "description": "Increment added per frame"
            },
            "background": {
                "type": "string",
                "default": "#000000",
                "description": "Frame background color"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_piece() {
        let c = SceneConfig::default();
        assert_eq!((c.width, c.height), (900, 900));
        assert_eq!(c.heart_count, 48);
        assert_eq!(c.point_count, 100);
        assert_eq!(c.grid_divisions, 90);
        assert!((c.period - 0.4).abs() < f64::EPSILON);
        assert!((c.delta - 0.005).abs() < f64::EPSILON);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn from_json_overrides_only_given_keys() {
        let c = SceneConfig::from_json(&json!({"width": 320, "period": 1.0})).unwrap();
        assert_eq!(c.width, 320);
        assert_eq!(c.height, DEFAULT_HEIGHT);
        assert!((c.period - 1.0).abs() < f64::EPSILON);
        assert_eq!(c.heart_count, DEFAULT_HEART_COUNT);
    }

    #[test]
    fn apply_json_layers_over_existing_config() {
        let base = SceneConfig {
            width: 100,
            ..SceneConfig::default()
        };
        let c = base.apply_json(&json!({"height": 50})).unwrap();
        assert_eq!((c.width, c.height), (100, 50));
    }

    #[test]
    fn from_json_reports_wrong_types() {
        assert!(matches!(
            SceneConfig::from_json(&json!({"heart_count": "many"})),
            Err(HeartfieldError::InvalidParam(_))
        ));
    }

    #[test]
    fn from_json_str_accepts_partial_documents() {
        let c = SceneConfig::from_json_str(r##"{"grid_divisions": 30, "background": "#ffffff"}"##)
            .unwrap();
        assert_eq!(c.grid_divisions, 30);
        assert_eq!(c.background.to_hex(), "#ffffff");
        assert_eq!(c.width, DEFAULT_WIDTH);
    }

    #[test]
    fn from_json_str_rejects_malformed_documents() {
        assert!(matches!(
            SceneConfig::from_json_str("{width: }"),
            Err(HeartfieldError::InvalidParam(_))
        ));
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let zero_w = SceneConfig {
            width: 0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            zero_w.validate(),
            Err(HeartfieldError::InvalidDimensions)
        ));

        let one_point = SceneConfig {
            point_count: 1,
            ..SceneConfig::default()
        };
        assert!(matches!(
            one_point.validate(),
            Err(HeartfieldError::InvalidPointCount { got: 1, min: 2 })
        ));

        let zero_period = SceneConfig {
            period: 0.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            zero_period.validate(),
            Err(HeartfieldError::ZeroPeriod)
        ));

        let no_grid = SceneConfig {
            grid_divisions: 0,
            ..SceneConfig::default()
        };
        assert!(no_grid.validate().is_err());

        let dense_grid = SceneConfig {
            grid_divisions: 1_000_000_000,
            ..SceneConfig::default()
        };
        assert!(matches!(
            dense_grid.validate(),
            Err(HeartfieldError::InvalidParam(_))
        ));
        let finest = SceneConfig {
            grid_divisions: 900,
            ..SceneConfig::default()
        };
        assert!(finest.validate().is_ok());

        let nan_size = SceneConfig {
            heart_size: f64::NAN,
            ..SceneConfig::default()
        };
        assert!(nan_size.validate().is_err());
    }

    #[test]
    fn to_json_round_trips_through_from_json() {
        let original = SceneConfig {
            width: 640,
            heart_count: 7,
            background: Srgb::from_hex("#abcdef").unwrap(),
            ..SceneConfig::default()
        };
        let back = SceneConfig::from_json(&original.to_json()).unwrap();
        assert_eq!(back.width, 640);
        assert_eq!(back.heart_count, 7);
        assert_eq!(back.background.to_hex(), "#abcdef");
    }

    #[test]
    fn schema_lists_every_parameter() {
        let schema = SceneConfig::schema();
        let params = SceneConfig::default().to_json();
        for key in params.as_object().unwrap().keys() {
            assert!(schema.get(key).is_some(), "schema missing {key}");
        }
    }
}
