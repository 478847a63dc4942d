//! Scene configuration assembled from command-line options.
//!
//! Precedence, lowest to highest: built-in defaults, the `--config` JSON file,
//! the inline `--params` JSON object, then `-W`/`-H`.

use clap::Args;
use heartfield_core::SceneConfig;
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

/// Options shared by every subcommand that builds a scene.
#[derive(Args, Debug, Clone, Default)]
pub struct SceneArgs {
    /// Canvas width in pixels (overrides config).
    #[arg(short = 'W', long)]
    pub width: Option<usize>,

    /// Canvas height in pixels (overrides config).
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// JSON configuration file; missing keys take defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene parameters as a JSON object, applied over the config file.
    #[arg(long, default_value = "{}")]
    pub params: String,
}

impl SceneArgs {
    pub fn resolve(&self) -> Result<SceneConfig, CliError> {
        let base = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                SceneConfig::from_json_str(&text)
                    .map_err(|e| CliError::Input(format!("{}: {e}", path.display())))?
            }
            None => SceneConfig::default(),
        };

        let params: serde_json::Value = serde_json::from_str(&self.params)
            .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
        let mut config = base.apply_json(&params)?;

        if let Some(w) = self.width {
            config.width = w;
        }
        if let Some(h) = self.height {
            config.height = h;
        }
        config.validate()?;
        log::debug!("resolved config: {}", config.to_json());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SceneArgs {
        SceneArgs {
            params: "{}".into(),
            ..SceneArgs::default()
        }
    }

    #[test]
    fn no_options_yield_defaults() {
        assert_eq!(args().resolve().unwrap(), SceneConfig::default());
    }

    #[test]
    fn params_override_defaults_and_dimensions_override_params() {
        let a = SceneArgs {
            width: Some(300),
            params: r#"{"width": 100, "height": 200, "heart_count": 5}"#.into(),
            ..args()
        };
        let c = a.resolve().unwrap();
        assert_eq!((c.width, c.height, c.heart_count), (300, 200, 5));
    }

    #[test]
    fn config_file_is_layered_under_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        fs::write(&path, r#"{"grid_divisions": 30, "period": 0.8}"#).unwrap();
        let a = SceneArgs {
            config: Some(path),
            params: r#"{"period": 1.2}"#.into(),
            ..args()
        };
        let c = a.resolve().unwrap();
        assert_eq!(c.grid_divisions, 30);
        assert!((c.period - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = SceneArgs {
            config: Some(dir.path().join("nope.json")),
            ..args()
        };
        assert_eq!(a.resolve().unwrap_err().exit_code(), 11);
    }

    #[test]
    fn malformed_inputs_are_input_errors() {
        let bad_json = SceneArgs {
            params: "{oops".into(),
            ..args()
        };
        assert_eq!(bad_json.resolve().unwrap_err().exit_code(), 12);

        let wrong_type = SceneArgs {
            params: r#"{"heart_count": "lots"}"#.into(),
            ..args()
        };
        assert_eq!(wrong_type.resolve().unwrap_err().exit_code(), 12);
    }

    #[test]
    fn invalid_values_fail_validation() {
        let a = SceneArgs {
            width: Some(0),
            ..args()
        };
        assert_eq!(a.resolve().unwrap_err().exit_code(), 10);
    }
}
