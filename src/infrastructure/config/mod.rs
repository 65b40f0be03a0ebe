// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Filesystem locations and pipeline knobs, layered from defaults,
// an optional TOML file, and SCINFORGE_-prefixed env vars

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "scinforge.toml";

/// Environment variable prefix for overrides, e.g.
/// `SCINFORGE_OUTPUT_JSONL=/tmp/out.jsonl`.
pub const ENV_PREFIX: &str = "SCINFORGE_";

/// Configuration for one corpus build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Case metadata CSV.
    pub cases_csv: PathBuf,

    /// Dermatologist label CSV.
    pub labels_csv: PathBuf,

    /// Root the relative image paths in the CSVs resolve against.
    pub dataset_root: PathBuf,

    /// Conversation corpus output (newline-delimited JSON).
    pub output_jsonl: PathBuf,

    /// Directory the referenced images are copied into.
    pub images_dir: PathBuf,

    /// Base path baked into each entry's image reference.
    pub image_base: String,

    /// Shot type kept for QA synthesis.
    pub shot_type: String,

    /// Optional sidecar with one description per image record.
    pub descriptions_jsonl: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            cases_csv: PathBuf::from("dataset/scin_cases.csv"),
            labels_csv: PathBuf::from("dataset/scin_labels.csv"),
            dataset_root: PathBuf::from("dataset"),
            output_jsonl: PathBuf::from("final_output.jsonl"),
            images_dir: PathBuf::from("dataset_images"),
            image_base: "llava".to_string(),
            shot_type: "CLOSE_UP".to_string(),
            descriptions_jsonl: None,
        }
    }
}

impl PipelineConfig {
    /// Load configuration: defaults, then the TOML file, then env vars.
    ///
    /// A missing default config file is fine; an explicitly named one
    /// must exist.
    pub fn load(toml_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = toml_path {
            if !path.exists() {
                return Err(AppError::NotFound(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
        }

        let toml = toml_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(toml))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.shot_type.trim().is_empty() {
            return Err(AppError::ValidationError(
                "shot_type must not be empty".to_string(),
            ));
        }
        if self.image_base.trim().is_empty() {
            return Err(AppError::ValidationError(
                "image_base must not be empty".to_string(),
            ));
        }
        if self.cases_csv.as_os_str().is_empty() || self.labels_csv.as_os_str().is_empty() {
            return Err(AppError::ValidationError(
                "cases_csv and labels_csv must be set".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load_without_config_file() {
        let config = PipelineConfig::load(None).unwrap();

        assert_eq!(config.shot_type, "CLOSE_UP");
        assert_eq!(config.output_jsonl, PathBuf::from("final_output.jsonl"));
        assert!(config.descriptions_jsonl.is_none());
    }

    #[test]
    fn test_toml_and_env_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "scinforge.toml",
                r#"
                    shot_type = "WIDE"
                    image_base = "corpus/images"
                "#,
            )?;
            jail.set_env("SCINFORGE_SHOT_TYPE", "CLOSE_UP");

            let config = PipelineConfig::load(None).expect("config loads");

            // Env beats TOML, TOML beats defaults.
            assert_eq!(config.shot_type, "CLOSE_UP");
            assert_eq!(config.image_base, "corpus/images");
            assert_eq!(config.dataset_root, PathBuf::from("dataset"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_config_file_rejected() {
        let result = PipelineConfig::load(Some(Path::new("/nonexistent/scinforge.toml")));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_validate_rejects_blank_shot_type() {
        let config = PipelineConfig {
            shot_type: "  ".to_string(),
            ..PipelineConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_validates() {
        assert!(PipelineConfig::default().validate().is_ok());
    }
}
