use crate::assets::AssetMap;
use crate::validator::DEFAULT_READINESS_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Readiness threshold must be in (0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
}

/// Startup configuration. Every field is optional in the YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model_path: PathBuf,
    pub encoder_path: PathBuf,
    /// Image paths in the asset map are relative to this directory
    pub asset_dir: PathBuf,
    pub readiness_threshold: f64,
    /// Per-role overrides merged over the built-in image map
    pub images: BTreeMap<String, String>,
    pub roadmaps: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("career_recommendation_model.json"),
            encoder_path: PathBuf::from("label_encoder.json"),
            asset_dir: PathBuf::from("."),
            readiness_threshold: DEFAULT_READINESS_THRESHOLD,
            images: BTreeMap::new(),
            roadmaps: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.readiness_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::InvalidThreshold(t));
        }
        Ok(())
    }

    /// Built-in asset map with this config's overrides applied
    pub fn asset_map(&self) -> AssetMap {
        let overrides = AssetMap {
            images: self.images.clone(),
            roadmaps: self.roadmaps.clone(),
        };
        AssetMap::builtin().merge(&overrides)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: Config = serde_yaml::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    log::info!("Loading config from {}", path.display());
    load_config(path)
}
