use crate::assets::AssetLoader;
use crate::error::TintError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Candidates kept per fuzzy scorer before merging (`null` keeps all)
    #[serde(default = "default_match_limit")]
    pub match_limit: Option<usize>,

    /// Load the bundled color systems (en, de, ral)
    #[serde(default = "default_load_defaults")]
    pub load_defaults: bool,

    /// Additional color systems: system id -> color definition file
    #[serde(default)]
    pub systems: BTreeMap<String, PathBuf>,
}

fn default_match_limit() -> Option<usize> {
    Some(5)
}

fn default_load_defaults() -> bool {
    true
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, TintError> {
        serde_yaml::from_str(content).map_err(|e| TintError::Config(e.to_string()))
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        match_limit = ?config.match_limit,
                        load_defaults = config.load_defaults,
                        systems = config.systems.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            match_limit: default_match_limit(),
            load_defaults: default_load_defaults(),
            systems: BTreeMap::new(),
        }
    }
}
