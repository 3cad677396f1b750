use crate::assets::AssetLoader;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Largest accepted request body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Largest decoded image in pixels, checked from the header before decoding
    #[serde(default = "default_max_decoded_pixels")]
    pub max_decoded_pixels: u64,

    /// Permissive CORS for all origins
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024 // 16 MiB
}

fn default_max_decoded_pixels() -> u64 {
    40_000_000
}

fn default_cors_permissive() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(
                        max_upload_bytes = config.max_upload_bytes,
                        max_decoded_pixels = config.max_decoded_pixels,
                        cors_permissive = config.cors_permissive,
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

    /// Parse YAML; an empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            max_decoded_pixels: default_max_decoded_pixels(),
            cors_permissive: default_cors_permissive(),
        }
    }
}
