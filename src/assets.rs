//! Asset loading with embedded fallbacks
//!
//! The frontend bundle and the default `config.yaml` are compiled into the
//! binary. Either can be overridden from the filesystem:
//!
//! - If an env var is NOT set: use embedded assets only (no filesystem access)
//! - If `CONFIG_FILE` is set and the file exists: read it, else fall back to embedded
//! - If `FRONTEND_DIR` is set and the directory exists: the router serves it
//!   from disk instead of the embedded bundle

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded frontend bundle (HTML, JS, CSS)
#[derive(RustEmbed)]
#[folder = "frontend/"]
struct EmbeddedFrontend;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "defaults/"]
#[include = "*.yaml"]
struct EmbeddedConfig;

const DEFAULT_FRONTEND_DIR: &str = "frontend";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Frontend,
    Config,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// A frontend file resolved from the embedded bundle
#[derive(Debug, Clone)]
pub struct FrontendAsset {
    pub data: Cow<'static, [u8]>,
    pub mime: String,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External frontend directory (from FRONTEND_DIR env var)
    frontend_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(frontend_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            frontend_dir,
            config_file,
        }
    }

    /// Build a loader from `FRONTEND_DIR` and `CONFIG_FILE`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("FRONTEND_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// The frontend directory to serve from disk, if configured and present.
    pub fn frontend_override(&self) -> Option<&Path> {
        self.frontend_dir
            .as_deref()
            .filter(|dir| dir.is_dir())
    }

    /// Look up a file in the embedded frontend bundle.
    ///
    /// The empty path and paths ending in `/` resolve to `index.html`.
    pub fn embedded_frontend(path: &str) -> Option<FrontendAsset> {
        let path = path.trim_start_matches('/');
        let resolved: Cow<'_, str> = if path.is_empty() || path.ends_with('/') {
            Cow::Owned(format!("{path}index.html"))
        } else {
            Cow::Borrowed(path)
        };

        EmbeddedFrontend::get(&resolved).map(|file| {
            tracing::trace!(path = %resolved, "Serving frontend file from embedded assets");
            FrontendAsset {
                mime: file.metadata.mimetype().to_string(),
                data: file.data,
            }
        })
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get(DEFAULT_CONFIG_FILE)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// List embedded files for a category
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        let mut files: Vec<String> = match category {
            AssetCategory::Frontend => EmbeddedFrontend::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => EmbeddedConfig::iter().map(|s| s.to_string()).collect(),
        };
        files.sort();
        files
    }

    /// Extract embedded assets to the filesystem for customization
    ///
    /// Targets the configured paths, or `./frontend` and `./config.yaml`
    /// when unset. Existing files are skipped unless `force` is true.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Frontend => {
                    let dir = self
                        .frontend_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR));
                    fs::create_dir_all(&dir)?;
                    for file in EmbeddedFrontend::iter() {
                        if let Some(data) = EmbeddedFrontend::get(&file) {
                            let path = dir.join(file.as_ref());
                            if let Some(parent) = path.parent() {
                                fs::create_dir_all(parent)?;
                            }
                            Self::write_asset(&path, &data.data, force, &mut report)?;
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
                    if let Some(data) = EmbeddedConfig::get(DEFAULT_CONFIG_FILE) {
                        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                            fs::create_dir_all(parent)?;
                        }
                        Self::write_asset(&path, &data.data, force, &mut report)?;
                    }
                }
            }
        }

        Ok(report)
    }

    fn write_asset(
        path: &Path,
        data: &[u8],
        force: bool,
        report: &mut InitReport,
    ) -> io::Result<()> {
        let display = path.display().to_string();
        if path.exists() && !force {
            report.skipped.push(display);
            return Ok(());
        }
        fs::write(path, data)?;
        report.written.push(display);
        Ok(())
    }
}
