//! Asset loading with embedded fallbacks
//!
//! The bundled color systems and the default config are compiled into the
//! binary. Each can be overridden from the filesystem:
//!
//! - If `TINT_DATA_DIR` is NOT set: use embedded datasets only (no filesystem access)
//! - If `TINT_DATA_DIR` IS set: `<dir>/<system>.txt` wins over the embedded file of
//!   the same name, and extra files in the directory add new systems
//! - `TINT_CONFIG` works the same way for config.yaml

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded color definition files, one per system
#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.txt"]
struct EmbeddedDatasets;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const DATASET_EXTENSION: &str = "txt";

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with merge behavior and optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External dataset directory (from TINT_DATA_DIR env var)
    data_dir: Option<PathBuf>,
    /// External config file path (from TINT_CONFIG env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(data_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            config_file,
        }
    }

    /// Loader that only ever reads embedded assets
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Loader configured from `TINT_DATA_DIR` and `TINT_CONFIG`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("TINT_DATA_DIR").ok().map(PathBuf::from),
            std::env::var("TINT_CONFIG").ok().map(PathBuf::from),
        )
    }

    fn system_of(file_name: &str) -> Option<&str> {
        let path = Path::new(file_name);
        if path.extension()? != DATASET_EXTENSION {
            return None;
        }
        path.file_stem()?.to_str()
    }

    /// All dataset system ids, embedded and external, sorted
    ///
    /// Sorting fixes the load order, which decides name collisions
    /// between systems.
    pub fn dataset_systems(&self) -> Vec<String> {
        let mut systems: BTreeSet<String> = EmbeddedDatasets::iter()
            .filter_map(|file| Self::system_of(&file).map(str::to_string))
            .collect();

        if let Some(ref dir) = self.data_dir {
            if let Ok(entries) = dir.read_dir() {
                for entry in entries.flatten() {
                    let name = entry.file_name();
                    if let Some(system) = name.to_str().and_then(Self::system_of) {
                        systems.insert(system.to_string());
                    }
                }
            }
        }

        systems.into_iter().collect()
    }

    /// Read the color definition file of a system
    ///
    /// If an external directory is configured, tries filesystem first, then
    /// falls back to embedded.
    pub fn read_dataset(&self, system: &str) -> io::Result<Cow<'static, [u8]>> {
        let file_name = format!("{system}.{DATASET_EXTENSION}");

        if let Some(ref dir) = self.data_dir {
            let full_path = dir.join(&file_name);
            if full_path.exists() {
                tracing::trace!(path = %full_path.display(), "Loading dataset from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedDatasets::get(&file_name)
            .map(|f| {
                tracing::trace!(system, "Loading dataset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Dataset not found: {file_name}"),
                )
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

        EmbeddedConfig::get("config.yaml")
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

    /// Resolve a path named in the config file
    ///
    /// Relative paths are taken relative to the directory of the external
    /// config file. Without one they stay relative to the working directory.
    pub fn resolve_config_path(&self, path: &Path) -> PathBuf {
        match self.config_file.as_deref().and_then(Path::parent) {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Extract embedded datasets and config to the filesystem (init command)
    ///
    /// Uses the configured paths, or `./data` and `./config.yaml` if unset.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        let dir = self
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("./data"));
        fs::create_dir_all(&dir)?;

        for file in EmbeddedDatasets::iter() {
            let path = dir.join(file.as_ref());
            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(data) = EmbeddedDatasets::get(&file) {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        let config_path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));
        if !force && config_path.exists() {
            report.skipped.push(config_path.display().to_string());
        } else {
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = EmbeddedConfig::get("config.yaml") {
                fs::write(&config_path, &*data.data)?;
                report.written.push(config_path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded dataset files (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedDatasets::iter().map(|s| s.to_string()).collect()
    }
}
