use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "addon-devtools.yaml";

/// Application configuration loaded from addon-devtools.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Color table generation
    pub colors: ColorsConfig,

    /// Alpha mask generation
    pub masks: MasksConfig,

    /// Locale synchronization
    pub locales: LocalesConfig,
}

/// Configuration for the OKLCH color table converter
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColorsConfig {
    /// CSS file with `--color-*: oklch(...)` declarations
    pub input: PathBuf,

    /// Generated Lua file
    pub output: PathBuf,

    /// Name of the Lua table local
    pub table_name: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tailwind-color.txt"),
            output: PathBuf::from("tailwind-color.lua"),
            table_name: "tailwindColor".to_string(),
        }
    }
}

/// Configuration for the mask generator
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MasksConfig {
    /// Directory receiving the numbered PNG files
    pub output_dir: PathBuf,

    /// Width and height of each mask in pixels
    pub size: u32,

    /// Number of masks to generate
    pub count: u32,
}

impl Default for MasksConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("masks"),
            size: 256,
            count: 127,
        }
    }
}

/// Configuration for the locale synchronizer
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LocalesConfig {
    /// Locale directory of the addon being patched
    pub target: PathBuf,

    /// Locale directories of projects to borrow translations from, in priority order
    pub sources: Vec<PathBuf>,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            target: PathBuf::from("Locales"),
            sources: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicitly requested file.
    ///
    /// Unlike [`AppConfig::discover`], a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `addon-devtools.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse a YAML document. Missing sections and fields take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as YAML null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
