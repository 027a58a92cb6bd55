use anyhow::{Context, Result, bail};
use declarative::{DEFAULT_CONTEXT_LINES, Resources, ResourcesDocument};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resource;

/// Get the config directory path
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("ciadmin"))
}

/// Expand `~` in a user-supplied path
pub fn expand(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    PathBuf::from(expanded)
}

// ============================================================================
// Settings
// ============================================================================

/// Defaults read from ~/.config/ciadmin/config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub diff: DiffSettings,
}

/// `[diff]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffSettings {
    pub ignore_descriptions: bool,
    pub ids_only: bool,
    pub context_lines: usize,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            ignore_descriptions: false,
            ids_only: false,
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(&expand(path)),
            None => Self::load_default(config_dir().ok()),
        }
    }

    /// Load `config.toml` from `dir`, falling back to the defaults
    fn load_default(dir: Option<PathBuf>) -> Result<Self> {
        let Some(dir) = dir else {
            log::debug!("No home directory, using default config");
            return Ok(Self::default());
        };
        let path = dir.join("config.toml");
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load settings from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML format in {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(settings)
    }
}

// ============================================================================
// Collection files
// ============================================================================

/// Collection file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Detect the format from the file extension
    pub fn detect(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => bail!(
                "Unsupported collection format '.{}' for {} (expected .json or .toml)",
                other,
                path.display()
            ),
            None => bail!(
                "Cannot detect collection format of {} (expected .json or .toml)",
                path.display()
            ),
        }
    }
}

/// Load and verify a collection file
pub fn load_resources(path: &Path) -> Result<Resources> {
    let path = expand(path);
    let format = FileFormat::detect(&path)?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    let document: ResourcesDocument = match format {
        FileFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON format in {}", path.display()))?,
        FileFormat::Toml => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML format in {}", path.display()))?,
    };

    let resources = Resources::from_structured(resource::registry(), document)
        .with_context(|| format!("Invalid resource collection in {}", path.display()))?;
    log::debug!(
        "Loaded {} resources ({} managed patterns) from {}",
        resources.len(),
        resources.managed().len(),
        path.display()
    );
    Ok(resources)
}
