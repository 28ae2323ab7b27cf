//! TOML configuration for the `soc` binary.
//!
//! ```toml
//! [data]
//! structure = "data/structure.json"
//! index = "data/index.json"
//!
//! [lookup]
//! similarity = false
//! max_matches = 25
//! ```
//!
//! Relative data paths are resolved against the directory holding the config
//! file, so a config can be moved together with its tables.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "soc.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Structure table (JSON array of group rows).
    pub structure: PathBuf,
    /// Raw coding index (JSON array of `natural_word`/`add`/`ind` rows).
    pub index: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    #[serde(default)]
    pub similarity: bool,
    #[serde(default = "default_max_matches")]
    pub max_matches: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            similarity: false,
            max_matches: default_max_matches(),
        }
    }
}

fn default_max_matches() -> usize {
    25
}

/// Find `name` in the working directory, then `base`, then the home directory.
///
/// Absolute paths are returned only when they exist.
pub fn locate_file(name: &Path, base: Option<&Path>) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut candidates = Vec::with_capacity(3);
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(name));
    }
    if let Some(base) = base {
        candidates.push(base.join(name));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(name));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

pub fn load_config(path: &Path) -> Result<Config> {
    let path = locate_file(path, None)
        .with_context(|| format!("Config file not found: {}", path.display()))?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    config.data.structure = resolve_data_file(&config.data.structure, &base, "data.structure")?;
    config.data.index = resolve_data_file(&config.data.index, &base, "data.index")?;

    if config.lookup.max_matches == 0 {
        bail!("lookup.max_matches must be > 0");
    }

    Ok(config)
}

fn resolve_data_file(path: &Path, base: &Path, key: &str) -> Result<PathBuf> {
    // The config directory takes priority over the working directory here.
    if path.is_relative() {
        let beside = base.join(path);
        if beside.exists() {
            return Ok(beside);
        }
    }
    match locate_file(path, Some(base)) {
        Some(found) => Ok(found),
        None => bail!("{} not found: {}", key, path.display()),
    }
}
