use hrc_engine::{CounterKind, IdentifierSpec, LevelConfig, LevelError, LevelSpec, LineEnding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// How a level obtains its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierMode {
    /// Use capture group 1 of the pattern.
    Capture,
    /// Count matches, restarting whenever the parent changes.
    Auto,
}

/// One `[[levels]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub pattern: String,
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    pub identifier: IdentifierMode,
    /// Counter alphabet for `auto` levels; numeric when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter: Option<CounterKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl LevelEntry {
    pub fn to_spec(&self) -> LevelSpec {
        let identifier = match self.identifier {
            IdentifierMode::Capture => IdentifierSpec::CaptureGroup,
            IdentifierMode::Auto => IdentifierSpec::AutoIncrement {
                kind: self.counter.unwrap_or_default(),
                start: self.start.clone(),
            },
        };
        LevelSpec {
            pattern: self.pattern.clone(),
            item_type: self.item_type.clone(),
            marker: self.marker.clone(),
            identifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub line_ending: LineEnding,
    #[serde(default = "default_byte_order_mark")]
    pub byte_order_mark: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::default(),
            byte_order_mark: default_byte_order_mark(),
        }
    }
}

fn default_byte_order_mark() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub levels: Vec<LevelEntry>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/hrc");
        PathBuf::from(config_dir.as_ref()).join("levels.toml")
    }

    pub fn level_specs(&self) -> Vec<LevelSpec> {
        self.levels.iter().map(LevelEntry::to_spec).collect()
    }

    /// Validates and compiles the configured levels.
    pub fn compile_levels(&self) -> Result<Vec<LevelConfig>, LevelError> {
        hrc_engine::compile_levels(&self.level_specs())
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
