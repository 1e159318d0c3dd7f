//! Configuration management for the skill matcher

use crate::error::{Result, SkillMatchError};
use crate::processing::types::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub ranking: RankingConfig,
    #[serde(default)]
    pub preferences: PreferenceConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub default_sort: SortKey,
    pub min_score: u8,
}

/// Standing candidate preferences, overridable per command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceConfig {
    pub role_keyword: Option<String>,
    pub work_mode: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ranking: RankingConfig {
                default_limit: 20,
                max_limit: 100,
                default_sort: SortKey::Match,
                min_score: 0,
            },
            preferences: PreferenceConfig::default(),
            input: InputConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SkillMatchError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillMatchError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillmatch")
            .join("config.toml")
    }

    /// Update a single value addressed by a dotted key, e.g. `ranking.default_limit`.
    ///
    /// The configuration is left untouched when the new value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        updated.apply(key, value)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "ranking.default_limit" => self.ranking.default_limit = parse_value(key, value)?,
            "ranking.max_limit" => self.ranking.max_limit = parse_value(key, value)?,
            "ranking.min_score" => {
                let score: u8 = parse_value(key, value)?;
                if score > 100 {
                    return Err(invalid_value(key, value));
                }
                self.ranking.min_score = score;
            }
            "ranking.default_sort" => {
                self.ranking.default_sort = value.parse().map_err(|_| invalid_value(key, value))?
            }
            "preferences.role_keyword" => self.preferences.role_keyword = optional(value),
            "preferences.work_mode" => self.preferences.work_mode = optional(value),
            "preferences.location" => self.preferences.location = optional(value),
            "input.enable_caching" => self.input.enable_caching = parse_value(key, value)?,
            "output.format" => self.output.format = parse_output_format(value).map_err(SkillMatchError::Configuration)?,
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(SkillMatchError::Configuration(format!("Unknown configuration key: {}", key)))
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.ranking.default_limit == 0 || self.ranking.default_limit > self.ranking.max_limit {
            return Err(SkillMatchError::Configuration(format!(
                "ranking.default_limit must be between 1 and {}",
                self.ranking.max_limit
            )));
        }
        Ok(())
    }

    /// Clamp a requested result limit into the configured bounds
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.ranking.default_limit)
            .clamp(1, self.ranking.max_limit.max(1))
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid_value(key, value))
}

fn invalid_value(key: &str, value: &str) -> SkillMatchError {
    SkillMatchError::Configuration(format!("Invalid value for {}: {}", key, value))
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
