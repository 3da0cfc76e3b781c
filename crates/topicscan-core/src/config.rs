//! Layered analysis configuration and path helpers.
//!
//! Uses Figment to merge built-in defaults, `topicscan.toml`,
//! `topicscan.<env>.toml` (picked by `RUST_ENV`) and `TOPICSCAN_*` env vars.
//! Nested keys use a double underscore: `TOPICSCAN_HEADINGS__MAX=4`.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Result, TopicError};
use crate::types::Locale;

pub const CONFIG_FILE: &str = "topicscan.toml";
pub const ENV_PREFIX: &str = "TOPICSCAN_";

/// Inclusive range of heading levels treated as "top level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingLevels {
    pub min: u8,
    pub max: u8,
}

impl Default for HeadingLevels {
    fn default() -> Self { Self { min: 2, max: 3 } }
}

impl HeadingLevels {
    pub fn new(min: u8, max: u8) -> Result<Self> {
        let levels = Self { min, max };
        levels.validate()?;
        Ok(levels)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.min) || !(1..=6).contains(&self.max) {
            return Err(TopicError::InvalidConfig(format!("heading levels must be within 1..=6, got {}..={}", self.min, self.max)));
        }
        if self.min > self.max {
            return Err(TopicError::InvalidConfig(format!("heading level min {} exceeds max {}", self.min, self.max)));
        }
        Ok(())
    }

    pub fn contains(&self, level: u8) -> bool { (self.min..=self.max).contains(&level) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub headings: HeadingLevels,
    pub use_synonyms: bool,
    pub default_locale: Locale,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { headings: HeadingLevels::default(), use_synonyms: true, default_locale: Locale::default() }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> Result<Self> { Self::load_in(Path::new(".")) }

    /// Load config files from `base_dir` instead of the working directory.
    pub fn load_in(base_dir: &Path) -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base_dir.join(CONFIG_FILE)));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("topicscan.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("topicscan.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("topicscan.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    /// Layer `figment` over the defaults and validate the result.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(AnalysisConfig::default())).merge(figment);
        let config = Self { figment };
        config.analysis()?;
        Ok(config)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> { Self::from_figment(Figment::from(Toml::string(toml))) }

    pub fn analysis(&self) -> Result<AnalysisConfig> {
        let analysis: AnalysisConfig = self.figment.extract().map_err(|e| TopicError::InvalidConfig(e.to_string()))?;
        analysis.headings.validate()?;
        Ok(analysis)
    }
}

/// Expand `~` and `${VAR}`/`$VAR` in a user-provided path without touching the filesystem.
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
