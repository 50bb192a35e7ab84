use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use crate::core::{CompatibilityScorer, Matcher, Penalties, Vocabulary, VocabularyConfig, VocabularyError};

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read vocabulary file {path}: {source}")]
    VocabularyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid vocabulary file: {0}")]
    VocabularyParse(#[from] toml::de::Error),

    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default)]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0,
        }
    }
}

fn default_limit() -> u16 { 10 }
fn default_max_limit() -> u16 { 100 }

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit.max(1)) as usize
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub penalties: Penalties,
    /// Standalone TOML vocabulary; replaces the inline `[vocabulary]` table when set
    pub vocabulary_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMMATE_)
    pub fn load() -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ROOMMATE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolve the vocabulary, reading `scoring.vocabulary_file` when set
    pub fn vocabulary(&self) -> Result<Vocabulary, SettingsError> {
        let config = match &self.scoring.vocabulary_file {
            Some(path) => {
                let source = std::fs::read_to_string(path).map_err(|source| {
                    SettingsError::VocabularyFile {
                        path: path.clone(),
                        source,
                    }
                })?;
                tracing::info!("Loading vocabulary from {}", path);
                VocabularyConfig::from_toml_str(&source)?
            }
            None => self.vocabulary.clone(),
        };

        Ok(Vocabulary::from_config(&config)?)
    }

    /// Build the matcher described by these settings
    pub fn matcher(&self) -> Result<Matcher, SettingsError> {
        let scorer = CompatibilityScorer::new(self.vocabulary()?, self.scoring.penalties);
        Ok(Matcher::new(scorer, self.matching.min_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_penalties() {
        let settings = Settings::default();
        let penalties = settings.scoring.penalties;
        assert_eq!(penalties.budget_conflict_gap, 400);
        assert_eq!(penalties.budget_conflict, 25);
        assert_eq!(penalties.sleep_conflict, 20);
        assert_eq!(penalties.cleanliness_partial, 10);
        assert_eq!(penalties.social_partial, 5);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.effective_limit(None), 10);
        assert_eq!(matching.effective_limit(Some(500)), 100);
        assert_eq!(matching.effective_limit(Some(0)), 1);
    }

    #[test]
    fn test_partial_penalty_override() {
        let settings: Settings = Config::builder()
            .add_source(config::File::from_str(
                "[scoring.penalties]\nsleep_conflict = 30\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.scoring.penalties.sleep_conflict, 30);
        assert_eq!(settings.scoring.penalties.budget_conflict, 25);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_missing_vocabulary_file() {
        let mut settings = Settings::default();
        settings.scoring.vocabulary_file = Some("does/not/exist.toml".to_string());

        assert!(matches!(settings.vocabulary(), Err(SettingsError::VocabularyFile { .. })));
    }

    #[test]
    fn test_shipped_vocabulary_file() {
        let mut settings = Settings::default();
        settings.scoring.vocabulary_file = Some("config/vocabulary.toml".to_string());

        let vocabulary = settings.vocabulary().unwrap();
        assert!(vocabulary.study_conflict("Quiet Study", "Collaborative Study"));
        assert!(vocabulary.noise_conflict("Often has guests", "Rarely has guests"));
        assert_eq!(vocabulary.cleanliness_rank("Very Tidy"), 3);
    }

    #[test]
    fn test_matcher_from_defaults() {
        let matcher = Settings::default().matcher().unwrap();
        assert_eq!(matcher.scorer().penalties(), &Penalties::default());
    }
}
