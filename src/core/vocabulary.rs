use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Rank given to cleanliness labels missing from the vocabulary
pub const DEFAULT_CLEANLINESS_RANK: u8 = 2;

/// Errors that can occur when building a vocabulary from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("Blank label in {0}")]
    BlankLabel(&'static str),

    #[error("Cleanliness rank must be at least 1: {0}")]
    ZeroRank(String),

    #[error("Cleanliness label {label} has conflicting ranks {first} and {second}")]
    ConflictingRank { label: String, first: u8, second: u8 },

    #[error("Conflict pair in {table} names {label} twice")]
    SelfConflict { table: &'static str, label: String },
}

/// Cleanliness label and its tidiness rank (higher is tidier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanlinessLevel {
    pub label: String,
    pub rank: u8,
}

/// Categorical vocabulary as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub sleep_wildcards: Vec<String>,
    pub cleanliness: Vec<CleanlinessLevel>,
    pub default_cleanliness_rank: u8,
    pub study_conflicts: Vec<[String; 2]>,
    pub noise_conflicts: Vec<[String; 2]>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        let level = |label: &str, rank| CleanlinessLevel { label: label.to_string(), rank };
        let pair = |a: &str, b: &str| [a.to_string(), b.to_string()];

        Self {
            sleep_wildcards: vec!["Flexible".to_string()],
            cleanliness: vec![
                level("Very Tidy", 3),
                level("Tidy", 3),
                level("Moderately Tidy", 2),
                level("Average", 2),
                level("Relaxed", 1),
                level("Messy", 1),
            ],
            default_cleanliness_rank: DEFAULT_CLEANLINESS_RANK,
            study_conflicts: vec![
                pair("Library", "Late-night study"),
                pair("Online classes", "Late-night study"),
                pair("Group study", "Quiet study"),
            ],
            noise_conflicts: vec![pair("Quiet", "Loud"), pair("Moderate", "Loud")],
        }
    }
}

impl VocabularyConfig {
    /// Parse a standalone vocabulary file
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    fn validate(&self) -> Result<(), VocabularyError> {
        if self.sleep_wildcards.iter().any(|w| normalize_tag(w).is_empty()) {
            return Err(VocabularyError::BlankLabel("sleep_wildcards"));
        }
        if self.default_cleanliness_rank == 0 {
            return Err(VocabularyError::ZeroRank("default_cleanliness_rank".to_string()));
        }

        let mut ranks: HashMap<String, u8> = HashMap::new();
        for level in &self.cleanliness {
            let key = normalize_tag(&level.label);
            if key.is_empty() {
                return Err(VocabularyError::BlankLabel("cleanliness"));
            }
            if level.rank == 0 {
                return Err(VocabularyError::ZeroRank(level.label.clone()));
            }
            if let Some(&first) = ranks.get(&key) {
                if first != level.rank {
                    return Err(VocabularyError::ConflictingRank {
                        label: level.label.clone(),
                        first,
                        second: level.rank,
                    });
                }
            }
            ranks.insert(key, level.rank);
        }

        validate_pairs("study_conflicts", &self.study_conflicts)?;
        validate_pairs("noise_conflicts", &self.noise_conflicts)?;
        Ok(())
    }
}

fn validate_pairs(table: &'static str, pairs: &[[String; 2]]) -> Result<(), VocabularyError> {
    for [a, b] in pairs {
        let (a_key, b_key) = (normalize_tag(a), normalize_tag(b));
        if a_key.is_empty() || b_key.is_empty() {
            return Err(VocabularyError::BlankLabel(table));
        }
        if a_key == b_key {
            return Err(VocabularyError::SelfConflict { table, label: a.clone() });
        }
    }
    Ok(())
}

/// Normalize a categorical tag for comparison
///
/// Trims, collapses inner whitespace and lowercases, so `" Very  tidy"`
/// and `"Very Tidy"` name the same tag.
pub fn normalize_tag(tag: &str) -> String {
    tag.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lookup tables compiled from a [`VocabularyConfig`]
#[derive(Debug, Clone)]
pub struct Vocabulary {
    sleep_wildcards: HashSet<String>,
    cleanliness_ranks: HashMap<String, u8>,
    default_cleanliness_rank: u8,
    study_conflicts: HashSet<(String, String)>,
    noise_conflicts: HashSet<(String, String)>,
}

impl Vocabulary {
    /// Validate and compile a configured vocabulary
    pub fn from_config(config: &VocabularyConfig) -> Result<Self, VocabularyError> {
        config.validate()?;
        Ok(Self::compile(config))
    }

    fn compile(config: &VocabularyConfig) -> Self {
        Self {
            sleep_wildcards: config.sleep_wildcards.iter().map(|w| normalize_tag(w)).collect(),
            cleanliness_ranks: config
                .cleanliness
                .iter()
                .map(|level| (normalize_tag(&level.label), level.rank))
                .collect(),
            default_cleanliness_rank: config.default_cleanliness_rank,
            study_conflicts: compile_pairs(&config.study_conflicts),
            noise_conflicts: compile_pairs(&config.noise_conflicts),
        }
    }

    pub fn is_sleep_wildcard(&self, tag: &str) -> bool {
        self.sleep_wildcards.contains(&normalize_tag(tag))
    }

    /// Tidiness rank of a cleanliness label, the default rank when unknown
    pub fn cleanliness_rank(&self, tag: &str) -> u8 {
        self.cleanliness_ranks
            .get(&normalize_tag(tag))
            .copied()
            .unwrap_or(self.default_cleanliness_rank)
    }

    pub fn study_conflict(&self, a: &str, b: &str) -> bool {
        self.study_conflicts.contains(&ordered_key(a, b))
    }

    pub fn noise_conflict(&self, a: &str, b: &str) -> bool {
        self.noise_conflicts.contains(&ordered_key(a, b))
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::compile(&VocabularyConfig::default())
    }
}

fn compile_pairs(pairs: &[[String; 2]]) -> HashSet<(String, String)> {
    pairs.iter().map(|[a, b]| ordered_key(a, b)).collect()
}

// Pairs are unordered: store and probe with the smaller tag first.
fn ordered_key(a: &str, b: &str) -> (String, String) {
    let (a, b) = (normalize_tag(a), normalize_tag(b));
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Vocabulary::from_config(&VocabularyConfig::default()).is_ok());
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  Very   Tidy "), "very tidy");
        assert_eq!(normalize_tag("Late-night study"), "late-night study");
        assert_eq!(normalize_tag("   "), "");
    }

    #[test]
    fn test_cleanliness_rank_lookup() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.cleanliness_rank("Very Tidy"), 3);
        assert_eq!(vocab.cleanliness_rank("very tidy"), 3);
        assert_eq!(vocab.cleanliness_rank("Relaxed"), 1);
        assert_eq!(vocab.cleanliness_rank("Spotless"), DEFAULT_CLEANLINESS_RANK);
    }

    #[test]
    fn test_conflict_pairs_are_unordered() {
        let vocab = Vocabulary::default();
        assert!(vocab.study_conflict("Library", "Late-night study"));
        assert!(vocab.study_conflict("Late-night study", "Library"));
        assert!(!vocab.study_conflict("Library", "Group study"));
        assert!(vocab.noise_conflict("Loud", "quiet"));
        assert!(!vocab.noise_conflict("Quiet", "Moderate"));
    }

    #[test]
    fn test_sleep_wildcard() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_sleep_wildcard("flexible"));
        assert!(!vocab.is_sleep_wildcard("Night Owl"));
    }

    #[test]
    fn test_rejects_conflicting_rank() {
        let mut config = VocabularyConfig::default();
        config.cleanliness.push(CleanlinessLevel { label: "tidy".to_string(), rank: 1 });

        let err = Vocabulary::from_config(&config).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::ConflictingRank { label: "tidy".to_string(), first: 3, second: 1 }
        );
    }

    #[test]
    fn test_rejects_self_conflict() {
        let mut config = VocabularyConfig::default();
        config.noise_conflicts.push(["Loud".to_string(), " loud".to_string()]);

        assert!(matches!(
            Vocabulary::from_config(&config),
            Err(VocabularyError::SelfConflict { table: "noise_conflicts", .. })
        ));
    }

    #[test]
    fn test_rejects_blank_label() {
        let mut config = VocabularyConfig::default();
        config.sleep_wildcards.push("  ".to_string());

        assert_eq!(
            Vocabulary::from_config(&config).unwrap_err(),
            VocabularyError::BlankLabel("sleep_wildcards")
        );
    }

    #[test]
    fn test_from_toml_str() {
        let source = r#"
            sleep_wildcards = ["Flexible", "Whenever"]
            study_conflicts = [["Quiet Study", "Collaborative Study"]]

            [[cleanliness]]
            label = "Spotless"
            rank = 3

            [[cleanliness]]
            label = "Lived-in"
            rank = 1
        "#;

        let config = VocabularyConfig::from_toml_str(source).unwrap();
        let vocab = Vocabulary::from_config(&config).unwrap();

        assert!(vocab.is_sleep_wildcard("whenever"));
        assert!(vocab.study_conflict("Collaborative Study", "Quiet Study"));
        assert_eq!(vocab.cleanliness_rank("Spotless"), 3);
        // Omitted tables keep their defaults
        assert_eq!(config.noise_conflicts.len(), 2);
        assert_eq!(vocab.cleanliness_rank("Average"), DEFAULT_CLEANLINESS_RANK);
    }
}
