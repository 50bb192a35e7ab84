// Core algorithm exports
pub mod budget;
pub mod explain;
pub mod matcher;
pub mod red_flags;
pub mod scoring;
pub mod vocabulary;

pub use budget::{budget_gap, parse_leading_amount};
pub use explain::explain_conflicts;
pub use matcher::{Matcher, MatchResult};
pub use red_flags::{breakdown, pair_id};
pub use scoring::{score_compatibility, CompatibilityScorer, Penalties};
pub use vocabulary::{Vocabulary, VocabularyConfig, VocabularyError};
