//! Roommate compatibility scoring and ranking service
//!
//! This library provides the rule-based compatibility heuristic used to
//! compare two prospective roommates: five lifestyle aspects are classified
//! as strong, partial or conflict and folded into a 0-100 score. Around it
//! sit red-flag breakdowns, plain-language explanations and candidate
//! ranking, plus the actix-web handlers that expose them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{score_compatibility, CompatibilityScorer, Matcher, Penalties, Vocabulary};
pub use models::{Aspect, CompatibilityAspect, CompatibilityResult, MatchClass, PreferenceProfile, ProfileRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let profile = PreferenceProfile::default();
        let result = score_compatibility(&profile, &profile);
        assert_eq!(result.score, 100);
    }
}
