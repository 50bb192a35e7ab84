use crate::models::{ProfileRecord, ScoreBand, ScoredMatch, Viewer};
use crate::core::scoring::CompatibilityScorer;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Ranks candidate roommates for a viewer
///
/// # Pipeline Stages
/// 1. Exclusion (the viewer and already-seen ids)
/// 2. Compatibility scoring
/// 3. Minimum score cut
/// 4. Ordering and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    scorer: CompatibilityScorer,
    min_score: u8,
}

impl Matcher {
    pub fn new(scorer: CompatibilityScorer, min_score: u8) -> Self {
        Self { scorer, min_score }
    }

    pub fn with_default_scorer() -> Self {
        Self::new(CompatibilityScorer::default(), 0)
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    /// Rank candidates for a viewer
    ///
    /// # Arguments
    /// * `viewer` - Profile the ranking is computed for
    /// * `candidates` - Candidate profile records
    /// * `exclude_ids` - Profile ids to leave out (e.g. already swiped)
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// MatchResult ordered by score (descending), then fewer conflicts,
    /// then profile id
    pub fn find_matches(
        &self,
        viewer: &Viewer,
        candidates: Vec<ProfileRecord>,
        exclude_ids: &[String],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut ranked: Vec<(ScoredMatch, usize)> = candidates
            .into_iter()
            // Stage 1: Exclusions
            .filter(|record| record.id != viewer.profile_id)
            .filter(|record| !exclude_ids.contains(&record.id))
            // Stage 2 & 3: Score and cut
            .filter_map(|record| {
                let result = self.scorer.score(&viewer.preferences, &record.to_preferences());
                if result.score < self.min_score {
                    return None;
                }

                let conflicts = result.conflict_count();
                Some((
                    ScoredMatch {
                        profile_id: record.id,
                        compatibility_score: result.score,
                        band: ScoreBand::from_score(result.score),
                        compatibility_aspects: result.aspects,
                    },
                    conflicts,
                ))
            })
            .collect();

        // Stage 4: Sort by score (descending), conflicts (ascending), id
        ranked.sort_by(|(a, a_conflicts), (b, b_conflicts)| {
            b.compatibility_score
                .cmp(&a.compatibility_score)
                .then_with(|| a_conflicts.cmp(b_conflicts))
                .then_with(|| a.profile_id.cmp(&b.profile_id))
        });

        ranked.truncate(limit);

        MatchResult {
            matches: ranked.into_iter().map(|(m, _)| m).collect(),
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_scorer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PreferenceProfile;

    fn create_candidate(id: &str, budget: u64, sleep: &str, cleanliness: &str) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            budget_pkr: Some(budget),
            sleep_schedule: Some(sleep.to_string()),
            cleanliness: Some(cleanliness.to_string()),
            study_habits: Some("Library".to_string()),
            noise_tolerance: Some("Quiet".to_string()),
            ..Default::default()
        }
    }

    fn create_viewer() -> Viewer {
        Viewer {
            profile_id: "viewer".to_string(),
            preferences: PreferenceProfile::new("20000 PKR", "Early Bird", "Tidy", "Library", "Quiet"),
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_scorer();
        let candidates = vec![
            create_candidate("1", 20000, "Early Bird", "Tidy"),    // Perfect match
            create_candidate("2", 20300, "Flexible", "Average"),   // Partial on three
            create_candidate("3", 30000, "Night Owl", "Messy"),    // Conflicts
        ];

        let result = matcher.find_matches(&create_viewer(), candidates, &[], 10);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<&str> = result.matches.iter().map(|m| m.profile_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(result.matches[0].compatibility_score, 100);
        assert_eq!(result.matches[0].band, ScoreBand::Strong);
    }

    #[test]
    fn test_excludes_viewer_and_seen() {
        let matcher = Matcher::with_default_scorer();
        let candidates = vec![
            create_candidate("viewer", 20000, "Early Bird", "Tidy"),
            create_candidate("seen", 20000, "Early Bird", "Tidy"),
            create_candidate("fresh", 20000, "Early Bird", "Tidy"),
        ];

        let result = matcher.find_matches(&create_viewer(), candidates, &["seen".to_string()], 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile_id, "fresh");
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_scorer();
        let candidates: Vec<ProfileRecord> = (0..20)
            .map(|i| create_candidate(&i.to_string(), 20000 + i * 100, "Early Bird", "Tidy"))
            .collect();

        let result = matcher.find_matches(&create_viewer(), candidates, &[], 5);

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_ties_prefer_fewer_conflicts() {
        let matcher = Matcher::with_default_scorer();
        // b: one sleep conflict (-20); a: budget partial + cleanliness partial (-20)
        let candidates = vec![
            create_candidate("b", 20000, "Night Owl", "Tidy"),
            create_candidate("a", 20100, "Early Bird", "Average"),
        ];

        let result = matcher.find_matches(&create_viewer(), candidates, &[], 10);

        assert_eq!(result.matches[0].compatibility_score, 80);
        assert_eq!(result.matches[1].compatibility_score, 80);
        assert_eq!(result.matches[0].profile_id, "a");
    }

    #[test]
    fn test_min_score_cut() {
        let matcher = Matcher::new(CompatibilityScorer::default(), 90);
        let candidates = vec![
            create_candidate("1", 20000, "Early Bird", "Tidy"),
            create_candidate("2", 30000, "Night Owl", "Messy"),
        ];

        let result = matcher.find_matches(&create_viewer(), candidates, &[], 10);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.total_candidates, 2);
    }
}
