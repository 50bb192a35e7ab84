use serde::{Deserialize, Serialize};
use crate::core::{budget::{budget_gap, parse_leading_amount}, vocabulary::{normalize_tag, Vocabulary}};
use crate::models::{Aspect, CompatibilityAspect, CompatibilityResult, MatchClass, PreferenceProfile};

/// Score every pair starts from before penalties are subtracted
pub const BASE_SCORE: u8 = 100;

/// Points deducted per aspect outcome, plus the budget conflict threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Penalties {
    pub budget_conflict_gap: u64,
    pub budget_conflict: u8,
    pub budget_partial: u8,
    pub sleep_conflict: u8,
    pub sleep_partial: u8,
    pub cleanliness_conflict: u8,
    pub cleanliness_partial: u8,
    pub study_conflict: u8,
    pub study_partial: u8,
    pub social_conflict: u8,
    pub social_partial: u8,
}

impl Default for Penalties {
    fn default() -> Self {
        Self {
            budget_conflict_gap: 400,
            budget_conflict: 25,
            budget_partial: 10,
            sleep_conflict: 20,
            sleep_partial: 5,
            cleanliness_conflict: 25,
            cleanliness_partial: 10,
            study_conflict: 15,
            study_partial: 5,
            social_conflict: 15,
            social_partial: 5,
        }
    }
}

impl Penalties {
    fn for_outcome(&self, aspect: Aspect, class: MatchClass) -> u8 {
        let (conflict, partial) = match aspect {
            Aspect::Budget => (self.budget_conflict, self.budget_partial),
            Aspect::SleepSchedule => (self.sleep_conflict, self.sleep_partial),
            Aspect::Cleanliness => (self.cleanliness_conflict, self.cleanliness_partial),
            Aspect::StudyHabits => (self.study_conflict, self.study_partial),
            Aspect::SocialHabits => (self.social_conflict, self.social_partial),
        };
        match class {
            MatchClass::Strong => 0,
            MatchClass::Partial => partial,
            MatchClass::Conflict => conflict,
        }
    }
}

/// Rule-based roommate compatibility scorer
///
/// Every pair starts at 100 and loses points per aspect:
///
/// | Aspect | Conflict | Partial |
/// |---|---|---|
/// | Budget | gap > 400 (-25) | 0 < gap <= 400 (-10) |
/// | Sleep schedule | differ, no wildcard (-20) | differ, one is flexible (-5) |
/// | Cleanliness | rank gap > 1 (-25) | rank gap == 1 (-10) |
/// | Study habits | listed conflict pair (-15) | any other difference (-5) |
/// | Social habits | listed conflict pair (-15) | any other difference (-5) |
///
/// Scoring never fails: unknown labels and unparseable budgets resolve to
/// defaults and the result always carries all five aspects.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    vocabulary: Vocabulary,
    penalties: Penalties,
}

impl CompatibilityScorer {
    pub fn new(vocabulary: Vocabulary, penalties: Penalties) -> Self {
        Self { vocabulary, penalties }
    }

    pub fn penalties(&self) -> &Penalties {
        &self.penalties
    }

    /// Score two profiles against each other
    pub fn score(&self, a: &PreferenceProfile, b: &PreferenceProfile) -> CompatibilityResult {
        let mut total_penalty: u32 = 0;

        let aspects: Vec<CompatibilityAspect> = Aspect::ALL
            .iter()
            .map(|&aspect| {
                let left = a.value(aspect);
                let right = b.value(aspect);
                let class = self.classify(aspect, left, right);
                let penalty = self.penalties.for_outcome(aspect, class);
                total_penalty += u32::from(penalty);

                CompatibilityAspect {
                    aspect,
                    user1_value: left.to_string(),
                    user2_value: right.to_string(),
                    class,
                    penalty,
                }
            })
            .collect();

        let score = u32::from(BASE_SCORE).saturating_sub(total_penalty) as u8;

        CompatibilityResult { score, aspects }
    }

    /// Classify one aspect without touching the score
    pub fn classify(&self, aspect: Aspect, a: &str, b: &str) -> MatchClass {
        match aspect {
            Aspect::Budget => self.classify_budget(a, b),
            Aspect::SleepSchedule => self.classify_sleep(a, b),
            Aspect::Cleanliness => self.classify_cleanliness(a, b),
            Aspect::StudyHabits => classify_with_table(a, b, |x, y| self.vocabulary.study_conflict(x, y)),
            Aspect::SocialHabits => classify_with_table(a, b, |x, y| self.vocabulary.noise_conflict(x, y)),
        }
    }

    fn classify_budget(&self, a: &str, b: &str) -> MatchClass {
        match budget_gap(a, b) {
            Some(0) => MatchClass::Strong,
            Some(gap) if gap > self.penalties.budget_conflict_gap => MatchClass::Conflict,
            Some(_) => MatchClass::Partial,
            // Neither side names an amount: nothing to disagree on
            None if !has_amount(a) && !has_amount(b) => MatchClass::Strong,
            None => MatchClass::Conflict,
        }
    }

    fn classify_sleep(&self, a: &str, b: &str) -> MatchClass {
        if normalize_tag(a) == normalize_tag(b) {
            MatchClass::Strong
        } else if self.vocabulary.is_sleep_wildcard(a) || self.vocabulary.is_sleep_wildcard(b) {
            MatchClass::Partial
        } else {
            MatchClass::Conflict
        }
    }

    fn classify_cleanliness(&self, a: &str, b: &str) -> MatchClass {
        let gap = self
            .vocabulary
            .cleanliness_rank(a)
            .abs_diff(self.vocabulary.cleanliness_rank(b));
        match gap {
            0 => MatchClass::Strong,
            1 => MatchClass::Partial,
            _ => MatchClass::Conflict,
        }
    }
}

#[inline]
fn has_amount(budget: &str) -> bool {
    parse_leading_amount(budget).is_some()
}

#[inline]
fn classify_with_table(a: &str, b: &str, conflicts: impl Fn(&str, &str) -> bool) -> MatchClass {
    if normalize_tag(a) == normalize_tag(b) {
        MatchClass::Strong
    } else if conflicts(a, b) {
        MatchClass::Conflict
    } else {
        MatchClass::Partial
    }
}

/// Score two profiles with the default vocabulary and penalties
pub fn score_compatibility(a: &PreferenceProfile, b: &PreferenceProfile) -> CompatibilityResult {
    CompatibilityScorer::default().score(a, b)
}
