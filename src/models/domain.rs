use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use validator::Validate;

/// Label used when a profile states no budget or sleep schedule
pub const FALLBACK_FLEXIBLE: &str = "Flexible";
/// Label used when a profile states no cleanliness preference
pub const FALLBACK_CLEANLINESS: &str = "Average";
/// Label used when a profile states no study habits
pub const FALLBACK_STUDY_HABITS: &str = "Library";
/// Label used when a profile states no noise tolerance
pub const FALLBACK_SOCIAL_HABITS: &str = "Moderate";

/// Lifestyle preferences compared between two prospective roommates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default = "default_flexible", deserialize_with = "flexible_if_null")]
    pub budget: String,
    #[serde(rename = "sleepSchedule", default = "default_flexible", deserialize_with = "flexible_if_null")]
    pub sleep_schedule: String,
    #[serde(default = "default_cleanliness", deserialize_with = "cleanliness_if_null")]
    pub cleanliness: String,
    #[serde(rename = "studyHabits", default = "default_study_habits", deserialize_with = "study_habits_if_null")]
    pub study_habits: String,
    #[serde(
        rename = "socialHabits",
        alias = "noiseTolerance",
        default = "default_social_habits",
        deserialize_with = "social_habits_if_null"
    )]
    pub social_habits: String,
}

impl PreferenceProfile {
    pub fn new(
        budget: impl Into<String>,
        sleep_schedule: impl Into<String>,
        cleanliness: impl Into<String>,
        study_habits: impl Into<String>,
        social_habits: impl Into<String>,
    ) -> Self {
        Self {
            budget: budget.into(),
            sleep_schedule: sleep_schedule.into(),
            cleanliness: cleanliness.into(),
            study_habits: study_habits.into(),
            social_habits: social_habits.into(),
        }
    }

    /// Value compared for an aspect; blank values fall back to the default label
    pub fn value(&self, aspect: Aspect) -> &str {
        let (raw, fallback) = match aspect {
            Aspect::Budget => (&self.budget, FALLBACK_FLEXIBLE),
            Aspect::SleepSchedule => (&self.sleep_schedule, FALLBACK_FLEXIBLE),
            Aspect::Cleanliness => (&self.cleanliness, FALLBACK_CLEANLINESS),
            Aspect::StudyHabits => (&self.study_habits, FALLBACK_STUDY_HABITS),
            Aspect::SocialHabits => (&self.social_habits, FALLBACK_SOCIAL_HABITS),
        };
        if raw.trim().is_empty() {
            fallback
        } else {
            raw
        }
    }
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            budget: default_flexible(),
            sleep_schedule: default_flexible(),
            cleanliness: default_cleanliness(),
            study_habits: default_study_habits(),
            social_habits: default_social_habits(),
        }
    }
}

fn default_flexible() -> String { FALLBACK_FLEXIBLE.to_string() }
fn default_cleanliness() -> String { FALLBACK_CLEANLINESS.to_string() }
fn default_study_habits() -> String { FALLBACK_STUDY_HABITS.to_string() }
fn default_social_habits() -> String { FALLBACK_SOCIAL_HABITS.to_string() }

// An explicit `null` reads the same as an absent key
fn label_or_null<'de, D>(deserializer: D, fallback: fn() -> String) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(fallback))
}

fn flexible_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    label_or_null(d, default_flexible)
}
fn cleanliness_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    label_or_null(d, default_cleanliness)
}
fn study_habits_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    label_or_null(d, default_study_habits)
}
fn social_habits_if_null<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    label_or_null(d, default_social_habits)
}

/// Profile record as stored by the profile backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProfileRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub raw_profile_text: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(rename = "budget_PKR", default)]
    pub budget_pkr: Option<u64>,
    #[serde(default)]
    pub sleep_schedule: Option<String>,
    #[serde(default)]
    pub cleanliness: Option<String>,
    #[serde(default)]
    pub noise_tolerance: Option<String>,
    #[serde(default)]
    pub study_habits: Option<String>,
    #[serde(default)]
    pub food_pref: Option<String>,
}

impl ProfileRecord {
    /// Build the preference profile used for scoring, filling gaps with fallback labels
    pub fn to_preferences(&self) -> PreferenceProfile {
        let budget = match self.budget_pkr {
            Some(amount) if amount > 0 => format!("{} PKR", amount),
            _ => default_flexible(),
        };

        PreferenceProfile {
            budget,
            sleep_schedule: non_blank(&self.sleep_schedule).unwrap_or_else(default_flexible),
            cleanliness: non_blank(&self.cleanliness).unwrap_or_else(default_cleanliness),
            study_habits: non_blank(&self.study_habits).unwrap_or_else(default_study_habits),
            social_habits: non_blank(&self.noise_tolerance).unwrap_or_else(default_social_habits),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// One of the five compared lifestyle dimensions, in scoring order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    #[serde(rename = "Budget")]
    Budget,
    #[serde(rename = "Sleep Schedule")]
    SleepSchedule,
    #[serde(rename = "Cleanliness")]
    Cleanliness,
    #[serde(rename = "Study Habits")]
    StudyHabits,
    #[serde(rename = "Social Habits")]
    SocialHabits,
}

impl Aspect {
    pub const ALL: [Aspect; 5] = [
        Aspect::Budget,
        Aspect::SleepSchedule,
        Aspect::Cleanliness,
        Aspect::StudyHabits,
        Aspect::SocialHabits,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Aspect::Budget => "Budget",
            Aspect::SleepSchedule => "Sleep Schedule",
            Aspect::Cleanliness => "Cleanliness",
            Aspect::StudyHabits => "Study Habits",
            Aspect::SocialHabits => "Social Habits",
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How well two profiles agree on a single aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchClass {
    Strong,
    Partial,
    Conflict,
}

/// Per-aspect comparison outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityAspect {
    pub aspect: Aspect,
    #[serde(rename = "user1Value")]
    pub user1_value: String,
    #[serde(rename = "user2Value")]
    pub user2_value: String,
    #[serde(rename = "match")]
    pub class: MatchClass,
    pub penalty: u8,
}

/// Aggregate score plus one aspect entry per dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub score: u8,
    pub aspects: Vec<CompatibilityAspect>,
}

impl CompatibilityResult {
    pub fn aspect(&self, aspect: Aspect) -> Option<&CompatibilityAspect> {
        self.aspects.iter().find(|a| a.aspect == aspect)
    }

    pub fn conflict_count(&self) -> usize {
        self.aspects
            .iter()
            .filter(|a| a.class == MatchClass::Conflict)
            .count()
    }
}

/// Coarse bucket of a compatibility score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            ScoreBand::Strong
        } else if score > 50 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        };
        f.write_str(s)
    }
}

/// A disagreement surfaced for discussion between two roommates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlag {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub evidence: String,
}

/// Red flags for an identified pair of profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub pair_id: String,
    pub red_flags: Vec<RedFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationSuggestion {
    pub category: String,
    pub suggestion: String,
}

/// Plain-language guidance for a scored pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictExplanation {
    pub negotiation_checklist: Vec<NegotiationSuggestion>,
    pub summary_explanation: String,
}

/// Profile whose perspective candidates are ranked from
#[derive(Debug, Clone)]
pub struct Viewer {
    pub profile_id: String,
    pub preferences: PreferenceProfile,
}

impl From<&ProfileRecord> for Viewer {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            profile_id: record.id.clone(),
            preferences: record.to_preferences(),
        }
    }
}

/// Ranked candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: u8,
    pub band: ScoreBand,
    #[serde(rename = "compatibilityAspects")]
    pub compatibility_aspects: Vec<CompatibilityAspect>,
}
