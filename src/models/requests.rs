use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{PreferenceProfile, ProfileRecord, RedFlag};

/// Request to score two preference profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(alias = "profile_a", rename = "profileA")]
    pub profile_a: PreferenceProfile,
    #[serde(alias = "profile_b", rename = "profileB")]
    pub profile_b: PreferenceProfile,
}

/// Request for the red-flag breakdown of two stored profiles
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BreakdownRequest {
    #[validate(nested)]
    pub profile_a: ProfileRecord,
    #[validate(nested)]
    pub profile_b: ProfileRecord,
}

/// Request for a conflict explanation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplanationRequest {
    #[validate(length(min = 1))]
    pub pair_id: String,
    #[serde(default)]
    pub red_flags: Vec<RedFlag>,
    #[validate(range(max = 100))]
    pub match_score: u8,
}

/// Request to rank candidates for a viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub viewer: ProfileRecord,
    #[validate(length(max = 1000), nested)]
    #[serde(default)]
    pub candidates: Vec<ProfileRecord>,
    #[serde(default)]
    pub limit: Option<u16>,
    #[serde(default)]
    #[serde(alias = "exclude_profile_ids", rename = "excludeProfileIds")]
    pub exclude_profile_ids: Vec<String>,
}
