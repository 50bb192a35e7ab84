use serde::{Deserialize, Serialize};
use crate::models::domain::{CompatibilityAspect, CompatibilityResult, RedFlag, ScoreBand, ScoredMatch};

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub band: ScoreBand,
    pub aspects: Vec<CompatibilityAspect>,
}

impl From<CompatibilityResult> for ScoreResponse {
    fn from(result: CompatibilityResult) -> Self {
        Self {
            band: ScoreBand::from_score(result.score),
            score: result.score,
            aspects: result.aspects,
        }
    }
}

/// Response for the breakdown endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub pair_id: String,
    pub match_score: u8,
    pub red_flags: Vec<RedFlag>,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<ScoredMatch>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
