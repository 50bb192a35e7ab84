// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Aspect, CompatibilityAspect, CompatibilityBreakdown, CompatibilityResult, ConflictExplanation,
    MatchClass, NegotiationSuggestion, PreferenceProfile, ProfileRecord, RedFlag, ScoreBand,
    ScoredMatch, Severity, Viewer,
};
pub use requests::{BreakdownRequest, ExplanationRequest, RankRequest, ScoreRequest};
pub use responses::{BreakdownResponse, ErrorResponse, HealthResponse, RankResponse, ScoreResponse};
