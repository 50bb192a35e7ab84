use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{breakdown, explain_conflicts};
use crate::models::{BreakdownRequest, BreakdownResponse, ErrorResponse, ExplanationRequest, ScoreRequest, ScoreResponse};
use crate::routes::AppState;

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/compatibility/score", web::post().to(score))
        .route("/compatibility/breakdown", web::post().to(score_breakdown))
        .route("/compatibility/explain", web::post().to(explain));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Score endpoint
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "budget": "$1000", "sleepSchedule": "Night Owl", ... },
///   "profileB": { "budget": "$1300", "sleepSchedule": "Flexible", ... }
/// }
/// ```
async fn score(state: web::Data<AppState>, req: web::Json<ScoreRequest>) -> impl Responder {
    let result = state.matcher.scorer().score(&req.profile_a, &req.profile_b);

    tracing::debug!(score = result.score, conflicts = result.conflict_count(), "Scored profile pair");

    HttpResponse::Ok().json(ScoreResponse::from(result))
}

/// Breakdown endpoint
///
/// POST /api/v1/compatibility/breakdown
///
/// Request body: `{ "profile_a": ProfileRecord, "profile_b": ProfileRecord }`
async fn score_breakdown(state: web::Data<AppState>, req: web::Json<BreakdownRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for breakdown request: {:?}", errors);
        return validation_failed(errors);
    }

    let (a, b) = (&req.profile_a, &req.profile_b);
    let result = state
        .matcher
        .scorer()
        .score(&a.to_preferences(), &b.to_preferences());
    let breakdown = breakdown(&a.id, &b.id, &result);

    tracing::info!(
        "Breakdown for {}: score {}, {} red flags",
        breakdown.pair_id,
        result.score,
        breakdown.red_flags.len()
    );

    HttpResponse::Ok().json(BreakdownResponse {
        pair_id: breakdown.pair_id,
        match_score: result.score,
        red_flags: breakdown.red_flags,
    })
}

/// Explanation endpoint
///
/// POST /api/v1/compatibility/explain
///
/// Request body:
/// ```json
/// {
///   "pair_id": "a_b",
///   "red_flags": [{ "type": "Cleanliness", "severity": "HIGH", "evidence": "..." }],
///   "match_score": 55
/// }
/// ```
async fn explain(req: web::Json<ExplanationRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for explanation request: {:?}", errors);
        return validation_failed(errors);
    }

    tracing::info!("Explaining {} red flags for {}", req.red_flags.len(), req.pair_id);

    HttpResponse::Ok().json(explain_conflicts(&req.red_flags, req.match_score))
}
