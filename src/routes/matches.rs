use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, Viewer};
use crate::routes::AppState;

/// Configure health and ranking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank candidates endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "viewer": { "id": "p1", "budget_PKR": 20000, "sleep_schedule": "Early Bird" },
///   "candidates": [{ "id": "p2", "budget_PKR": 22000 }],
///   "limit": 10,
///   "excludeProfileIds": ["p3"]
/// }
/// ```
async fn rank_matches(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = state.matching.effective_limit(req.limit);
    let viewer = Viewer::from(&req.viewer);

    tracing::info!(
        "Ranking {} candidates for {}, limit: {}",
        req.candidates.len(),
        viewer.profile_id,
        limit
    );

    let result = state
        .matcher
        .find_matches(&viewer, req.candidates, &req.exclude_profile_ids, limit);

    tracing::info!(
        "Returning {} matches for {} (from {} candidates)",
        result.matches.len(),
        viewer.profile_id,
        result.total_candidates
    );

    HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    })
}

