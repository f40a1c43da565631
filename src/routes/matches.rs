use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::models::{
    FindMatchesRequest, FindMatchesResponse, HealthResponse, ScorePairRequest, ScorePairResponse,
};
use crate::routes::ApiError;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    /// Default score floor for find requests that don't specify one
    pub min_score: f64,
    /// Hard cap on the number of matches a single request may return
    pub max_limit: usize,
}

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one ordered pair of profiles
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "profileA": { "userId": "...", "demographics": {...}, ... },
///   "profileB": { "userId": "...", "demographics": {...}, ... }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScorePairRequest>,
) -> impl Responder {
    let (total, breakdown) = state.matcher.score_pair(&req.profile_a, &req.profile_b);

    tracing::debug!(
        "Scored pair {} -> {}: {:.2} ({} factors)",
        req.profile_a.user_id,
        req.profile_b.user_id,
        total,
        breakdown.factors.len()
    );

    HttpResponse::Ok().json(ScorePairResponse { total, breakdown })
}

/// Find matches for a profile within a caller-supplied candidate pool
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "profile": { "userId": "...", ... },
///   "candidates": [ { "userId": "...", ... } ],
///   "minScore": 40.0,
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let min_score = req.min_score.unwrap_or(state.min_score);
    let limit = (req.limit as usize).min(state.max_limit);

    tracing::info!(
        "Finding matches for user: {}, candidates: {}, min_score: {}, limit: {}",
        req.profile.user_id,
        req.candidates.len(),
        min_score,
        limit
    );

    let FindMatchesRequest {
        profile, candidates, ..
    } = req.into_inner();

    let result = state
        .matcher
        .find_matches(&profile, candidates, min_score, limit);

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        result.matches.len(),
        profile.user_id,
        result.total_candidates
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    }))
}
