use serde::{Deserialize, Serialize};

use crate::models::domain::{ScoreBreakdown, ScoredCandidate, SignalMap};

/// Response for the score-pair endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairResponse {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

/// Response for the find-matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the merge-signals endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSignalsResponse {
    pub merged: SignalMap,
    #[serde(rename = "fieldCount")]
    pub field_count: usize,
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
