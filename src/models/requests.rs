use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Profile, SignalMap};

/// Request to score one ordered pair of profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorePairRequest {
    #[serde(rename = "profileA", alias = "profile_a")]
    pub profile_a: Profile,
    #[serde(rename = "profileB", alias = "profile_b")]
    pub profile_b: Profile,
}

/// Request to find matches for a profile within a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub profile: Profile,
    #[serde(default)]
    pub candidates: Vec<Profile>,
    #[serde(rename = "minScore", alias = "min_score", default)]
    pub min_score: Option<f64>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    5
}

/// Request to merge a freshly extracted signal batch into a stored snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeSignalsRequest {
    #[serde(default)]
    pub existing: SignalMap,
    #[serde(default)]
    pub incoming: SignalMap,
}
