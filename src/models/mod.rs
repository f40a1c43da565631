// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    age_from_dob, CulturalWeight, Demographics, MatchRecord, MatchStatus, Preferences, Profile,
    ScoreBreakdown, ScoreFactor, ScoredCandidate, Signal, SignalCategory, SignalMap, SignalSource,
    SignalTag,
};
pub use requests::{FindMatchesRequest, MergeSignalsRequest, ScorePairRequest};
pub use responses::{
    ErrorResponse, FindMatchesResponse, HealthResponse, MergeSignalsResponse, ScorePairResponse,
};
