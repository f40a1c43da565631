//! Rishta Algo - Contextual matching engine for the Rishta matchmaking assistant
//!
//! This library provides the scoring and signal-merging core used by the
//! Rishta conversational matchmaker. Matching is contextual rather than
//! filter-based: preferences carry weights, trade-offs are explicit, and
//! strong shared cultural markers are allowed to compensate for geographic
//! distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{calculate_match_score, merge_signals, MatchResult, Matcher, MIN_STORED_CONFIDENCE};
pub use models::{
    CulturalWeight, Demographics, Preferences, Profile, ScoreBreakdown, ScoredCandidate, Signal,
    SignalMap, SignalSource, SignalTag,
};
