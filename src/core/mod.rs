// Core algorithm exports
pub mod matcher;
pub mod merger;
pub mod scoring;
pub mod tables;

pub use matcher::{MatchResult, Matcher};
pub use merger::{merge_signals, MIN_STORED_CONFIDENCE};
pub use scoring::calculate_match_score;
pub use tables::{same_country, same_metro_area, similar_occupation};
