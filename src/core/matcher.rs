use crate::core::scoring::calculate_match_score;
use crate::models::{Profile, ScoreBreakdown, ScoredCandidate};

/// Result of a match search.
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Contextual matching orchestrator.
///
/// Scores a profile against a candidate pool and ranks the survivors.
/// Stateless: every call is independent, so `find_matches` over a large pool
/// can be partitioned across threads by the caller without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Score one ordered pair of profiles.
    pub fn score_pair(&self, a: &Profile, b: &Profile) -> (f64, ScoreBreakdown) {
        calculate_match_score(a, b)
    }

    /// Find matches for a profile from a candidate pool.
    ///
    /// Excludes the profile itself (by id, not by score), keeps candidates
    /// scoring at least `min_score`, sorts descending by score — the sort is
    /// stable, so equal-score candidates preserve their input order — and
    /// returns at most `limit` results.
    pub fn find_matches(
        &self,
        profile: &Profile,
        candidates: Vec<Profile>,
        min_score: f64,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<ScoredCandidate> = candidates
            .into_iter()
            // Never match a user with themselves
            .filter(|candidate| candidate.user_id != profile.user_id)
            .filter_map(|candidate| {
                let (total, breakdown) = calculate_match_score(profile, &candidate);

                if total >= min_score {
                    Some(ScoredCandidate {
                        profile: candidate,
                        total,
                        breakdown,
                    })
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
