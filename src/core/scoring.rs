use crate::core::tables::{same_country, same_metro_area, similar_occupation};
use crate::models::{Profile, ScoreBreakdown};

/// Weight assumed when a profile never stated an importance for an attribute.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Location weights below this count as "flexible about location".
const LOCATION_FLEX_THRESHOLD: f64 = 0.6;

/// Calculate the contextual match score for an ordered pair of profiles.
///
/// The score is the sum of five independently labeled sub-scores: location,
/// cultural, age, lifestyle, and conversation signals. The result is not
/// guaranteed symmetric, since each side's own preference weights feed the
/// penalties. Missing fields contribute nothing; scoring never fails on a
/// sparse profile.
///
/// Pure and synchronous: safe to call concurrently without locking.
pub fn calculate_match_score(a: &Profile, b: &Profile) -> (f64, ScoreBreakdown) {
    let mut breakdown = ScoreBreakdown::default();

    breakdown.merge(score_location(a, b));
    breakdown.merge(score_cultural(a, b));
    breakdown.merge(score_age(a, b));
    breakdown.merge(score_lifestyle(a, b));
    breakdown.merge(score_signals(a, b));

    (breakdown.total, breakdown)
}

/// Clamp a stated weight into [0, 1], falling back to the default for
/// missing or non-finite upstream values.
#[inline]
pub(crate) fn effective_weight(weight: Option<f64>) -> f64 {
    match weight {
        Some(w) if w.is_finite() => w.clamp(0.0, 1.0),
        _ => DEFAULT_WEIGHT,
    }
}

/// Location sub-score, with cultural compensation for distance.
///
/// Same city and same metro short-circuit. For genuinely different
/// localities the score accumulates flexibility, same-country, and — when
/// either side declared cultural weight HIGH — a compensation bonus for
/// shared caste and language. Shared deep cultural markers are allowed to
/// outweigh distance so diaspora users aren't filtered out by geography.
fn score_location(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let (Some(loc_a), Some(loc_b)) = (
        a.demographics.location_normalized(),
        b.demographics.location_normalized(),
    ) else {
        // No location on one side: the whole sub-score is "no information"
        return breakdown;
    };

    if loc_a == loc_b {
        breakdown.push("location.same_city", 30.0);
        return breakdown;
    }

    if same_metro_area(&loc_a, &loc_b) {
        breakdown.push("location.same_metro", 20.0);
        return breakdown;
    }

    // Different localities: flexibility first
    let flex_a = effective_weight(a.preferences.location_weight);
    let flex_b = effective_weight(b.preferences.location_weight);

    if flex_a < LOCATION_FLEX_THRESHOLD && flex_b < LOCATION_FLEX_THRESHOLD {
        breakdown.push("location.both_flexible", 15.0);
    } else if flex_a < LOCATION_FLEX_THRESHOLD || flex_b < LOCATION_FLEX_THRESHOLD {
        breakdown.push("location.one_flexible", 10.0);
    }

    // Same country matters for visas and immigration
    if same_country(&loc_a, &loc_b) {
        breakdown.push("location.same_country", 5.0);
    } else {
        breakdown.push("location.different_country", -10.0);
    }

    // Cultural compensation: one HIGH-weight side pulls the bonus in for
    // both (product decision, see DESIGN.md)
    if a.preferences.wants_high_cultural() || b.preferences.wants_high_cultural() {
        let mut bonus = 0.0;
        if shared_marker(a.demographics.caste(), b.demographics.caste()) {
            bonus += 10.0;
        }
        if shared_marker(a.demographics.language(), b.demographics.language()) {
            bonus += 10.0;
        }
        if bonus > 0.0 {
            breakdown.push("location.cultural_compensation", bonus);
        }
    }

    breakdown
}

/// Cultural sub-score: caste/community and native language, independent of
/// location.
fn score_cultural(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let caste_w_a = effective_weight(a.preferences.caste_weight);
    let caste_w_b = effective_weight(b.preferences.caste_weight);

    if let (Some(caste_a), Some(caste_b)) = (a.demographics.caste(), b.demographics.caste()) {
        if caste_a == caste_b {
            breakdown.push("cultural.same_caste", 15.0 * caste_w_a.max(caste_w_b));
        } else if caste_w_a > 0.7 || caste_w_b > 0.7 {
            // Different caste only penalizes when someone cares strongly
            breakdown.push("cultural.different_caste", -10.0 * caste_w_a.max(caste_w_b));
        }
    }

    if let (Some(lang_a), Some(lang_b)) = (a.demographics.language(), b.demographics.language()) {
        if lang_a == lang_b {
            let lang_w = effective_weight(a.preferences.language_weight)
                .max(effective_weight(b.preferences.language_weight));
            breakdown.push("cultural.same_language", 10.0 * lang_w);
        }
    }

    breakdown
}

/// Age sub-score: absolute difference with a flexibility override for large
/// gaps.
fn score_age(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    let (Some(age_a), Some(age_b)) = (a.demographics.age(), b.demographics.age()) else {
        return breakdown;
    };

    let diff = (i16::from(age_a) - i16::from(age_b)).abs();

    if diff <= 2 {
        breakdown.push("age.diff", 10.0);
    } else if diff <= 5 {
        breakdown.push("age.diff", 7.0);
    } else if diff <= 8 {
        breakdown.push("age.diff", 3.0);
    } else if a.preferences.age_flexible && b.preferences.age_flexible {
        breakdown.push("age.diff_flexible", 1.0);
    } else {
        breakdown.push("age.diff_penalty", -5.0);
    }

    breakdown
}

/// Lifestyle sub-score: dietary alignment and coarse occupation similarity.
fn score_lifestyle(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    if let (Some(veg_a), Some(veg_b)) = (a.demographics.vegetarian, b.demographics.vegetarian) {
        let diet_w_a = effective_weight(a.preferences.diet_weight);
        let diet_w_b = effective_weight(b.preferences.diet_weight);

        if veg_a == veg_b {
            breakdown.push("lifestyle.diet_match", 10.0 * diet_w_a.max(diet_w_b));
        } else if diet_w_a > 0.8 || diet_w_b > 0.8 {
            breakdown.push("lifestyle.diet_mismatch", -15.0 * diet_w_a.max(diet_w_b));
        }
    }

    if let (Some(occ_a), Some(occ_b)) = (a.demographics.occupation(), b.demographics.occupation()) {
        if similar_occupation(occ_a, occ_b) {
            breakdown.push("lifestyle.similar_occupation", 5.0);
        }
    }

    breakdown
}

/// Signals sub-score: keyword bonuses for thematically overlapping
/// conversation-derived tags. A heuristic bonus layer, not a similarity
/// model.
fn score_signals(a: &Profile, b: &Profile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    if has_tag(a, &["diaspora"]) && has_tag(b, &["diaspora"]) {
        breakdown.push("signals.shared_diaspora", 10.0);
    }

    if has_tag(a, &["family"]) && has_tag(b, &["family"]) {
        breakdown.push("signals.family_oriented", 5.0);
    }

    if has_tag(a, &["intellectual", "curious"]) && has_tag(b, &["intellectual", "curious"]) {
        breakdown.push("signals.intellectual_match", 5.0);
    }

    breakdown
}

#[inline]
fn shared_marker(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y)
}

#[inline]
fn has_tag(profile: &Profile, needles: &[&str]) -> bool {
    profile.signal_tags.iter().any(|tag| {
        let label = tag.label.to_lowercase();
        needles.iter().any(|n| label.contains(n))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CulturalWeight, SignalTag};

    fn profile(id: &str, location: &str, age: u8) -> Profile {
        let mut p = Profile::new(id);
        p.demographics.location = Some(location.to_string());
        p.demographics.age = Some(age);
        p
    }

    #[test]
    fn test_same_city_short_circuits() {
        let a = profile("a", "Canberra, Australia", 28);
        let b = profile("b", "Canberra, Australia", 28);

        let (_, breakdown) = calculate_match_score(&a, &b);

        assert_eq!(breakdown.get("location.same_city"), Some(30.0));
        // No other location factors after the short-circuit
        let location_factors = breakdown
            .factors
            .iter()
            .filter(|f| f.factor.starts_with("location."))
            .count();
        assert_eq!(location_factors, 1);
    }

    #[test]
    fn test_same_metro_bonus() {
        let a = profile("a", "Parramatta", 30);
        let b = profile("b", "Bondi", 30);

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert_eq!(breakdown.get("location.same_metro"), Some(20.0));
    }

    #[test]
    fn test_cross_country_penalty() {
        let mut a = profile("a", "Canberra", 28);
        let mut b = profile("b", "Delhi", 28);
        // Rigid about location so flexibility doesn't kick in
        a.preferences.location_weight = Some(0.9);
        b.preferences.location_weight = Some(0.9);

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert_eq!(breakdown.get("location.different_country"), Some(-10.0));
        assert_eq!(breakdown.get("location.both_flexible"), None);
    }

    #[test]
    fn test_cultural_compensation_requires_high_weight() {
        let mut a = profile("a", "Canberra", 28);
        let mut b = profile("b", "Sydney", 28);
        a.demographics.caste_community = Some("Patel".to_string());
        b.demographics.caste_community = Some("Patel".to_string());
        a.demographics.native_language = Some("Gujarati".to_string());
        b.demographics.native_language = Some("Gujarati".to_string());

        let (_, without) = calculate_match_score(&a, &b);
        assert_eq!(without.get("location.cultural_compensation"), None);

        // One side declaring HIGH unlocks it for the pair
        a.preferences.cultural_weight = Some(CulturalWeight::High);
        let (_, with) = calculate_match_score(&a, &b);
        assert_eq!(with.get("location.cultural_compensation"), Some(20.0));
    }

    #[test]
    fn test_caste_weight_scales_bonus() {
        let mut a = profile("a", "Sydney", 28);
        let mut b = profile("b", "Sydney", 28);
        a.demographics.caste_community = Some("Patel".to_string());
        b.demographics.caste_community = Some("Patel".to_string());
        a.preferences.caste_weight = Some(0.8);
        b.preferences.caste_weight = Some(0.4);

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert_eq!(breakdown.get("cultural.same_caste"), Some(15.0 * 0.8));
    }

    #[test]
    fn test_different_caste_penalty_only_when_important() {
        let mut a = profile("a", "Sydney", 28);
        let mut b = profile("b", "Sydney", 28);
        a.demographics.caste_community = Some("Patel".to_string());
        b.demographics.caste_community = Some("Sharma".to_string());

        // Default weights (0.5) stay under the 0.7 trigger
        let (_, neutral) = calculate_match_score(&a, &b);
        assert_eq!(neutral.get("cultural.different_caste"), None);

        a.preferences.caste_weight = Some(0.9);
        let (_, penalized) = calculate_match_score(&a, &b);
        assert_eq!(penalized.get("cultural.different_caste"), Some(-9.0));
    }

    #[test]
    fn test_diet_mismatch_penalty() {
        let mut a = profile("a", "Sydney", 28);
        let mut b = profile("b", "Sydney", 28);
        a.demographics.vegetarian = Some(true);
        b.demographics.vegetarian = Some(false);
        a.preferences.diet_weight = Some(0.9);

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert_eq!(breakdown.get("lifestyle.diet_mismatch"), Some(-15.0 * 0.9));
    }

    #[test]
    fn test_signal_tag_overlap() {
        let mut a = profile("a", "Sydney", 28);
        let mut b = profile("b", "Melbourne", 28);
        a.signal_tags.push(SignalTag::new("mentioned diaspora loneliness"));
        a.signal_tags.push(SignalTag::new("intellectually curious"));
        b.signal_tags.push(SignalTag::new("shared diaspora experience"));
        b.signal_tags.push(SignalTag::new("values intellectual depth"));

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert_eq!(breakdown.get("signals.shared_diaspora"), Some(10.0));
        assert_eq!(breakdown.get("signals.intellectual_match"), Some(5.0));
        assert_eq!(breakdown.get("signals.family_oriented"), None);
    }

    #[test]
    fn test_invalid_weights_clamped() {
        let mut a = profile("a", "Sydney", 28);
        let mut b = profile("b", "Sydney", 28);
        a.demographics.vegetarian = Some(true);
        b.demographics.vegetarian = Some(true);
        a.preferences.diet_weight = Some(3.5);
        b.preferences.diet_weight = Some(-1.0);

        let (_, breakdown) = calculate_match_score(&a, &b);
        // 3.5 clamps to 1.0, -1.0 clamps to 0.0
        assert_eq!(breakdown.get("lifestyle.diet_match"), Some(10.0));
    }

    #[test]
    fn test_nan_weight_falls_back_to_default() {
        assert_eq!(effective_weight(Some(f64::NAN)), DEFAULT_WEIGHT);
        assert_eq!(effective_weight(None), DEFAULT_WEIGHT);
        assert_eq!(effective_weight(Some(0.3)), 0.3);
    }

    #[test]
    fn test_missing_age_contributes_nothing() {
        let mut a = profile("a", "Sydney", 28);
        a.demographics.age = None;
        let b = profile("b", "Sydney", 28);

        let (_, breakdown) = calculate_match_score(&a, &b);
        assert!(breakdown.factors.iter().all(|f| !f.factor.starts_with("age.")));
    }
}
