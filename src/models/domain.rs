use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Signals for one user, keyed by field name.
pub type SignalMap = BTreeMap<String, Signal>;

/// A user profile: hard-filter demographics, stated preferences, and
/// conversation-derived signal tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: String,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(rename = "signalTags", alias = "signal_tags", default)]
    pub signal_tags: Vec<SignalTag>,
}

impl Profile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            demographics: Demographics::default(),
            preferences: Preferences::default(),
            signal_tags: Vec::new(),
        }
    }
}

/// Hard-filter demographic attributes. Every field is optional: profiles fill
/// in incrementally over the onboarding conversation, and scoring must work
/// at any stage of completeness.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub location: Option<String>,
    /// Write-once identity field; age is derived from it when not set directly.
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(rename = "casteCommunity", default)]
    pub caste_community: Option<String>,
    #[serde(rename = "nativeLanguage", default)]
    pub native_language: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub vegetarian: Option<bool>,
    #[serde(default)]
    pub smoking: Option<String>,
    #[serde(default)]
    pub drinking: Option<String>,
    #[serde(rename = "maritalHistory", default)]
    pub marital_history: Option<String>,
    #[serde(rename = "relationshipIntent", default)]
    pub relationship_intent: Option<String>,
    #[serde(rename = "heightCm", default)]
    pub height_cm: Option<u16>,
}

impl Demographics {
    /// Age in whole years, preferring the explicitly stored value over the
    /// date of birth.
    pub fn age(&self) -> Option<u8> {
        self.age
            .or_else(|| self.date_of_birth.map(|dob| age_from_dob(dob, Utc::now().date_naive())))
    }

    /// Lowercased, trimmed location; `None` when absent or empty.
    pub fn location_normalized(&self) -> Option<String> {
        self.location
            .as_deref()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
    }

    /// Caste/community, treating an empty string as absent.
    pub fn caste(&self) -> Option<&str> {
        self.caste_community.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Native language, treating an empty string as absent.
    pub fn language(&self) -> Option<&str> {
        self.native_language.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }

    /// Occupation, treating an empty string as absent.
    pub fn occupation(&self) -> Option<&str> {
        self.occupation.as_deref().map(str::trim).filter(|o| !o.is_empty())
    }
}

/// Age in whole years on `today`.
pub fn age_from_dob(dob: NaiveDate, today: NaiveDate) -> u8 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.clamp(0, u8::MAX as i32) as u8
}

/// Per-attribute importance weights and flexibility flags. Weights are
/// 0.0 (flexible) to 1.0 (rigid); out-of-range upstream values are clamped
/// at scoring time rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "locationWeight", alias = "location_weight", default)]
    pub location_weight: Option<f64>,
    #[serde(rename = "culturalWeight", alias = "cultural_weight", default)]
    pub cultural_weight: Option<CulturalWeight>,
    #[serde(rename = "casteWeight", alias = "caste_weight", default)]
    pub caste_weight: Option<f64>,
    #[serde(rename = "languageWeight", alias = "language_weight", default)]
    pub language_weight: Option<f64>,
    #[serde(rename = "dietWeight", alias = "diet_weight", default)]
    pub diet_weight: Option<f64>,
    #[serde(rename = "ageFlexible", alias = "age_flexible", default)]
    pub age_flexible: bool,
    #[serde(default)]
    pub dealbreakers: Vec<String>,
    #[serde(rename = "greenFlags", alias = "green_flags", default)]
    pub green_flags: Vec<String>,
}

impl Preferences {
    /// Whether this profile declared cultural compatibility as a HIGH-weight
    /// concern, which unlocks the location compensation bonus.
    pub fn wants_high_cultural(&self) -> bool {
        matches!(self.cultural_weight, Some(CulturalWeight::High))
    }
}

/// Coarse importance of cultural markers (caste, language) to this user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CulturalWeight {
    Low,
    Medium,
    High,
}

/// A short free-text label derived from conversation, e.g.
/// "mentioned diaspora loneliness" or "family-oriented".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalTag {
    pub label: String,
    #[serde(default = "default_tag_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub category: Option<SignalCategory>,
}

impl SignalTag {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            confidence: default_tag_confidence(),
            category: None,
        }
    }
}

fn default_tag_confidence() -> f64 {
    1.0
}

/// A single extracted attribute with its confidence, produced by the
/// extraction collaborator and consumed once by the merger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub source: SignalSource,
    #[serde(default)]
    pub category: Option<SignalCategory>,
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Signal {
    pub fn new(value: Value, confidence: f64, source: SignalSource) -> Self {
        Self {
            value,
            confidence,
            source,
            category: None,
            updated_at: Some(Utc::now()),
        }
    }
}

/// How a signal was obtained: stated outright or inferred from context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    Explicit,
    #[default]
    Inferred,
}

/// Schema category a signal is routed to by the storage collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Lifestyle,
    Values,
    RelationshipStyle,
    Personality,
    FamilyBackground,
    MediaSignals,
    MatchLearnings,
}

/// Additive, insertion-ordered explanation of a match score. Factor names are
/// namespaced by sub-score ("location.same_city", "cultural.same_caste", ...)
/// and `total` is always the sum of the factor points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<ScoreFactor>,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn push(&mut self, factor: impl Into<String>, points: f64) {
        self.total += points;
        self.factors.push(ScoreFactor {
            factor: factor.into(),
            points,
        });
    }

    /// Append another partial breakdown, keeping factor order.
    pub fn merge(&mut self, other: ScoreBreakdown) {
        for f in other.factors {
            self.total += f.points;
            self.factors.push(f);
        }
    }

    /// Points for a named factor, if it contributed.
    pub fn get(&self, factor: &str) -> Option<f64> {
        self.factors.iter().find(|f| f.factor == factor).map(|f| f.points)
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// One named contribution to a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub points: f64,
}

/// A candidate with its score and explanation, as returned by `find_matches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub profile: Profile,
    #[serde(rename = "matchScore")]
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

/// Lifecycle of a proposed match, owned by the persisting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Proposed,
    Interested,
    Rejected,
}

/// Snapshot of a scored pair, ready for a collaborator to persist. The engine
/// creates `proposed` snapshots but never mutates existing match records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: uuid::Uuid,
    #[serde(rename = "userAId")]
    pub user_a_id: String,
    #[serde(rename = "userBId")]
    pub user_b_id: String,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub status: MatchStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    pub fn proposed(
        user_a_id: impl Into<String>,
        user_b_id: impl Into<String>,
        score: f64,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_a_id: user_a_id.into(),
            user_b_id: user_b_id.into(),
            score,
            breakdown,
            status: MatchStatus::Proposed,
            created_at: Utc::now(),
        }
    }
}
