//! Core domain types for flowprint
//!
//! These types model the questionnaire catalog, the raw answers submitted
//! for scoring, and the profile produced for callers.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Category** | One of 10 fixed behavioral dimensions (e.g. "Energy Rhythm") |
//! | **Sub-style** | A named variant within a category (e.g. "Bursty"); scoring target |
//! | **Endorsement** | A single +1 credit awarded to one sub-style by one answer |
//! | **Driver** | The dominant category, excluding "Creation" |
//! | **Creation** | The specially-treated category whose winning sub-style gets its own tie-break chain |
//! | **Growth edge** | The least-developed / most-variable category |
//!
//! The `Profile` struct is the externally-visible JSON shape; its field names
//! and nesting are a compatibility contract and must not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ============================================
// Questions and answers
// ============================================

/// How a question slot expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerModality {
    /// Five-point agreement scale ("Strongly Disagree" .. "Strongly Agree")
    Scale,
    /// Multiple choice; the answer token is an option key ("A", "B", ...)
    Choice,
}

impl AnswerModality {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerModality::Scale => "scale",
            AnswerModality::Choice => "choice",
        }
    }
}

impl std::str::FromStr for AnswerModality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scale" => Ok(AnswerModality::Scale),
            "choice" => Ok(AnswerModality::Choice),
            _ => Err(format!("unknown answer modality: {}", s)),
        }
    }
}

/// Metadata for one question slot in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionMeta {
    /// Unique slot identifier, e.g. "ER-5"
    pub slot: String,
    /// Category this question belongs to
    pub category: String,
    /// Base sub-style this question endorses; the reverse sentinel for
    /// reverse-coded items
    pub sub_style: String,
    /// True when agreement indicates the opposite of the nominal sub-style
    pub reverse: bool,
    /// Answer modality for this slot
    pub modality: AnswerModality,
    /// Option key -> sub-style map; present iff modality is Choice
    pub choice_map: Option<HashMap<String, String>>,
}

/// One submitted answer: a slot and the raw token the respondent chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Question slot identifier
    pub slot: String,
    /// Raw answer token: a scale label for Scale items, an option key for
    /// Choice items
    pub token: String,
}

// ============================================
// Intermediate scoring results
// ============================================

/// Endorsement counts for every catalog sub-style.
///
/// Invariant: contains exactly the sub-styles the catalog declares: every
/// one of them, defaulting to 0, and nothing else.
pub type RawTotals = BTreeMap<String, u32>;

/// Derived statistics for one category's sub-style totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryMetrics {
    /// Arithmetic mean of the category's sub-style totals, rounded to 2 dp
    pub strength: f64,
    /// Max minus min sub-style total
    pub range: u32,
    /// Sample standard deviation (n-1), rounded to 2 dp; 0.0 with <= 1
    /// scoring sub-style
    pub std_dev: f64,
}

/// Everything the selectors produced, before assembly into a `Profile`.
#[derive(Debug, Clone)]
pub struct ScoringResult {
    /// Endorsement totals for every catalog sub-style
    pub raw_totals: RawTotals,
    /// Per-category derived metrics
    pub metrics: BTreeMap<String, CategoryMetrics>,
    /// Selected driver category (never "Creation")
    pub driver: String,
    /// Selected Creation sub-style
    pub creation: String,
    /// Selected growth-edge category
    pub growth_edge: String,
}

// ============================================
// Profile (wire shape)
// ============================================

/// Descriptive text for a (creation sub-style, driver category) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelText {
    /// Short headline for the pairing
    pub headline: String,
    /// One-sentence signature description
    pub signature: String,
}

/// Per-category display entry in the profile.
///
/// `percentile` is reserved for a future version and is always null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBar {
    /// Always `None` in this version
    pub percentile: Option<f64>,
    /// Highest-scoring sub-style in the category, for display
    #[serde(rename = "dominantSubStyle")]
    pub dominant_sub_style: Option<String>,
}

/// The scored profile returned to callers.
///
/// Serialized field names and nesting are preserved exactly for
/// compatibility with anything that stores or renders this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Headline text from the label table (or a placeholder)
    pub headline: String,
    /// Signature sentence from the label table (or a placeholder)
    pub signature: String,
    /// Dominant non-Creation category
    pub driver: String,
    /// Winning Creation sub-style
    pub creation: String,
    /// Least-developed / most-variable category
    #[serde(rename = "growthEdge")]
    pub growth_edge: String,
    /// Per-category display bars, keyed by category name
    #[serde(rename = "categoryBars")]
    pub category_bars: BTreeMap<String, CategoryBar>,
    /// Trait clashes; always empty in this version
    pub clashes: Vec<String>,
    /// UTC instant the profile was computed, ISO-8601
    pub timestamp: DateTime<Utc>,
    /// Endorsement count for every catalog sub-style
    #[serde(rename = "subStyleScores")]
    pub sub_style_scores: BTreeMap<String, u32>,
    /// Strength (mean) for every category
    #[serde(rename = "categoryStrengths")]
    pub category_strengths: BTreeMap<String, f64>,
}
