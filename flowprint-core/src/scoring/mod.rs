//! Scoring engine
//!
//! A pure, synchronous pipeline from submitted answers to a profile:
//!
//! ```text
//! ┌─────────┐    ┌──────────────┐    ┌─────────┐    ┌───────────┐    ┌──────────┐
//! │ Catalog │ ─► │ Endorsements │ ─► │ Metrics │ ─► │ Selectors │ ─► │ Profile  │
//! │ (shared)│    │ + raw totals │    │ per cat │    │ (4 rules) │    │ assembly │
//! └─────────┘    └──────────────┘    └─────────┘    └───────────┘    └──────────┘
//! ```
//!
//! No component mutates shared state; the catalog is borrowed read-only and
//! every intermediate value is created fresh per call. Scoring is total over
//! any input: an empty answer sequence yields a degenerate but well-formed
//! profile with every sub-style at zero.

mod assemble;
mod endorse;
mod metrics;
mod select;

pub use assemble::assemble_profile;
pub use endorse::{creation_endorsement_counts, raw_totals, scale_score};
pub use metrics::category_metrics;
pub use select::{dominant_sub_style, select_creation, select_driver, select_growth_edge};

use crate::catalog::Catalog;
use crate::types::{Answer, Profile, ScoringResult};

/// Run the aggregation and selection stages, without assembly.
///
/// Deterministic: identical answer sequences always produce identical
/// results against the same catalog.
pub fn compute_scoring(catalog: &Catalog, answers: &[Answer]) -> ScoringResult {
    let totals = raw_totals(catalog, answers);
    let metrics = category_metrics(catalog, &totals);

    let driver = select_driver(catalog, &metrics).unwrap_or_default();
    let creation = select_creation(catalog, &totals, answers);
    let growth_edge = select_growth_edge(catalog, &metrics).unwrap_or_default();

    ScoringResult {
        raw_totals: totals,
        metrics,
        driver,
        creation,
        growth_edge,
    }
}

/// Score a sequence of answers into a profile.
///
/// Pure except for the profile timestamp. Never fails: malformed answers
/// degrade per the endorsement rules instead of aborting the call.
pub fn score_answers(catalog: &Catalog, answers: &[Answer]) -> Profile {
    let result = compute_scoring(catalog, answers);
    tracing::debug!(
        driver = %result.driver,
        creation = %result.creation,
        growth_edge = %result.growth_edge,
        "Scoring complete"
    );
    assemble_profile(catalog, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{answer, small_catalog};

    #[test]
    fn test_empty_answers_yield_well_formed_profile() {
        let catalog = small_catalog();
        let profile = score_answers(&catalog, &[]);

        assert!(profile.sub_style_scores.values().all(|&v| v == 0));
        assert_eq!(profile.driver, "Rhythm");
        assert_eq!(profile.creation, "Architect");
        assert!(!profile.growth_edge.is_empty());
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let catalog = small_catalog();
        let answers = vec![
            answer("R-1", "Agree"),
            answer("R-5", "Strongly Disagree"),
            answer("R-6", "A"),
            answer("C-1", "Strongly Agree"),
        ];

        let first = score_answers(&catalog, &answers);
        let second = score_answers(&catalog, &answers);

        assert_eq!(first.driver, second.driver);
        assert_eq!(first.creation, second.creation);
        assert_eq!(first.growth_edge, second.growth_edge);
        assert_eq!(first.sub_style_scores, second.sub_style_scores);
        assert_eq!(first.category_strengths, second.category_strengths);
        assert_eq!(
            first
                .category_bars
                .iter()
                .map(|(k, v)| (k.clone(), v.dominant_sub_style.clone()))
                .collect::<Vec<_>>(),
            second
                .category_bars
                .iter()
                .map(|(k, v)| (k.clone(), v.dominant_sub_style.clone()))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_single_reverse_disagreement_isolated() {
        let catalog = small_catalog();
        // Only R-5 answered non-neutrally: its reverse target Steady gets
        // exactly one endorsement and nothing else scores.
        let answers = vec![
            answer("R-1", "Neutral"),
            answer("R-2", "Neutral"),
            answer("R-5", "Strongly Disagree"),
            answer("R-6", "B"),
            answer("C-1", "Neutral"),
            answer("C-2", "Neutral"),
        ];
        let profile = score_answers(&catalog, &answers);

        assert_eq!(profile.sub_style_scores["Steady"], 1);
        let others: u32 = profile
            .sub_style_scores
            .iter()
            .filter(|(name, _)| name.as_str() != "Steady")
            .map(|(_, &v)| v)
            .sum();
        assert_eq!(others, 0);
    }
}
