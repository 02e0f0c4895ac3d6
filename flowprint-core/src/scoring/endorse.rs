//! Endorsement rules and raw total aggregation
//!
//! An answer converts to zero or one endorsement: a single +1 credit to
//! exactly one sub-style. Malformed input never errors: unknown slots,
//! unrecognized scale tokens, unmapped choice options, and options mapping
//! outside the catalog all simply award nothing.

use crate::catalog::{Catalog, CREATION_CATEGORY, NEUTRAL_SENTINEL};
use crate::types::{Answer, AnswerModality, RawTotals};
use std::collections::HashMap;

/// Map a five-point scale label to its score. Unrecognized tokens score 0
/// and award no endorsement.
pub fn scale_score(token: &str) -> u8 {
    match token {
        "Strongly Disagree" => 1,
        "Disagree" => 2,
        "Neutral" => 3,
        "Agree" => 4,
        "Strongly Agree" => 5,
        _ => 0,
    }
}

/// The sub-style one answer endorses, if any.
fn endorsement_target(catalog: &Catalog, answer: &Answer) -> Option<String> {
    let meta = match catalog.question_by_slot(&answer.slot) {
        Some(meta) => meta,
        None => {
            tracing::debug!(slot = %answer.slot, "unknown slot, answer dropped");
            return None;
        }
    };

    match meta.modality {
        AnswerModality::Scale => {
            let score = scale_score(&answer.token);
            if meta.reverse {
                // Disagreement with a reverse-coded statement endorses the
                // slot's reverse target.
                if score == 0 || score > 2 {
                    return None;
                }
                match catalog.reverse_target(&meta.slot) {
                    Some(target) => Some(target.to_string()),
                    None => {
                        tracing::warn!(
                            slot = %meta.slot,
                            "reverse-coded slot has no reverse target, no endorsement"
                        );
                        None
                    }
                }
            } else if score >= 4 {
                Some(meta.sub_style.clone())
            } else {
                None
            }
        }
        AnswerModality::Choice => {
            let chosen = meta.choice_map.as_ref()?.get(&answer.token)?;
            if chosen == NEUTRAL_SENTINEL {
                return None;
            }
            if !catalog.contains_sub_style(chosen) {
                tracing::warn!(
                    slot = %meta.slot,
                    option = %answer.token,
                    sub_style = %chosen,
                    "choice option maps outside the catalog, no endorsement"
                );
                return None;
            }
            Some(chosen.clone())
        }
    }
}

/// Fold all answers into a complete raw totals map.
///
/// The result contains exactly the catalog's sub-styles: every one of them
/// (defaulting to 0) and nothing else, even if an endorsement references a
/// name the catalog does not declare.
pub fn raw_totals(catalog: &Catalog, answers: &[Answer]) -> RawTotals {
    let mut totals: RawTotals = catalog
        .all_sub_styles()
        .map(|s| (s.to_string(), 0))
        .collect();

    for answer in answers {
        if let Some(target) = endorsement_target(catalog, answer) {
            if let Some(count) = totals.get_mut(&target) {
                *count += 1;
            }
        }
    }

    totals
}

/// Endorsed-item counts restricted to Creation-category questions.
///
/// Used by the Creation tie-break: the endorsement rules re-run over only
/// the answers whose slot belongs to the Creation category, and only
/// Creation sub-styles are counted.
pub fn creation_endorsement_counts(
    catalog: &Catalog,
    answers: &[Answer],
) -> HashMap<String, u32> {
    let creation_styles = catalog.sub_styles_of(CREATION_CATEGORY);
    let mut counts: HashMap<String, u32> = HashMap::new();

    for answer in answers {
        let meta = match catalog.question_by_slot(&answer.slot) {
            Some(meta) if meta.category == CREATION_CATEGORY => meta,
            _ => continue,
        };
        if let Some(target) = endorsement_target(catalog, answer) {
            if creation_styles.contains(&target) {
                *counts.entry(target).or_insert(0) += 1;
            }
        }
    }

    counts
}
