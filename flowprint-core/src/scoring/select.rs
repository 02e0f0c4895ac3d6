//! Deterministic selection of driver, creation sub-style, growth edge, and
//! per-category dominant sub-styles
//!
//! Every selector is a pure function over the aggregated totals/metrics and
//! resolves ties the same way on every run. Final fallbacks resolve to the
//! first candidate in canonical category order.

use crate::catalog::{Catalog, CREATION_CATEGORY, CREATION_PRIORITY, REVERSE_SENTINEL};
use crate::scoring::endorse::creation_endorsement_counts;
use crate::types::{Answer, CategoryMetrics, RawTotals};
use std::collections::BTreeMap;

/// Select the driver category: maximum strength + range over the
/// non-Creation categories, ties broken by larger range, then canonical
/// category order. `None` only for a catalog with no driver candidates.
pub fn select_driver(
    catalog: &Catalog,
    metrics: &BTreeMap<String, CategoryMetrics>,
) -> Option<String> {
    let mut best: Option<(&str, f64, u32)> = None;

    for category in catalog.driver_candidates() {
        let m = metrics.get(category).copied().unwrap_or_default();
        let adjusted = m.strength + f64::from(m.range);

        let wins = match best {
            None => true,
            Some((_, best_adjusted, best_range)) => {
                adjusted > best_adjusted || (adjusted == best_adjusted && m.range > best_range)
            }
        };
        if wins {
            best = Some((category, adjusted, m.range));
        }
    }

    best.map(|(category, _, _)| category.to_string())
}

/// Select the winning Creation sub-style: highest raw total, ties broken by
/// (1) endorsed-item count over Creation-category questions, (2) the fixed
/// priority list, (3) first remaining candidate in discovery order.
pub fn select_creation(catalog: &Catalog, totals: &RawTotals, answers: &[Answer]) -> String {
    let creation_styles = catalog.sub_styles_of(CREATION_CATEGORY);
    if creation_styles.is_empty() {
        return CREATION_PRIORITY[0].to_string();
    }

    let mut highest = 0u32;
    let mut tied: Vec<&str> = Vec::new();
    for style in creation_styles {
        let score = totals.get(style).copied().unwrap_or(0);
        if tied.is_empty() || score > highest {
            highest = score;
            tied = vec![style];
        } else if score == highest {
            tied.push(style);
        }
    }

    if tied.len() > 1 {
        let counts = creation_endorsement_counts(catalog, answers);
        let max_count = tied
            .iter()
            .map(|s| counts.get(*s).copied().unwrap_or(0))
            .max()
            .unwrap_or(0);
        tied.retain(|s| counts.get(*s).copied().unwrap_or(0) == max_count);
    }

    if tied.len() > 1 {
        for style in CREATION_PRIORITY {
            if tied.contains(style) {
                return (*style).to_string();
            }
        }
    }

    tied[0].to_string()
}

/// Select the growth-edge category: minimum strength over all categories,
/// ties broken by larger standard deviation, then canonical order.
pub fn select_growth_edge(
    catalog: &Catalog,
    metrics: &BTreeMap<String, CategoryMetrics>,
) -> Option<String> {
    let mut best: Option<(&str, CategoryMetrics)> = None;

    for category in catalog.categories() {
        let m = metrics.get(category).copied().unwrap_or_default();

        let wins = match &best {
            None => true,
            Some((_, best_m)) => {
                m.strength < best_m.strength
                    || (m.strength == best_m.strength && m.std_dev > best_m.std_dev)
            }
        };
        if wins {
            best = Some((category, m));
        }
    }

    best.map(|(category, _)| category.to_string())
}

/// The dominant sub-style of a category for display: the first sub-style in
/// canonical sorted order reaching the running maximum raw total. The
/// reverse placeholder is always skipped; `None` for an empty category.
pub fn dominant_sub_style(
    catalog: &Catalog,
    category: &str,
    totals: &RawTotals,
) -> Option<String> {
    let mut best: Option<(&str, u32)> = None;

    for style in catalog.sub_styles_of(category) {
        if style == REVERSE_SENTINEL {
            continue;
        }
        let score = totals.get(style).copied().unwrap_or(0);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((style, score));
        }
    }

    best.map(|(style, _)| style.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::{answer, small_catalog};
    use crate::scoring::endorse::raw_totals;
    use crate::types::QuestionMeta;
    use std::collections::HashMap;

    fn metrics(entries: &[(&str, f64, u32, f64)]) -> BTreeMap<String, CategoryMetrics> {
        entries
            .iter()
            .map(|&(name, strength, range, std_dev)| {
                (
                    name.to_string(),
                    CategoryMetrics {
                        strength,
                        range,
                        std_dev,
                    },
                )
            })
            .collect()
    }

    /// Catalog with three driver candidates and a Creation category, no
    /// questions; selector tests drive it with synthetic metrics.
    fn three_category_catalog() -> Catalog {
        Catalog::build(
            vec![
                ("Alpha".to_string(), vec!["A1".to_string(), "A2".to_string()]),
                ("Beta".to_string(), vec!["B1".to_string(), "B2".to_string()]),
                ("Gamma".to_string(), vec!["G1".to_string(), "G2".to_string()]),
                (
                    CREATION_CATEGORY.to_string(),
                    vec!["Architect".to_string(), "Storyteller".to_string()],
                ),
            ],
            Vec::<QuestionMeta>::new(),
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_driver_picks_max_adjusted_score() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 1.0, 1, 0.0),
            ("Beta", 1.0, 3, 0.0),
            ("Gamma", 2.0, 1, 0.0),
            ("Creation", 9.0, 9, 0.0),
        ]);
        // Beta adjusted 4.0 beats Alpha 2.0 and Gamma 3.0; Creation excluded.
        assert_eq!(select_driver(&catalog, &m).as_deref(), Some("Beta"));
    }

    #[test]
    fn test_driver_tie_broken_by_larger_range() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 3.0, 1, 0.0),
            ("Beta", 2.0, 2, 0.0),
            ("Gamma", 1.0, 3, 0.0),
        ]);
        // All adjusted 4.0; Gamma has the largest range.
        assert_eq!(select_driver(&catalog, &m).as_deref(), Some("Gamma"));
    }

    #[test]
    fn test_driver_full_tie_falls_back_to_canonical_order() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 2.0, 2, 0.0),
            ("Beta", 2.0, 2, 0.0),
            ("Gamma", 2.0, 2, 0.0),
        ]);
        assert_eq!(select_driver(&catalog, &m).as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_growth_edge_picks_minimum_strength() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 2.0, 0, 0.0),
            ("Beta", 0.5, 0, 0.0),
            ("Gamma", 1.0, 0, 0.0),
            ("Creation", 3.0, 0, 0.0),
        ]);
        assert_eq!(select_growth_edge(&catalog, &m).as_deref(), Some("Beta"));
    }

    #[test]
    fn test_growth_edge_tie_broken_by_higher_std_dev() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 1.0, 0, 0.5),
            ("Beta", 1.0, 0, 1.5),
            ("Gamma", 2.0, 0, 3.0),
            ("Creation", 3.0, 0, 0.0),
        ]);
        assert_eq!(select_growth_edge(&catalog, &m).as_deref(), Some("Beta"));
    }

    #[test]
    fn test_growth_edge_full_tie_falls_back_to_canonical_order() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 1.0, 0, 0.5),
            ("Beta", 1.0, 0, 0.5),
            ("Gamma", 1.0, 0, 0.5),
            ("Creation", 1.0, 0, 0.5),
        ]);
        assert_eq!(select_growth_edge(&catalog, &m).as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_growth_edge_includes_creation() {
        let catalog = three_category_catalog();
        let m = metrics(&[
            ("Alpha", 1.0, 0, 0.0),
            ("Beta", 1.0, 0, 0.0),
            ("Gamma", 1.0, 0, 0.0),
            ("Creation", 0.1, 0, 0.0),
        ]);
        assert_eq!(
            select_growth_edge(&catalog, &m).as_deref(),
            Some("Creation")
        );
    }

    #[test]
    fn test_creation_highest_raw_total_wins() {
        let catalog = small_catalog();
        let answers = vec![
            answer("C-2", "Strongly Agree"),
            answer("C-3", "B"),
        ];
        let totals = raw_totals(&catalog, &answers);
        assert_eq!(select_creation(&catalog, &totals, &answers), "Storyteller");
    }

    #[test]
    fn test_creation_tie_broken_by_priority_list() {
        let catalog = small_catalog();
        // One endorsement each, both from Creation questions: raw totals tie
        // and endorsed-item counts tie, so the priority list decides and
        // Architect precedes Storyteller there.
        let answers = vec![
            answer("C-1", "Strongly Agree"),
            answer("C-2", "Strongly Agree"),
        ];
        let totals = raw_totals(&catalog, &answers);
        assert_eq!(select_creation(&catalog, &totals, &answers), "Architect");
    }

    #[test]
    fn test_creation_zero_answers_falls_back_to_priority_head() {
        let catalog = small_catalog();
        let totals = raw_totals(&catalog, &[]);
        // All totals zero: every style ties, counts tie at zero, Architect
        // leads the priority list.
        assert_eq!(select_creation(&catalog, &totals, &[]), "Architect");
    }

    #[test]
    fn test_dominant_sub_style_lexicographic_tie() {
        let catalog = small_catalog();
        let totals = raw_totals(&catalog, &[]);
        // Bursty and Steady tie at zero; Bursty sorts first.
        assert_eq!(
            dominant_sub_style(&catalog, "Rhythm", &totals).as_deref(),
            Some("Bursty")
        );
    }

    #[test]
    fn test_dominant_sub_style_picks_highest() {
        let catalog = small_catalog();
        let answers = vec![answer("R-2", "Strongly Agree")];
        let totals = raw_totals(&catalog, &answers);
        assert_eq!(
            dominant_sub_style(&catalog, "Rhythm", &totals).as_deref(),
            Some("Steady")
        );
    }

    #[test]
    fn test_dominant_sub_style_unknown_category_is_none() {
        let catalog = small_catalog();
        let totals = raw_totals(&catalog, &[]);
        assert_eq!(dominant_sub_style(&catalog, "Nope", &totals), None);
    }
}
