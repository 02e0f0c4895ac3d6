//! Per-category metrics over raw sub-style totals
//!
//! Strength is the mean of a category's sub-style totals, range is max
//! minus min, and the standard deviation is the sample form (n-1). Strength
//! and standard deviation are rounded to two decimals, half away from zero.

use crate::catalog::{Catalog, REVERSE_SENTINEL};
use crate::types::{CategoryMetrics, RawTotals};
use std::collections::BTreeMap;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute metrics for one category's totals.
fn metrics_for(scores: &[u32]) -> CategoryMetrics {
    if scores.is_empty() {
        return CategoryMetrics::default();
    }

    let n = scores.len() as f64;
    let sum: u32 = scores.iter().sum();
    let mean = f64::from(sum) / n;

    let min = *scores.iter().min().unwrap_or(&0);
    let max = *scores.iter().max().unwrap_or(&0);

    let std_dev = if scores.len() > 1 {
        let variance = scores
            .iter()
            .map(|&s| (f64::from(s) - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        round2(variance.sqrt())
    } else {
        0.0
    };

    CategoryMetrics {
        strength: round2(mean),
        range: max - min,
        std_dev,
    }
}

/// Derive metrics for every category in the catalog.
///
/// The reverse placeholder never contributes; a category with no scoring
/// sub-styles yields all zeros.
pub fn category_metrics(
    catalog: &Catalog,
    totals: &RawTotals,
) -> BTreeMap<String, CategoryMetrics> {
    catalog
        .categories()
        .iter()
        .map(|category| {
            let scores: Vec<u32> = catalog
                .sub_styles_of(category)
                .iter()
                .filter(|s| *s != REVERSE_SENTINEL)
                .map(|s| totals.get(s).copied().unwrap_or(0))
                .collect();
            (category.clone(), metrics_for(&scores))
        })
        .collect()
}
