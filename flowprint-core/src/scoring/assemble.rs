//! Profile assembly
//!
//! Combines the selector outputs with the label table into the final
//! externally-visible `Profile`. A missing label pair substitutes fixed
//! placeholder text; it is a content gap, not a failure.

use crate::catalog::Catalog;
use crate::scoring::select::dominant_sub_style;
use crate::types::{CategoryBar, Profile, ScoringResult};
use chrono::Utc;
use std::collections::BTreeMap;

const DEFAULT_HEADLINE: &str = "Default Headline - Check Label Table";
const DEFAULT_SIGNATURE: &str = "Default Signature - Check Label Table";

/// Assemble the final profile from a scoring result.
pub fn assemble_profile(catalog: &Catalog, result: &ScoringResult) -> Profile {
    let (headline, signature) = match catalog.label_for(&result.creation, &result.driver) {
        Some(label) => (label.headline.clone(), label.signature.clone()),
        None => {
            tracing::warn!(
                creation = %result.creation,
                driver = %result.driver,
                "no label for pair, using placeholder text"
            );
            (DEFAULT_HEADLINE.to_string(), DEFAULT_SIGNATURE.to_string())
        }
    };

    let category_bars: BTreeMap<String, CategoryBar> = catalog
        .categories()
        .iter()
        .map(|category| {
            (
                category.clone(),
                CategoryBar {
                    // Reserved for a future version
                    percentile: None,
                    dominant_sub_style: dominant_sub_style(catalog, category, &result.raw_totals),
                },
            )
        })
        .collect();

    let category_strengths = result
        .metrics
        .iter()
        .map(|(category, m)| (category.clone(), m.strength))
        .collect();

    Profile {
        headline,
        signature,
        driver: result.driver.clone(),
        creation: result.creation.clone(),
        growth_edge: result.growth_edge.clone(),
        category_bars,
        clashes: Vec::new(),
        timestamp: Utc::now(),
        sub_style_scores: result.raw_totals.clone(),
        category_strengths,
    }
}
