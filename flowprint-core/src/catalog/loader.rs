//! Catalog loading from on-disk JSON data files
//!
//! A catalog data directory holds five files:
//! - `glossary.json`: ordered array of categories with their sub-style
//!   definitions; the array order is the canonical category order
//! - `questions.json`: array of question records
//! - `choice_map.json`: slot -> option key -> sub-style, for choice slots
//! - `reverse_map.json`: slot -> sub-style rewarded on disagreement
//! - `labels.json`: array of (creation, driver, headline, signature) records
//!
//! Loading is fail-fast: unreadable or malformed files and structural
//! invariant violations abort startup. Per-question oddities (a choice slot
//! with no choice map) load with a warning and degrade at scoring time.

use super::{Catalog, REVERSE_SENTINEL};
use crate::error::{Error, Result};
use crate::types::{AnswerModality, LabelText, QuestionMeta};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// One entry in `questions.json`.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    slot: String,
    category: String,
    #[serde(rename = "subStyle")]
    sub_style: String,
    #[serde(rename = "answerType")]
    answer_type: String,
}

/// One entry in `glossary.json`. Sub-style definitions are keyed by name;
/// the definitions themselves are display content the engine never reads.
#[derive(Debug, Deserialize)]
struct GlossaryRecord {
    category: String,
    #[serde(rename = "subStyles")]
    sub_styles: BTreeMap<String, String>,
}

/// One entry in `labels.json`.
#[derive(Debug, Deserialize)]
struct LabelRecord {
    creation: String,
    driver: String,
    headline: String,
    signature: String,
}

fn read_json<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::Catalog(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Catalog(format!("failed to parse {}: {}", path.display(), e)))
}

/// Load a catalog from a data directory.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let glossary: Vec<GlossaryRecord> = read_json(dir, "glossary.json")?;
    let question_records: Vec<QuestionRecord> = read_json(dir, "questions.json")?;
    let choice_maps: HashMap<String, HashMap<String, String>> =
        read_json(dir, "choice_map.json")?;
    let reverse_targets: HashMap<String, String> = read_json(dir, "reverse_map.json")?;
    let label_records: Vec<LabelRecord> = read_json(dir, "labels.json")?;

    let categories: Vec<(String, Vec<String>)> = glossary
        .into_iter()
        .map(|g| (g.category, g.sub_styles.into_keys().collect()))
        .collect();

    let mut questions = Vec::with_capacity(question_records.len());
    for record in question_records {
        let modality: AnswerModality = record
            .answer_type
            .parse()
            .map_err(|e| Error::Catalog(format!("slot {}: {}", record.slot, e)))?;

        let choice_map = match modality {
            AnswerModality::Choice => {
                let map = choice_maps.get(&record.slot).cloned();
                if map.is_none() {
                    tracing::warn!(
                        slot = %record.slot,
                        "choice question has no entry in choice_map.json; its answers will not endorse"
                    );
                }
                map
            }
            AnswerModality::Scale => None,
        };

        let reverse = record.sub_style == REVERSE_SENTINEL;
        if reverse && !reverse_targets.contains_key(&record.slot) {
            tracing::warn!(
                slot = %record.slot,
                "reverse-coded question has no entry in reverse_map.json; disagreement will not endorse"
            );
        }

        questions.push(QuestionMeta {
            slot: record.slot,
            category: record.category,
            sub_style: record.sub_style,
            reverse,
            modality,
            choice_map,
        });
    }

    let labels = label_records
        .into_iter()
        .map(|r| {
            (
                (r.creation, r.driver),
                LabelText {
                    headline: r.headline,
                    signature: r.signature,
                },
            )
        })
        .collect();

    let catalog = Catalog::build(categories, questions, reverse_targets, labels)?;
    tracing::info!(
        categories = catalog.categories().len(),
        questions = catalog.questions().count(),
        "Catalog loaded"
    );
    Ok(catalog)
}
