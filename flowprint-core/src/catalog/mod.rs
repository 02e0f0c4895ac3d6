//! Questionnaire catalog
//!
//! The catalog is the read-only metadata the scoring engine consumes: every
//! question slot's category, sub-style, modality and choice map, the
//! canonical ordered category list with each category's sorted sub-styles,
//! the reverse-coding target table, and the (creation, driver) label table.
//!
//! It is built once at process start (from data files via [`loader`], or
//! directly via [`Catalog::build`] for synthetic test catalogs) and then
//! shared immutably across any number of concurrent scoring calls. There is
//! no lazily-initialized global state; every lookup returns an `Option` with
//! a documented fallback so silent-drop behavior is a visible policy.

pub mod loader;

pub use loader::load_catalog;

use crate::error::{Error, Result};
use crate::types::{LabelText, QuestionMeta};
use std::collections::{HashMap, HashSet};

/// Placeholder sub-style marking a question as reverse-coded.
///
/// Never endorsable and never displayed; the sub-style such a question
/// actually rewards comes from the reverse target table.
pub const REVERSE_SENTINEL: &str = "Reverse";

/// Choice-map sentinel for options that award no endorsement.
pub const NEUTRAL_SENTINEL: &str = "Neutral";

/// Name of the specially-treated category whose winning sub-style is
/// selected by its own tie-break chain and which never competes for Driver.
pub const CREATION_CATEGORY: &str = "Creation";

/// Fixed, process-wide priority order for Creation sub-style tie-breaking.
pub const CREATION_PRIORITY: &[&str] = &[
    "Architect",
    "Storyteller",
    "Visionary",
    "Artist",
    "Activator",
    "Connector",
];

/// Immutable questionnaire metadata.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Categories in canonical order
    categories: Vec<String>,
    /// Category -> lexicographically sorted sub-styles
    sub_styles: HashMap<String, Vec<String>>,
    /// Slot -> question metadata
    questions: HashMap<String, QuestionMeta>,
    /// Slot -> sub-style rewarded when the respondent disagrees
    reverse_targets: HashMap<String, String>,
    /// (creation sub-style, driver category) -> descriptive text
    labels: HashMap<(String, String), LabelText>,
    /// Union of every category's sub-styles, for membership checks
    all_sub_styles: HashSet<String>,
}

impl Catalog {
    /// Build a catalog from its parts, validating structural invariants.
    ///
    /// `categories` supplies the canonical ordering; each entry pairs a
    /// category name with its sub-styles (sorted here, so callers may pass
    /// them in any order). Fatal conditions: an empty category list, a
    /// category with no sub-styles, a sub-style name reused across
    /// categories, or a sub-style named like the reverse sentinel.
    pub fn build(
        categories: Vec<(String, Vec<String>)>,
        questions: Vec<QuestionMeta>,
        reverse_targets: HashMap<String, String>,
        labels: HashMap<(String, String), LabelText>,
    ) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::Catalog("catalog declares zero categories".to_string()));
        }

        let mut order = Vec::with_capacity(categories.len());
        let mut sub_styles = HashMap::new();
        let mut all_sub_styles = HashSet::new();

        for (category, mut styles) in categories {
            if styles.is_empty() {
                return Err(Error::Catalog(format!(
                    "category '{}' declares zero sub-styles",
                    category
                )));
            }
            styles.sort();
            for style in &styles {
                if style == REVERSE_SENTINEL {
                    return Err(Error::Catalog(format!(
                        "category '{}' declares the reverse placeholder as a sub-style",
                        category
                    )));
                }
                if !all_sub_styles.insert(style.clone()) {
                    return Err(Error::Catalog(format!(
                        "sub-style '{}' declared in more than one category",
                        style
                    )));
                }
            }
            sub_styles.insert(category.clone(), styles);
            order.push(category);
        }

        let questions = questions
            .into_iter()
            .map(|q| (q.slot.clone(), q))
            .collect();

        Ok(Self {
            categories: order,
            sub_styles,
            questions,
            reverse_targets,
            labels,
            all_sub_styles,
        })
    }

    /// Look up a question by slot. `None` for unknown slots; the engine
    /// silently drops answers to them.
    pub fn question_by_slot(&self, slot: &str) -> Option<&QuestionMeta> {
        self.questions.get(slot)
    }

    /// The sub-styles of a category, lexicographically sorted.
    /// Empty for an unknown category.
    pub fn sub_styles_of(&self, category: &str) -> &[String] {
        self.sub_styles
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The sub-style a reverse-coded slot rewards on disagreement.
    /// `None` means the reverse table is missing an entry for the slot,
    /// a data-consistency issue rather than a runtime error.
    pub fn reverse_target(&self, slot: &str) -> Option<&str> {
        self.reverse_targets.get(slot).map(String::as_str)
    }

    /// Descriptive text for a (creation sub-style, driver category) pair.
    /// `None` means the assembler substitutes placeholder text.
    pub fn label_for(&self, creation: &str, driver: &str) -> Option<&LabelText> {
        self.labels
            .get(&(creation.to_string(), driver.to_string()))
    }

    /// Categories in canonical order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Categories eligible for Driver selection, in canonical order.
    pub fn driver_candidates(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(String::as_str)
            .filter(|c| *c != CREATION_CATEGORY)
    }

    /// Whether a sub-style is declared anywhere in the catalog.
    pub fn contains_sub_style(&self, name: &str) -> bool {
        self.all_sub_styles.contains(name)
    }

    /// Iterate every declared sub-style, category by category.
    pub fn all_sub_styles(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| self.sub_styles[c].iter())
            .map(String::as_str)
    }

    /// Iterate all question metadata.
    pub fn questions(&self) -> impl Iterator<Item = &QuestionMeta> {
        self.questions.values()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_build_rejects_zero_categories() {
        let err = Catalog::build(vec![], vec![], HashMap::new(), HashMap::new());
        assert!(matches!(err, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_build_rejects_empty_category() {
        let err = Catalog::build(
            vec![("Rhythm".to_string(), vec![])],
            vec![],
            HashMap::new(),
            HashMap::new(),
        );
        assert!(matches!(err, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_build_rejects_duplicate_sub_style() {
        let err = Catalog::build(
            vec![
                ("A".to_string(), vec!["Shared".to_string()]),
                ("B".to_string(), vec!["Shared".to_string()]),
            ],
            vec![],
            HashMap::new(),
            HashMap::new(),
        );
        assert!(matches!(err, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_build_rejects_reverse_placeholder_as_sub_style() {
        let err = Catalog::build(
            vec![("A".to_string(), vec![REVERSE_SENTINEL.to_string()])],
            vec![],
            HashMap::new(),
            HashMap::new(),
        );
        assert!(matches!(err, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_sub_styles_are_sorted() {
        let catalog = Catalog::build(
            vec![(
                "Rhythm".to_string(),
                vec!["Steady".to_string(), "Bursty".to_string()],
            )],
            vec![],
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap();
        assert_eq!(catalog.sub_styles_of("Rhythm"), ["Bursty", "Steady"]);
        assert!(catalog.sub_styles_of("Nope").is_empty());
    }

    #[test]
    fn test_lookups() {
        let catalog = small_catalog();
        assert!(catalog.question_by_slot("R-1").is_some());
        assert!(catalog.question_by_slot("ZZ-9").is_none());
        assert_eq!(catalog.reverse_target("R-5"), Some("Steady"));
        assert_eq!(catalog.reverse_target("R-1"), None);
        assert!(catalog.label_for("Architect", "Rhythm").is_some());
        assert!(catalog.label_for("Storyteller", "Rhythm").is_none());
        assert!(catalog.contains_sub_style("Bursty"));
        assert!(!catalog.contains_sub_style("Unknown"));
    }

    #[test]
    fn test_driver_candidates_exclude_creation() {
        let catalog = small_catalog();
        let candidates: Vec<_> = catalog.driver_candidates().collect();
        assert_eq!(candidates, ["Rhythm"]);
    }
}
