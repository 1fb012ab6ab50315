//! Requirement classification: must-have vs nice-to-have by indicator keywords.
//!
//! Policy:
//! - items segmented under a "nice to have" header are nice-to-have verbatim
//! - a line with only a nice-to-have indicator is nice-to-have
//! - everything else (both, must-have only, neither) is must-have
//!
//! Absence of signal never drops a requirement: it lands in `must_have`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::push_unique;

static ITEM_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\n-]").expect("valid regex"));
static LEADING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•\s]*").expect("valid regex"));
static TRAILING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.:\s]*$").expect("valid regex"));

const MIN_ITEM_CHARS: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementSet {
    pub must_have: Vec<String>,
    pub nice_to_have: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    MustHave,
    NiceToHave,
}

pub struct RequirementClassifier {
    must_have_indicators: Vec<String>,
    nice_to_have_indicators: Vec<String>,
}

impl RequirementClassifier {
    pub fn new(must_have_indicators: &[String], nice_to_have_indicators: &[String]) -> Self {
        Self {
            must_have_indicators: must_have_indicators.iter().map(|s| s.to_lowercase()).collect(),
            nice_to_have_indicators: nice_to_have_indicators
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    pub fn kind_of(&self, requirement: &str) -> RequirementKind {
        let lower = requirement.to_lowercase();
        let is_must = self.must_have_indicators.iter().any(|i| lower.contains(i.as_str()));
        let is_nice = self.nice_to_have_indicators.iter().any(|i| lower.contains(i.as_str()));

        if is_nice && !is_must {
            RequirementKind::NiceToHave
        } else {
            RequirementKind::MustHave
        }
    }

    /// Splits requirement lines into the two lists.
    ///
    /// Explicit nice-to-have items are seeded first; a requirement line whose
    /// text equals one of them stays nice-to-have so the lists never overlap.
    pub fn classify(&self, requirements: &[String], explicit_nice_to_have: &[String]) -> RequirementSet {
        let mut set = RequirementSet::default();

        for item in explicit_nice_to_have {
            push_unique(&mut set.nice_to_have, item);
        }

        for requirement in requirements {
            match self.kind_of(requirement) {
                RequirementKind::NiceToHave => push_unique(&mut set.nice_to_have, requirement),
                RequirementKind::MustHave => {
                    if !set.nice_to_have.contains(requirement) {
                        push_unique(&mut set.must_have, requirement);
                    }
                }
            }
        }

        debug!(
            "Classified {} requirement lines: {} must-have, {} nice-to-have",
            requirements.len() + explicit_nice_to_have.len(),
            set.must_have.len(),
            set.nice_to_have.len()
        );
        set
    }
}

/// Splits a bulleted section into items on `•`, newline or `-`.
///
/// Leading bullet noise and trailing `.`/`:` are trimmed; items of five
/// characters or fewer are dropped.
pub fn split_items(section_text: &str) -> Vec<String> {
    if section_text.is_empty() {
        return vec![];
    }

    ITEM_SEPARATOR
        .split(section_text)
        .filter_map(|raw| {
            let item = LEADING_NOISE.replace(raw.trim(), "");
            let item = TRAILING_NOISE.replace(&item, "");
            (item.chars().count() >= MIN_ITEM_CHARS).then(|| item.into_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::taxonomy::Taxonomy;

    fn classifier() -> RequirementClassifier {
        let t = Taxonomy::default();
        RequirementClassifier::new(&t.must_have_indicators, &t.nice_to_have_indicators)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_mixed_requirements() {
        let requirements = strings(&[
            "Bachelor's degree required",
            "5+ years of Python experience",
            "Nice to have: React knowledge",
            "Preferred: AWS certification",
            "Must have strong communication skills",
        ]);
        let nice = strings(&["Previous startup experience would be great"]);

        let set = classifier().classify(&requirements, &nice);

        assert!(set.must_have.contains(&"Bachelor's degree required".to_string()));
        assert!(set
            .must_have
            .contains(&"Must have strong communication skills".to_string()));
        assert!(set
            .nice_to_have
            .contains(&"Nice to have: React knowledge".to_string()));
        assert!(set
            .nice_to_have
            .contains(&"Preferred: AWS certification".to_string()));
        assert!(set
            .nice_to_have
            .contains(&"Previous startup experience would be great".to_string()));
    }

    #[test]
    fn test_no_signal_defaults_to_must_have() {
        assert_eq!(
            classifier().kind_of("5+ years of Python experience"),
            RequirementKind::MustHave
        );
        assert_eq!(classifier().kind_of("Rust"), RequirementKind::MustHave);
    }

    #[test]
    fn test_both_indicators_is_must_have() {
        assert_eq!(
            classifier().kind_of("Degree required, masters preferred"),
            RequirementKind::MustHave
        );
    }

    #[test]
    fn test_only_nice_indicator_is_nice_to_have() {
        assert_eq!(
            classifier().kind_of("Kafka is a plus"),
            RequirementKind::NiceToHave
        );
    }

    #[test]
    fn test_must_have_phrase_without_nice_indicator_is_must_have() {
        for line in [
            "MUST HAVE Kubernetes",
            "must have on-call availability",
            "Candidates must have a passport",
        ] {
            let set = classifier().classify(&strings(&[line]), &[]);
            assert_eq!(set.must_have, vec![line]);
            assert!(set.nice_to_have.is_empty());
        }
    }

    #[test]
    fn test_explicit_nice_items_seed_verbatim() {
        let set = classifier().classify(&[], &strings(&["Experience with React"]));
        // Contains a must-have indicator, but was segmented as nice-to-have.
        assert_eq!(set.nice_to_have, vec!["Experience with React"]);
        assert!(set.must_have.is_empty());
    }

    #[test]
    fn test_lists_are_disjoint() {
        let requirements = strings(&["Experience with React", "Go required", "Go required"]);
        let nice = strings(&["Experience with React"]);
        let set = classifier().classify(&requirements, &nice);

        for item in &set.must_have {
            assert!(!set.nice_to_have.contains(item), "{item} in both lists");
        }
        assert_eq!(set.must_have, vec!["Go required"]);
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        let requirements = strings(&["B required", "A required", "B required", "C plus", "C plus"]);
        let set = classifier().classify(&requirements, &[]);
        assert_eq!(set.must_have, vec!["B required", "A required"]);
        assert_eq!(set.nice_to_have, vec!["C plus"]);
    }

    #[test]
    fn test_empty_inputs() {
        let set = classifier().classify(&[], &[]);
        assert!(set.must_have.is_empty());
        assert!(set.nice_to_have.is_empty());
    }

    #[test]
    fn test_split_items_on_dashes_and_bullets() {
        let items = split_items("- Python experience - 3+ years coding • Strong SQL:\n- Go.");
        assert_eq!(
            items,
            vec!["Python experience", "3+ years coding", "Strong SQL"]
        );
    }

    #[test]
    fn test_split_items_drops_short_fragments() {
        // "Go" and "AWS" are too short to be a requirement line.
        assert_eq!(split_items("- Go - AWS - Rust async"), vec!["Rust async"]);
        assert_eq!(split_items("- abcde - abcdef"), vec!["abcdef"]);
    }

    #[test]
    fn test_split_items_empty_section() {
        assert!(split_items("").is_empty());
    }

    /// Hyphenated words are split too; inherited behaviour.
    #[test]
    fn test_split_items_splits_hyphenated_words() {
        assert_eq!(
            split_items("Collaborate with cross-functional teams"),
            vec!["Collaborate with cross", "functional teams"]
        );
    }
}
