use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::taxonomy::SkillCategory;
use crate::extraction::{compile_pattern, push_unique, ExtractError};

/// Skills found in a span of text.
///
/// `categorized` always carries every category of the taxonomy, empty or not.
/// `all` is the union in first-seen order with literal duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillResult {
    pub categorized: BTreeMap<String, Vec<String>>,
    pub all: Vec<String>,
}

/// Scans text against a category → pattern-list table.
pub struct PatternTagger {
    categories: Vec<(String, Vec<Regex>)>,
}

impl PatternTagger {
    pub fn new(table_name: &str, categories: &[SkillCategory]) -> Result<Self, ExtractError> {
        let categories = categories
            .iter()
            .map(|c| {
                let table = format!("{table_name}/{}", c.category);
                let patterns = c
                    .patterns
                    .iter()
                    .map(|p| compile_pattern(&table, p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((c.category.clone(), patterns))
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self { categories })
    }

    pub fn tag(&self, text: &str) -> SkillResult {
        let mut result = SkillResult::default();

        for (category, patterns) in &self.categories {
            let mut found = Vec::new();
            for pattern in patterns {
                for m in pattern.find_iter(text) {
                    push_unique(&mut found, m.as_str());
                }
            }
            for skill in &found {
                push_unique(&mut result.all, skill);
            }
            result.categorized.insert(category.clone(), found);
        }

        result
    }
}
