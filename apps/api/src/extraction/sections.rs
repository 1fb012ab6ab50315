//! Section segmentation: slices a flat text into named spans by header patterns.
//!
//! Each section is located independently against the full text: content
//! starts right after the first match of its own header (plus any trailing
//! colon/whitespace) and runs to the earliest match of any *other* header
//! after that point, or to the end of the text. Because sections are not
//! partitioned iteratively, ambiguous header words can make spans overlap.
//! That is accepted heuristic behaviour.
//!
//! Tie-break: candidate ends are scanned in table order and the minimum
//! offset wins, so for equidistant matches the first-declared header decides.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::extraction::taxonomy::NamedPattern;
use crate::extraction::{compile_pattern, ExtractError};

/// Section name → trimmed content. Absent key means the header never matched.
pub type SectionMap = BTreeMap<String, String>;

/// Reads a section, treating a missing one as empty.
pub fn section<'a>(sections: &'a SectionMap, name: &str) -> &'a str {
    sections.get(name).map(String::as_str).unwrap_or("")
}

struct Header {
    name: String,
    /// Header plus optional `:`/whitespace; its end is where content begins.
    opener: Regex,
    /// Bare header, used to find where another section starts.
    bare: Regex,
}

pub struct SectionSegmenter {
    headers: Vec<Header>,
}

impl SectionSegmenter {
    pub fn new(table_name: &str, patterns: &[NamedPattern]) -> Result<Self, ExtractError> {
        let headers = patterns
            .iter()
            .map(|p| {
                let table = format!("{table_name}/{}", p.name);
                Ok(Header {
                    name: p.name.clone(),
                    opener: compile_pattern(&table, &format!(r"(?:{})[:\s]*", p.pattern))?,
                    bare: compile_pattern(&table, &p.pattern)?,
                })
            })
            .collect::<Result<Vec<_>, ExtractError>>()?;

        Ok(Self { headers })
    }

    pub fn segment(&self, text: &str) -> SectionMap {
        let mut sections = SectionMap::new();

        for (idx, header) in self.headers.iter().enumerate() {
            let Some(opening) = header.opener.find(text) else {
                continue;
            };
            let start = opening.end();
            let rest = &text[start..];

            let end = self
                .headers
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != idx)
                .filter_map(|(_, other)| other.bare.find(rest).map(|m| start + m.start()))
                .min()
                .unwrap_or(text.len());

            sections.insert(header.name.clone(), text[start..end].trim().to_string());
        }

        debug!(
            "Segmented {} of {} sections: {:?}",
            sections.len(),
            self.headers.len(),
            sections.keys().collect::<Vec<_>>()
        );
        sections
    }
}
