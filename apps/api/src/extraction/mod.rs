//! Heuristic structure extraction for job postings and résumés.
//!
//! Both pipelines run the same shape: normalize → segment → {tag, classify,
//! entity extractors} → result record. Everything here is synchronous and
//! holds only compiled, read-only pattern tables, so one `DocumentParser`
//! is shared across all requests.

pub mod handlers;
pub mod job_entities;
pub mod job_parser;
pub mod normalize;
pub mod requirements;
pub mod resume_entities;
pub mod resume_parser;
pub mod sections;
pub mod tagger;
pub mod taxonomy;

use std::str::FromStr;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use job_parser::{JobPostingExtractor, ParsedJobPosting};
pub use resume_parser::{ParsedResume, ResumeExtractor};
pub use taxonomy::Taxonomy;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid pattern in table '{table}': `{pattern}`: {source}")]
    InvalidPattern {
        table: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("unknown document_type '{0}' (expected 'job_posting' or 'resume')")]
    UnknownDocumentType(String),
}

/// Which pipeline a document goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    JobPosting,
    Resume,
}

impl FromStr for DocumentKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "job_posting" => Ok(DocumentKind::JobPosting),
            "resume" => Ok(DocumentKind::Resume),
            other => Err(ExtractError::UnknownDocumentType(other.to_string())),
        }
    }
}

/// Input to a parse call. Borrowed for the duration of the call only.
#[derive(Debug, Clone, Copy)]
pub struct RawDocument<'a> {
    pub text: &'a str,
    pub kind: DocumentKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "document_type", rename_all = "snake_case")]
pub enum ParsedDocument {
    JobPosting(ParsedJobPosting),
    Resume(ParsedResume),
}

/// Both pipelines compiled from a single taxonomy.
pub struct DocumentParser {
    pub job: JobPostingExtractor,
    pub resume: ResumeExtractor,
}

impl DocumentParser {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, ExtractError> {
        Ok(Self {
            job: JobPostingExtractor::new(taxonomy)?,
            resume: ResumeExtractor::new(taxonomy)?,
        })
    }

    pub fn taxonomy_version(&self) -> &str {
        self.job.taxonomy_version()
    }

    pub fn parse_document(&self, document: &RawDocument<'_>) -> ParsedDocument {
        match document.kind {
            DocumentKind::JobPosting => ParsedDocument::JobPosting(self.job.parse(document.text)),
            DocumentKind::Resume => ParsedDocument::Resume(self.resume.parse(document.text)),
        }
    }
}

/// Compiles a taxonomy pattern case-insensitively, naming the table on failure.
pub(crate) fn compile_pattern(table: &str, pattern: &str) -> Result<Regex, ExtractError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ExtractError::InvalidPattern {
            table: table.to_string(),
            pattern: pattern.to_string(),
            source,
        })
}

/// Appends `item` unless an identical string is already present.
pub(crate) fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}
