use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::job_entities::{extract_company_info, CompanyInfo};
use crate::extraction::normalize::normalize;
use crate::extraction::requirements::{split_items, RequirementClassifier, RequirementSet};
use crate::extraction::sections::{section, SectionMap, SectionSegmenter};
use crate::extraction::tagger::{PatternTagger, SkillResult};
use crate::extraction::taxonomy::{section as names, Taxonomy};
use crate::extraction::ExtractError;

/// Everything extracted from one job posting. Every key is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedJobPosting {
    pub raw_text: String,
    pub cleaned_text: String,
    pub sections: SectionMap,
    pub requirements: RequirementSet,
    pub responsibilities: Vec<String>,
    pub skills: SkillResult,
    pub company_info: CompanyInfo,
    pub taxonomy_version: String,
}

pub struct JobPostingExtractor {
    segmenter: SectionSegmenter,
    tagger: PatternTagger,
    classifier: RequirementClassifier,
    version: String,
}

impl JobPostingExtractor {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, ExtractError> {
        Ok(Self {
            segmenter: SectionSegmenter::new("job_sections", &taxonomy.job_sections)?,
            tagger: PatternTagger::new("job_skills", &taxonomy.job_skills)?,
            classifier: RequirementClassifier::new(
                &taxonomy.must_have_indicators,
                &taxonomy.nice_to_have_indicators,
            ),
            version: taxonomy.version.clone(),
        })
    }

    pub fn taxonomy_version(&self) -> &str {
        &self.version
    }

    /// Runs the full job-posting pipeline. Never fails; misses come back as
    /// `None` or empty collections.
    pub fn parse(&self, text: &str) -> ParsedJobPosting {
        let cleaned = normalize(text);
        let sections = self.segmenter.segment(&cleaned);

        let requirement_lines = split_items(section(&sections, names::REQUIREMENTS));
        let nice_to_have_lines = split_items(section(&sections, names::NICE_TO_HAVE));
        let responsibilities = split_items(section(&sections, names::RESPONSIBILITIES));

        let requirements = self
            .classifier
            .classify(&requirement_lines, &nice_to_have_lines);
        let skills = self.tagger.tag(&cleaned);
        let company_info = extract_company_info(&cleaned);

        debug!(
            "Parsed job posting: {} chars, {} sections, {} skills, {} responsibilities",
            cleaned.len(),
            sections.len(),
            skills.all.len(),
            responsibilities.len()
        );

        ParsedJobPosting {
            raw_text: text.to_string(),
            cleaned_text: cleaned,
            sections,
            requirements,
            responsibilities,
            skills,
            company_info,
            taxonomy_version: self.version.clone(),
        }
    }
}
