use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::normalize::normalize;
use crate::extraction::resume_entities::{
    extract_contact_info, extract_education, extract_experience, extract_skills, ContactInfo,
    EducationEntry, ExperienceEntry,
};
use crate::extraction::sections::{section, SectionMap, SectionSegmenter};
use crate::extraction::tagger::{PatternTagger, SkillResult};
use crate::extraction::taxonomy::{section as names, Taxonomy};
use crate::extraction::ExtractError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub raw_text: String,
    pub cleaned_text: String,
    pub contact_info: ContactInfo,
    pub sections: SectionMap,
    /// Tokens split from the skills section, as written.
    pub skills: Vec<String>,
    /// The skills section tagged against the résumé skill table.
    pub skill_tags: SkillResult,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub summary: String,
    pub taxonomy_version: String,
}

pub struct ResumeExtractor {
    segmenter: SectionSegmenter,
    tagger: PatternTagger,
    version: String,
}

impl ResumeExtractor {
    pub fn new(taxonomy: &Taxonomy) -> Result<Self, ExtractError> {
        Ok(Self {
            segmenter: SectionSegmenter::new("resume_sections", &taxonomy.resume_sections)?,
            tagger: PatternTagger::new("resume_skills", &taxonomy.resume_skills)?,
            version: taxonomy.version.clone(),
        })
    }

    pub fn taxonomy_version(&self) -> &str {
        &self.version
    }

    pub fn parse(&self, text: &str) -> ParsedResume {
        let cleaned = normalize(text);
        let sections = self.segmenter.segment(&cleaned);

        let skills_text = section(&sections, names::SKILLS);
        let skills = extract_skills(skills_text);
        let skill_tags = self.tagger.tag(skills_text);
        let experience = extract_experience(section(&sections, names::EXPERIENCE));
        let education = extract_education(section(&sections, names::EDUCATION));
        let summary = section(&sections, names::SUMMARY).to_string();

        debug!(
            "Parsed resume: {} sections, {} skills, {} experience, {} education entries",
            sections.len(),
            skills.len(),
            experience.len(),
            education.len()
        );

        ParsedResume {
            raw_text: text.to_string(),
            contact_info: extract_contact_info(&cleaned),
            cleaned_text: cleaned,
            sections,
            skills,
            skill_tags,
            experience,
            education,
            summary,
            taxonomy_version: self.version.clone(),
        }
    }
}
