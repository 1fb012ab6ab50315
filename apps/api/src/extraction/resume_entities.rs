use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// A work-history entry.
///
/// `company` is always `None`: the heuristic has no reliable signal to
/// separate employer from title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: Option<String>,
    pub dates: Option<String>,
    pub description: String,
    pub raw_text: String,
}

/// An education entry. `institution` is always `None`, same limitation as
/// `ExperienceEntry::company`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub raw_text: String,
}

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});

// Normalization turns `/` into a space, so both separators are accepted and
// the handle is reported in its canonical URL form.
static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com[/ ]in[/ ]([a-zA-Z0-9-]+)").expect("valid regex")
});

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)github\.com[/ ]([a-zA-Z0-9-]+)").expect("valid regex"));

static SKILL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;\n•|]").expect("valid regex"));
static LEADING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•\s]*").expect("valid regex"));
static TRAILING_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.:\s]*$").expect("valid regex"));

static EXPERIENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][^,]*(?:,|\s+\d{4})").expect("valid regex"));
static EDUCATION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][^,]*(?i:degree|bachelor|master|phd|university|college)")
        .expect("valid regex")
});

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{4})\s*[-–—]\s*(\d{4}|present|current)").expect("valid regex")
});
static LEADING_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}").expect("valid regex"));

static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(bachelor|master|phd|doctorate|associate|diploma|certificate)")
        .expect("valid regex")
});
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("valid regex"));

const MIN_EXPERIENCE_CHARS: usize = 21;
const MIN_EDUCATION_CHARS: usize = 11;

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().to_string()),
        linkedin: LINKEDIN
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|handle| format!("linkedin.com/in/{}", handle.as_str())),
        github: GITHUB
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|handle| format!("github.com/{}", handle.as_str())),
    }
}

/// Splits a skills section into individual skill tokens.
pub fn extract_skills(skills_text: &str) -> Vec<String> {
    SKILL_SEPARATOR
        .split(skills_text)
        .filter_map(|raw| {
            let skill = LEADING_NOISE.replace(raw.trim(), "");
            let skill = TRAILING_NOISE.replace(&skill, "");
            (skill.chars().count() > 1).then(|| skill.into_owned())
        })
        .collect()
}

/// Splits `text` at every newline whose following text matches `start`.
/// The newline itself is dropped.
fn split_at_entry_starts<'a>(text: &'a str, start: &Regex) -> Vec<&'a str> {
    let mut entries = Vec::new();
    let mut entry_start = 0;

    for (idx, _) in text.match_indices('\n') {
        if start.is_match(&text[idx + 1..]) {
            entries.push(&text[entry_start..idx]);
            entry_start = idx + 1;
        }
    }
    entries.push(&text[entry_start..]);
    entries
}

pub fn extract_experience(experience_text: &str) -> Vec<ExperienceEntry> {
    if experience_text.is_empty() {
        return vec![];
    }

    split_at_entry_starts(experience_text, &EXPERIENCE_START)
        .into_iter()
        .map(str::trim)
        .filter(|entry| entry.chars().count() >= MIN_EXPERIENCE_CHARS)
        .map(parse_experience_entry)
        .collect()
}

fn parse_experience_entry(entry: &str) -> ExperienceEntry {
    let mut lines = entry.split('\n');
    let title = lines.next().unwrap_or_default().trim().to_string();

    let description = lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !LEADING_YEAR.is_match(line))
        .collect::<Vec<_>>()
        .join("\n");

    ExperienceEntry {
        title,
        company: None,
        dates: DATE_RANGE.find(entry).map(|m| m.as_str().to_string()),
        description,
        raw_text: entry.to_string(),
    }
}

pub fn extract_education(education_text: &str) -> Vec<EducationEntry> {
    if education_text.is_empty() {
        return vec![];
    }

    split_at_entry_starts(education_text, &EDUCATION_START)
        .into_iter()
        .map(str::trim)
        .filter(|entry| entry.chars().count() >= MIN_EDUCATION_CHARS)
        .map(|entry| EducationEntry {
            degree: DEGREE.find(entry).map(|m| m.as_str().to_string()),
            institution: None,
            year: YEAR.find(entry).map(|m| m.as_str().to_string()),
            raw_text: entry.to_string(),
        })
        .collect()
}
