//! Single-field extractors for job postings.
//!
//! Each extractor tries an ordered list of patterns and returns the first
//! match, or `None`. Earlier patterns are more specific and win over later,
//! more general ones. Nothing is guessed when no pattern matches.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::push_unique;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: Option<String>,
    pub size: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub job_level: Option<String>,
    pub employment_type: Option<String>,
    pub salary_range: Option<String>,
}

const ROLE_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "manager",
    "analyst",
    "specialist",
    "scientist",
];

const TITLE_SCAN_LINES: usize = 10;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
}

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:job title|position|role)[\s:]+([^\n]+)",
        r"(?m)^\s*([A-Z][^\n]*(?:engineer|developer|manager|analyst|specialist|coordinator|scientist))",
    ])
});

static LEVEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(senior|sr\.?)\b",
        r"(?i)\b(junior|jr\.?)\b",
        r"(?i)\b(lead|principal|staff)\b",
        r"(?i)\b(entry.level|intern)\b",
        r"(?i)\b(mid.level|intermediate)\b",
    ])
});

static EMPLOYMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)\b(full.time|part.time|contract|freelance|temporary|permanent)\b",
        r"(?i)\b(remote|hybrid|on.site|onsite)\b",
    ])
});

static COMPANY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:company|employer)[\s:]+([^\n]+)",
        r"(?i)(?:at|@)\s+([A-Z][a-zA-Z\s&.,]+(?:Inc|Corp|Ltd|LLC|Company))",
        r"(?i)^([A-Z][a-zA-Z\s&.,]+(?:Inc|Corp|Ltd|LLC|Company))",
    ])
});

static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(?:location|based in|office|headquarters)[\s:]*([a-zA-Z\s,.-]+(?:USA?|United States|UK|Canada|Australia))",
        r"(?i)(remote|hybrid|work from home)",
        r"(?i)([A-Z][a-z]+,\s*[A-Z]{2})",
        r"(?i)([A-Z][a-z]+,\s*[A-Z][a-z]+)",
    ])
});

// The `$` is stripped by normalization, so the labelled form is what
// usually matches on cleaned text.
static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"\$(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)\s*(?:-|to)\s*\$?(\d{1,3}(?:,\d{3})*(?:\.\d{2})?)",
        r"\$(\d{1,3}(?:,\d{3})*k?)\s*(?:-|to)\s*\$?(\d{1,3}(?:,\d{3})*k?)",
        r"(?i)salary[\s:]*\$?(\d{1,3}(?:,\d{3})*(?:k|,000)?)\s*(?:-|to)\s*\$?(\d{1,3}(?:,\d{3})*(?:k|,000)?)",
    ])
});

static SIZE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile_all(&[
        r"(?i)(\d+\+?\s*(?:employees?|people|staff))",
        r"(?i)(startup|small|medium|large|enterprise|fortune \d+)",
    ])
});

/// First capture group of the first pattern that matches, trimmed.
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|p| p.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

pub fn extract_job_title(text: &str) -> Option<String> {
    if let Some(title) = first_capture(&TITLE_PATTERNS, text) {
        return Some(title);
    }

    text.split('\n')
        .take(TITLE_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            !line.is_empty() && ROLE_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .map(str::to_string)
}

pub fn extract_job_level(text: &str) -> Option<String> {
    first_capture(&LEVEL_PATTERNS, text).map(|level| level.to_lowercase())
}

/// Collects every arrangement and location-mode mention, not just the first.
pub fn extract_employment_type(text: &str) -> Option<String> {
    let mut found = Vec::new();
    for pattern in EMPLOYMENT_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(m) = caps.get(1) {
                push_unique(&mut found, m.as_str());
            }
        }
    }

    (!found.is_empty()).then(|| found.join(", "))
}

pub fn extract_company_name(text: &str) -> Option<String> {
    first_capture(&COMPANY_PATTERNS, text)
}

pub fn extract_location(text: &str) -> Option<String> {
    first_capture(&LOCATION_PATTERNS, text)
}

/// Formats the first salary range found as `"$<low> - $<high>"`.
pub fn extract_salary_range(text: &str) -> Option<String> {
    SALARY_PATTERNS
        .iter()
        .find_map(|p| p.captures(text))
        .and_then(|caps| match (caps.get(1), caps.get(2)) {
            (Some(low), Some(high)) => Some(format!("${} - ${}", low.as_str(), high.as_str())),
            _ => None,
        })
}

pub fn extract_company_size(text: &str) -> Option<String> {
    first_capture(&SIZE_PATTERNS, text)
}

/// Runs every job-posting extractor independently.
pub fn extract_company_info(text: &str) -> CompanyInfo {
    CompanyInfo {
        name: extract_company_name(text),
        size: extract_company_size(text),
        location: extract_location(text),
        job_title: extract_job_title(text),
        job_level: extract_job_level(text),
        employment_type: extract_employment_type(text),
        salary_range: extract_salary_range(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::normalize::normalize;

    const COMPANY_TEXT: &str = r#"
        Senior Data Scientist
        TechCorp Inc.
        Location: New York, NY
        Full-time, Remote
        Salary: $130k - $160k

        We are a medium-sized company with 200+ employees.
    "#;

    #[test]
    fn test_extract_company_info_raw_text() {
        let info = extract_company_info(COMPANY_TEXT);

        assert!(info
            .job_title
            .as_deref()
            .unwrap_or("")
            .contains("Senior Data Scientist"));
        assert_eq!(info.job_level.as_deref(), Some("senior"));
        assert_eq!(info.employment_type.as_deref(), Some("Full-time, Remote"));
        assert_eq!(info.size.as_deref(), Some("200+ employees"));
        assert_eq!(info.salary_range.as_deref(), Some("$130k - $160k"));
    }

    #[test]
    fn test_extract_company_info_normalized_text() {
        let info = extract_company_info(&normalize(COMPANY_TEXT));
        assert_eq!(info.salary_range.as_deref(), Some("$130k - $160k"));
        assert_eq!(info.job_level.as_deref(), Some("senior"));
        assert_eq!(info.size.as_deref(), Some("200+ employees"));
    }

    #[test]
    fn test_labelled_salary_on_normalized_text() {
        let text = normalize("Salary: $120,000 - $150,000");
        assert_eq!(
            extract_salary_range(&text).as_deref(),
            Some("$120,000 - $150,000")
        );
    }

    #[test]
    fn test_dollar_salary_range_with_to() {
        assert_eq!(
            extract_salary_range("Pay is $95,000.00 to $110,000.00 yearly").as_deref(),
            Some("$95,000.00 - $110,000.00")
        );
    }

    #[test]
    fn test_no_salary() {
        assert_eq!(extract_salary_range("Competitive pay"), None);
    }

    #[test]
    fn test_first_line_title_and_level() {
        let text = normalize("Senior Software Engineer\nWe build things.");
        let title = extract_job_title(&text).unwrap();
        assert!(title.contains("Senior Software Engineer"));
        assert_eq!(extract_job_level(&text).as_deref(), Some("senior"));
    }

    #[test]
    fn test_explicit_title_label_wins() {
        let text = "Acme hiring\nJob Title: Staff Platform Engineer\nWe ship.";
        assert_eq!(
            extract_job_title(text).as_deref(),
            Some("Staff Platform Engineer")
        );
    }

    #[test]
    fn test_title_fallback_scans_first_lines() {
        // Capitalized keyword is missed by the line pattern; the keyword scan
        // over the first lines picks it up.
        let text = "acme corp\nData Analyst\nother";
        assert_eq!(extract_job_title(text).as_deref(), Some("Data Analyst"));
    }

    #[test]
    fn test_title_fallback_only_checks_first_ten_lines() {
        let mut text = "filler\n".repeat(10);
        text.push_str("Data Analyst");
        assert_eq!(extract_job_title(&text), None);
    }

    #[test]
    fn test_level_precedence_and_lowercase() {
        assert_eq!(extract_job_level("JUNIOR or Lead").as_deref(), Some("junior"));
        assert_eq!(extract_job_level("Principal Engineer").as_deref(), Some("principal"));
        assert_eq!(extract_job_level("Entry-Level role").as_deref(), Some("entry-level"));
        assert_eq!(extract_job_level("Engineer"), None);
    }

    #[test]
    fn test_senior_beats_lead_regardless_of_position() {
        assert_eq!(
            extract_job_level("Lead the team as a Senior engineer").as_deref(),
            Some("senior")
        );
    }

    #[test]
    fn test_employment_type_collects_all_and_dedups() {
        let text = "Full-time contract role, remote or hybrid. Remote first. Full-time.";
        assert_eq!(
            extract_employment_type(text).as_deref(),
            Some("Full-time, contract, remote, hybrid, Remote")
        );
    }

    #[test]
    fn test_employment_type_none() {
        assert_eq!(extract_employment_type("An office job"), None);
    }

    #[test]
    fn test_company_label() {
        assert_eq!(
            extract_company_name("Company: Acme Robotics\nLocation: Berlin, Germany").as_deref(),
            Some("Acme Robotics")
        );
    }

    #[test]
    fn test_location_country_suffix() {
        assert_eq!(
            extract_location("Office: Toronto, Ontario, Canada").as_deref(),
            Some("Toronto, Ontario, Canada")
        );
    }

    #[test]
    fn test_location_remote_mode() {
        assert_eq!(
            extract_location("Location: San Francisco, CA (Remote friendly)").as_deref(),
            Some("Remote")
        );
    }

    #[test]
    fn test_location_city_state() {
        assert_eq!(
            extract_location("Join us in Austin, TX").as_deref(),
            Some("Austin, TX")
        );
    }

    #[test]
    fn test_size_keyword_fallback() {
        assert_eq!(
            extract_company_size("A fast-growing startup").as_deref(),
            Some("startup")
        );
    }

    #[test]
    fn test_empty_text_yields_all_none() {
        assert_eq!(extract_company_info(""), CompanyInfo::default());
    }
}
