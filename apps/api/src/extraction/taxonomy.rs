//! Pattern tables: section headers, skill taxonomies and requirement indicators.
//!
//! These are configuration data, not logic. The built-in table can be replaced
//! wholesale by a JSON file (see `TAXONOMY_PATH`) without touching extraction
//! code. Ordered tables are `Vec`s: iteration order is the tie-break order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const BUILTIN_VERSION: &str = "2024.1";

/// Section names the pipelines read. A custom taxonomy may declare more.
pub mod section {
    pub const REQUIREMENTS: &str = "requirements";
    pub const RESPONSIBILITIES: &str = "responsibilities";
    pub const BENEFITS: &str = "benefits";
    pub const ABOUT: &str = "about";
    pub const NICE_TO_HAVE: &str = "nice_to_have";

    pub const SUMMARY: &str = "summary";
    pub const EXPERIENCE: &str = "experience";
    pub const EDUCATION: &str = "education";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const CERTIFICATIONS: &str = "certifications";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPattern {
    pub name: String,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub version: String,
    pub job_sections: Vec<NamedPattern>,
    pub resume_sections: Vec<NamedPattern>,
    pub job_skills: Vec<SkillCategory>,
    pub resume_skills: Vec<SkillCategory>,
    pub must_have_indicators: Vec<String>,
    pub nice_to_have_indicators: Vec<String>,
}

const JOB_SECTIONS: &[(&str, &str)] = &[
    (
        section::REQUIREMENTS,
        r"(requirements?|qualifications?|what we.re looking for|must have)",
    ),
    (
        section::RESPONSIBILITIES,
        r"(responsibilities?|duties|what you.ll do|role|position)",
    ),
    (
        section::BENEFITS,
        r"(benefits?|perks|what we offer|compensation)",
    ),
    (section::ABOUT, r"(about|company|who we are)"),
    (section::NICE_TO_HAVE, r"(nice to have|preferred|bonus|plus)"),
];

const RESUME_SECTIONS: &[(&str, &str)] = &[
    (
        section::SUMMARY,
        r"(summary|profile|objective|about|overview)",
    ),
    (
        section::EXPERIENCE,
        r"(experience|employment|work|professional|career)",
    ),
    (
        section::EDUCATION,
        r"(education|academic|qualification|degree)",
    ),
    (
        section::SKILLS,
        r"(skills|competencies|technical|technologies|expertise)",
    ),
    (section::PROJECTS, r"(projects|portfolio|work samples)"),
    (
        section::CERTIFICATIONS,
        r"(certifications?|certificates?|licenses?)",
    ),
];

const JOB_SKILLS: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            r"\bPython\b",
            r"\bJava\b",
            r"\bJavaScript\b",
            r"\bTypeScript\b",
            r"\bC\+\+\b",
            r"\bC#\b",
            r"\bGo\b",
            r"\bRust\b",
            r"\bRuby\b",
            r"\bPHP\b",
            r"\bSwift\b",
            r"\bKotlin\b",
            r"\bScala\b",
            r"\bR\b",
            r"\bMatlab\b",
            r"\bPerl\b",
            r"\bShell\b",
            r"\bBash\b",
        ],
    ),
    (
        "frameworks_libraries",
        &[
            r"\bReact\b",
            r"\bAngular\b",
            r"\bVue\.?js\b",
            r"\bDjango\b",
            r"\bFlask\b",
            r"\bSpring\b",
            r"\bExpress\b",
            r"\bLaravel\b",
            r"\bNodejs\b",
            r"\bNode\.js\b",
            r"\bBootstrap\b",
            r"\bjQuery\b",
            r"\bTensorFlow\b",
            r"\bPyTorch\b",
            r"\bScikit-learn\b",
            r"\bPandas\b",
            r"\bNumPy\b",
            r"\bKeras\b",
            r"\bOpenCV\b",
        ],
    ),
    (
        "cloud_devops",
        &[
            r"\bAWS\b",
            r"\bAzure\b",
            r"\bGCP\b",
            r"\bGoogle Cloud\b",
            r"\bDocker\b",
            r"\bKubernetes\b",
            r"\bJenkins\b",
            r"\bGit\b",
            r"\bLinux\b",
            r"\bTerraform\b",
            r"\bAnsible\b",
            r"\bCI/CD\b",
            r"\bDevOps\b",
            r"\bSpark\b",
            r"\bKafka\b",
            r"\bRedis\b",
        ],
    ),
    (
        "databases",
        &[
            r"\bSQL\b",
            r"\bNoSQL\b",
            r"\bMySQL\b",
            r"\bPostgreSQL\b",
            r"\bMongoDB\b",
            r"\bCassandra\b",
            r"\bElasticsearch\b",
            r"\bRedshift\b",
            r"\bOracle\b",
            r"\bSQLite\b",
        ],
    ),
    (
        "tools_platforms",
        &[
            r"\bJira\b",
            r"\bConfluence\b",
            r"\bSlack\b",
            r"\bTableau\b",
            r"\bPower BI\b",
            r"\bSalesforce\b",
            r"\bShopify\b",
            r"\bWordPress\b",
            r"\bFigma\b",
            r"\bSketch\b",
            r"\bPhotoshop\b",
        ],
    ),
    (
        "soft_skills",
        &[
            r"\bAgile\b",
            r"\bScrum\b",
            r"\bKanban\b",
            r"\bLeadership\b",
            r"\bTeamwork\b",
            r"\bCommunication\b",
            r"\bProblem.solving\b",
            r"\bCritical thinking\b",
            r"\bProject management\b",
        ],
    ),
];

// Smaller combined table run over the résumé skills section only.
const RESUME_SKILLS: &[(&str, &[&str])] = &[
    (
        "technical",
        &[
            r"\bPython\b",
            r"\bJava\b",
            r"\bJavaScript\b",
            r"\bTypeScript\b",
            r"\bC\+\+\b",
            r"\bC#\b",
            r"\bGo\b",
            r"\bRust\b",
            r"\bSQL\b",
            r"\bReact\b",
            r"\bAngular\b",
            r"\bDjango\b",
            r"\bFlask\b",
            r"\bNode\.?js\b",
            r"\bAWS\b",
            r"\bAzure\b",
            r"\bGCP\b",
            r"\bDocker\b",
            r"\bKubernetes\b",
            r"\bGit\b",
            r"\bLinux\b",
            r"\bPostgreSQL\b",
            r"\bMongoDB\b",
        ],
    ),
    (
        "soft_skills",
        &[
            r"\bLeadership\b",
            r"\bCommunication\b",
            r"\bTeamwork\b",
            r"\bAgile\b",
            r"\bScrum\b",
            r"\bProblem.solving\b",
        ],
    ),
];

const MUST_HAVE_INDICATORS: &[&str] = &[
    "required",
    "must have",
    "essential",
    "mandatory",
    "minimum",
    "bachelor",
    "degree",
    "years of experience",
    "experience with",
    "proficient",
    "strong knowledge",
    "demonstrated experience",
];

const NICE_TO_HAVE_INDICATORS: &[&str] = &[
    "preferred",
    "nice to have",
    "bonus",
    "plus",
    "ideal",
    "would be great",
    "advantage",
    "desirable",
    "beneficial",
];

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            version: BUILTIN_VERSION.to_string(),
            job_sections: named_patterns(JOB_SECTIONS),
            resume_sections: named_patterns(RESUME_SECTIONS),
            job_skills: skill_categories(JOB_SKILLS),
            resume_skills: skill_categories(RESUME_SKILLS),
            must_have_indicators: strings(MUST_HAVE_INDICATORS),
            nice_to_have_indicators: strings(NICE_TO_HAVE_INDICATORS),
        }
    }
}

impl Taxonomy {
    /// Loads a replacement taxonomy from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read taxonomy file '{}'", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid taxonomy file '{}'", path.display()))
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let taxonomy: Taxonomy = serde_json::from_str(raw)?;
        if taxonomy.version.trim().is_empty() {
            anyhow::bail!("taxonomy 'version' must not be empty");
        }
        Ok(taxonomy)
    }
}

fn named_patterns(table: &[(&str, &str)]) -> Vec<NamedPattern> {
    table
        .iter()
        .map(|&(name, pattern)| NamedPattern {
            name: name.to_string(),
            pattern: pattern.to_string(),
        })
        .collect()
}

fn skill_categories(table: &[(&str, &[&str])]) -> Vec<SkillCategory> {
    table
        .iter()
        .map(|&(category, patterns)| SkillCategory {
            category: category.to_string(),
            patterns: strings(patterns),
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
