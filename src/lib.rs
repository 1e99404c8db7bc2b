pub mod corrections;
pub mod extraction;
pub mod logging;
pub mod matching;
pub mod profile;
pub mod skill_normalizer;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

pub use corrections::cefr::CefrLevel;
pub use extraction::structured_job_from_value;
pub use matching::{match_job_detail_to_user, match_job_to_user, MatchBucket, MatchResult};
pub use profile::{default_profile, profile_from_skill_test, ProfilePatch};
pub use skill_normalizer::{normalize_skill, normalize_skill_set, normalize_skills_vec};

/// Seniority ladder shared by jobs and profiles.
///
/// Jobs that do not state a level carry `None`; a profile with `None` means
/// the candidate's level is unknown, which the experience scorer treats as
/// half credit rather than a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl Seniority {
    /// Ordinal position on the intern < junior < mid < senior < lead scale.
    pub fn rank(self) -> i32 {
        match self {
            Seniority::Intern => 0,
            Seniority::Junior => 1,
            Seniority::Mid => 2,
            Seniority::Senior => 3,
            Seniority::Lead => 4,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unrecognized seniority label: {0}")]
pub struct ParseSeniorityError(pub String);

impl std::str::FromStr for Seniority {
    type Err = ParseSeniorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intern" => Ok(Seniority::Intern),
            "junior" => Ok(Seniority::Junior),
            "mid" => Ok(Seniority::Mid),
            "senior" => Ok(Seniority::Senior),
            "lead" => Ok(Seniority::Lead),
            other => Err(ParseSeniorityError(other.to_string())),
        }
    }
}

/// Normalized view of a job posting, built fresh per match call.
///
/// Upstream job APIs disagree on field names and shapes; everything here has
/// already been through the accessor ladder in [`extraction`], so the scorers
/// never probe raw records themselves. Skill lists are canonical and
/// deduplicated. `languages_required` entries stay verbatim; they are parsed
/// by the language gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredJob {
    pub skills_required: Vec<String>,
    pub skills_preferred: Vec<String>,
    pub tech_stack: Vec<String>,
    pub seniority: Option<Seniority>,
    pub role_category: Option<String>,
    pub min_years_experience: Option<u32>,
    pub languages_required: Vec<String>,
    pub industry_tags: Vec<String>,
}

/// Candidate profile as assembled by the profile/skill-test pipeline.
///
/// Skill lists need not be pre-normalized; the scorers normalize on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMatchProfile {
    pub user_skills: Vec<String>,
    pub tech_stack_experience: Vec<String>,
    pub seniority: Option<Seniority>,
    pub years_experience_total: Option<f64>,
    pub years_experience_by_industry: HashMap<String, f64>,
    pub industry_tags: Vec<String>,
    pub languages: Vec<String>,
    pub role_interests: Vec<String>,
}
