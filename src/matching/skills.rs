use std::collections::HashSet;

use serde_json::{json, Map};

use crate::matching::weights::{to_percent, weighted_average, SKILL_CATEGORY_WEIGHTS};
use crate::matching::MatchBucket;
use crate::skill_normalizer::{normalize_skill_set, normalize_skills_vec};
use crate::{StructuredJob, UserMatchProfile};

/// How many skill names a single reason line may list.
const REASON_NAME_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    pub bucket: MatchBucket,
    /// One `"Missing required skill: <name>"` entry per unmatched required skill.
    pub missing_critical: Vec<String>,
    /// Matched preferred skills, for badge generation.
    pub matched_preferred: Vec<String>,
}

/// Score skill coverage across required, preferred and tech-stack categories.
///
/// Categories the job does not specify are excluded and the 0.7/0.2/0.1
/// weights renormalize over the rest; a job listing no skills at all scores
/// `None`.
pub fn compute_skill_match(job: &StructuredJob, user: &UserMatchProfile) -> SkillMatchOutcome {
    let mut user_set = normalize_skill_set(&user.user_skills);
    user_set.extend(normalize_skill_set(&user.tech_stack_experience));

    let required = CategoryCoverage::new(&job.skills_required, &user_set);
    let preferred = CategoryCoverage::new(&job.skills_preferred, &user_set);
    let stack = CategoryCoverage::new(&job.tech_stack, &user_set);

    let percent = weighted_average(&[
        (SKILL_CATEGORY_WEIGHTS.required, required.coverage()),
        (SKILL_CATEGORY_WEIGHTS.preferred, preferred.coverage()),
        (SKILL_CATEGORY_WEIGHTS.stack, stack.coverage()),
    ])
    .map(to_percent);

    let mut reasons = Vec::new();
    if !required.matched.is_empty() {
        reasons.push(format!(
            "Matches {}/{} required skills: {}",
            required.matched.len(),
            required.total(),
            preview(&required.matched)
        ));
    }
    if !required.missing.is_empty() {
        reasons.push(format!(
            "Missing {} required skill(s): {}",
            required.missing.len(),
            preview(&required.missing)
        ));
    }
    if !preferred.matched.is_empty() {
        reasons.push(format!(
            "Has {}/{} preferred skills: {}",
            preferred.matched.len(),
            preferred.total(),
            preview(&preferred.matched)
        ));
    }
    if reasons.is_empty() && percent.is_some() {
        reasons.push("Compared the job's listed skills against your profile.".to_string());
    }

    let missing_critical: Vec<String> = required
        .missing
        .iter()
        .map(|name| format!("Missing required skill: {name}"))
        .collect();

    let mut details = Map::new();
    details.insert("required_total".into(), json!(required.total()));
    details.insert("required_matched".into(), json!(required.matched));
    details.insert("required_missing".into(), json!(required.missing));
    details.insert("preferred_total".into(), json!(preferred.total()));
    details.insert("preferred_matched".into(), json!(preferred.matched));
    details.insert("stack_total".into(), json!(stack.total()));
    details.insert("stack_matched".into(), json!(stack.matched));

    let matched_preferred = preferred.matched.clone();

    SkillMatchOutcome {
        bucket: MatchBucket {
            percent,
            reasons,
            details,
        },
        missing_critical,
        matched_preferred,
    }
}

struct CategoryCoverage {
    matched: Vec<String>,
    missing: Vec<String>,
}

impl CategoryCoverage {
    fn new(job_skills: &[String], user_set: &HashSet<String>) -> Self {
        let canonical = normalize_skills_vec(job_skills);
        let (matched, missing) = canonical
            .into_iter()
            .partition(|skill| user_set.contains(skill));
        Self { matched, missing }
    }

    fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// `None` when the job lists nothing in this category.
    fn coverage(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.matched.len() as f64 / total as f64)
        }
    }
}

fn preview(names: &[String]) -> String {
    names
        .iter()
        .take(REASON_NAME_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
