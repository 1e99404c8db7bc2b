use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extraction::structured_job_from_value;
use crate::matching::experience::compute_exp_level_match;
use crate::matching::industry::compute_industry_match;
use crate::matching::language::check_language_gate;
use crate::matching::skills::compute_skill_match;
use crate::matching::weights::{
    to_percent, weighted_average, LANGUAGE_GATE_PENALTY, OVERALL_WEIGHTS,
};
use crate::matching::MatchBucket;
use crate::{StructuredJob, UserMatchProfile};

/// Full match verdict for one job against one profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub exp_level: MatchBucket,
    pub skills: MatchBucket,
    pub industry: MatchBucket,
    pub overall_percent: u8,
    pub badges: Vec<String>,
    pub missing_critical: Vec<String>,
}

/// Run every dimension scorer and the language gate, then combine.
///
/// Dimensions that could not be evaluated are excluded from the overall
/// average (their weight renormalizes away); they are never counted as zero.
/// A failed language gate applies a flat 0.75 multiplier after aggregation.
pub fn match_job_to_user(job: &StructuredJob, user: &UserMatchProfile) -> MatchResult {
    let skill_outcome = compute_skill_match(job, user);
    let exp_level = compute_exp_level_match(job, user);
    let industry_outcome = compute_industry_match(job, user);
    let missing_languages = check_language_gate(job, user);

    let as_fraction = |bucket: &MatchBucket| bucket.percent.map(|p| p as f64 / 100.0);
    let overall = weighted_average(&[
        (OVERALL_WEIGHTS.skills, as_fraction(&skill_outcome.bucket)),
        (OVERALL_WEIGHTS.exp_level, as_fraction(&exp_level)),
        (OVERALL_WEIGHTS.industry, as_fraction(&industry_outcome.bucket)),
    ])
    .unwrap_or(0.0);

    let overall = if missing_languages.is_empty() {
        overall
    } else {
        overall * LANGUAGE_GATE_PENALTY
    };
    let overall_percent = to_percent(overall);

    let mut badges = Vec::new();
    if !job.skills_required.is_empty()
        && skill_outcome.bucket.percent.is_some_and(|p| p >= 80)
    {
        badges.push("Meets required skills".to_string());
    }
    if !job.skills_preferred.is_empty() && !skill_outcome.matched_preferred.is_empty() {
        badges.push("Has preferred skills".to_string());
    }
    if !job.languages_required.is_empty() && missing_languages.is_empty() {
        badges.push("Language fit".to_string());
    }
    if let (Some(user_level), Some(job_level)) = (user.seniority, job.seniority) {
        if user_level == job_level {
            badges.push("Seniority match".to_string());
        }
    }
    if !job.industry_tags.is_empty() && !industry_outcome.matched_tags.is_empty() {
        badges.push("Industry experience".to_string());
    }

    let mut missing_critical = skill_outcome.missing_critical;
    missing_critical.extend(missing_languages);

    MatchResult {
        exp_level,
        skills: skill_outcome.bucket,
        industry: industry_outcome.bucket,
        overall_percent,
        badges,
        missing_critical,
    }
}

/// Structure a raw job record, then match it.
pub fn match_job_detail_to_user(raw: &Value, user: &UserMatchProfile) -> MatchResult {
    match_job_to_user(&structured_job_from_value(raw), user)
}
