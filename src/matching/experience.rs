use serde_json::{json, Map};

use crate::matching::weights::{to_percent, weighted_average, EXP_COMPONENT_WEIGHTS};
use crate::matching::MatchBucket;
use crate::{StructuredJob, UserMatchProfile};

/// Score the seniority-distance and years-of-experience fit.
///
/// The seniority component only exists when the job states a level; the years
/// component only when both sides state years. Whatever exists combines at
/// 0.6/0.4, renormalized; neither existing scores `None`.
pub fn compute_exp_level_match(job: &StructuredJob, user: &UserMatchProfile) -> MatchBucket {
    let seniority_component = job.seniority.map(|job_level| match user.seniority {
        // Unknown candidate seniority earns half credit rather than a miss;
        // a deliberate calibration, not an oversight.
        None => 0.5,
        Some(user_level) => match user_level.rank() - job_level.rank() {
            0 => 1.0,
            1 => 0.85,
            diff if diff >= 2 => 0.75,
            -1 => 0.55,
            _ => 0.25,
        },
    });

    let years_component = match (job.min_years_experience, user.years_experience_total) {
        (Some(min_years), Some(user_years)) => {
            let min_years = min_years as f64;
            Some(if user_years >= min_years {
                1.0
            } else {
                (user_years / min_years).clamp(0.0, 1.0)
            })
        }
        _ => None,
    };

    let percent = weighted_average(&[
        (EXP_COMPONENT_WEIGHTS.seniority, seniority_component),
        (EXP_COMPONENT_WEIGHTS.years, years_component),
    ])
    .map(to_percent);

    let mut reasons = Vec::new();
    if let Some(level) = job.seniority {
        reasons.push(format!("Job seniority: {}", level.as_ref()));
    }
    if let Some(min_years) = job.min_years_experience {
        reasons.push(format!("Job asks for at least {min_years} years of experience"));
    }
    if let Some(level) = user.seniority {
        reasons.push(format!("Your seniority: {}", level.as_ref()));
    }
    if let Some(years) = user.years_experience_total {
        reasons.push(format!("Your experience: {years} years"));
    }
    if reasons.is_empty() {
        reasons.push("Experience level not specified for this job.".to_string());
    }

    let mut details = Map::new();
    details.insert(
        "job_seniority".into(),
        json!(job.seniority.map(|s| s.as_ref().to_string())),
    );
    details.insert(
        "user_seniority".into(),
        json!(user.seniority.map(|s| s.as_ref().to_string())),
    );
    details.insert("job_min_years".into(), json!(job.min_years_experience));
    details.insert("user_years".into(), json!(user.years_experience_total));
    details.insert("seniority_component".into(), json!(seniority_component));
    details.insert("years_component".into(), json!(years_component));

    MatchBucket {
        percent,
        reasons,
        details,
    }
}
