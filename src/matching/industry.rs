use std::collections::{HashMap, HashSet};

use serde_json::{json, Map};

use crate::matching::weights::to_percent;
use crate::matching::MatchBucket;
use crate::{StructuredJob, UserMatchProfile};

/// Years in an industry worth full boost credit.
const BOOST_FULL_YEARS: f64 = 5.0;
/// Cap on the coverage boost from years-in-industry.
const BOOST_CAP: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct IndustryMatchOutcome {
    pub bucket: MatchBucket,
    /// Job tags (original spelling) found in the user's industry set.
    pub matched_tags: Vec<String>,
}

/// Score industry-tag overlap, boosted by recorded years in the job's
/// industries. Tags compare case-insensitively; reasons keep the job's
/// original spellings.
pub fn compute_industry_match(job: &StructuredJob, user: &UserMatchProfile) -> IndustryMatchOutcome {
    if job.industry_tags.is_empty() {
        return IndustryMatchOutcome {
            bucket: MatchBucket {
                percent: None,
                reasons: vec!["Industry not specified for this job.".to_string()],
                details: Map::from_iter([("job_tags".to_string(), json!([]))]),
            },
            matched_tags: Vec::new(),
        };
    }

    let user_tags: HashSet<String> = user
        .industry_tags
        .iter()
        .map(|tag| tag_key(tag))
        .filter(|tag| !tag.is_empty())
        .collect();

    let mut years_by_tag: HashMap<String, f64> = HashMap::new();
    for (tag, years) in &user.years_experience_by_industry {
        let key = tag_key(tag);
        let entry = years_by_tag.entry(key).or_insert(0.0);
        *entry = entry.max(*years);
    }

    let matched_tags: Vec<String> = job
        .industry_tags
        .iter()
        .filter(|tag| user_tags.contains(&tag_key(tag)))
        .cloned()
        .collect();

    let base_coverage = matched_tags.len() as f64 / job.industry_tags.len() as f64;

    let mut boost = 0.0_f64;
    for tag in &job.industry_tags {
        if let Some(&years) = years_by_tag.get(&tag_key(tag)) {
            if years > 0.0 {
                boost = (boost + years / BOOST_FULL_YEARS * BOOST_CAP).min(BOOST_CAP);
            }
        }
    }

    let coverage = (base_coverage + boost).clamp(0.0, 1.0);

    let mut reasons = Vec::new();
    reasons.push(format!(
        "Job industries: {}",
        job.industry_tags
            .iter()
            .take(5)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    if matched_tags.is_empty() {
        reasons.push("No overlapping industry experience.".to_string());
    } else {
        let annotated: Vec<String> = matched_tags
            .iter()
            .map(|tag| {
                match years_by_tag.get(&tag_key(tag)) {
                    Some(&years) if years > 0.0 => format!("{tag} ({years} yrs)"),
                    _ => tag.clone(),
                }
            })
            .collect();
        reasons.push(format!("Matching industries: {}", annotated.join(", ")));
    }

    let mut details = Map::new();
    details.insert("job_tags".into(), json!(job.industry_tags));
    details.insert("matched_tags".into(), json!(matched_tags));
    details.insert("base_coverage".into(), json!(base_coverage));
    details.insert("years_boost".into(), json!(boost));

    IndustryMatchOutcome {
        bucket: MatchBucket {
            percent: Some(to_percent(coverage)),
            reasons,
            details,
        },
        matched_tags,
    }
}

fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}
