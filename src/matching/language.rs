use std::collections::HashMap;

use tracing::warn;

use crate::corrections::cefr::{cefr_rank, split_language_level};
use crate::{StructuredJob, UserMatchProfile};

/// Check CEFR-leveled language requirements against the profile.
///
/// Returns one `"Missing language: <requirement>"` entry per unsatisfied
/// requirement; an empty list when everything is covered or the job requires
/// no languages.
pub fn check_language_gate(job: &StructuredJob, user: &UserMatchProfile) -> Vec<String> {
    if job.languages_required.is_empty() {
        return Vec::new();
    }

    let user_levels = best_levels(&user.languages);

    job.languages_required
        .iter()
        .filter(|requirement| !requirement_satisfied(requirement, &user_levels))
        .map(|requirement| format!("Missing language: {}", requirement.trim()))
        .collect()
}

fn requirement_satisfied(requirement: &str, user_levels: &HashMap<String, u8>) -> bool {
    let (language, level_token) = split_language_level(requirement);
    if language.is_empty() {
        return true;
    }

    let Some(required_rank) = cefr_rank(&level_token) else {
        // Level token outside the scale: the requirement cannot be ranked, so
        // it passes rather than hard-failing candidates over dirty job data.
        warn!(
            requirement,
            level = level_token.as_str(),
            "unrecognized language level; treating requirement as satisfied"
        );
        return true;
    };

    user_levels
        .get(&language)
        .is_some_and(|&rank| rank >= required_rank)
}

/// Highest recorded level per language on the profile side.
fn best_levels(languages: &[String]) -> HashMap<String, u8> {
    let mut best: HashMap<String, u8> = HashMap::new();
    for raw in languages {
        let (language, token) = split_language_level(raw);
        if language.is_empty() {
            continue;
        }
        let Some(rank) = cefr_rank(&token) else { continue };
        best.entry(language)
            .and_modify(|current| *current = (*current).max(rank))
            .or_insert(rank);
    }
    best
}
