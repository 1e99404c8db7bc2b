use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::skill_normalizer::normalize_skills_vec;
use crate::{Seniority, UserMatchProfile};

/// Caller-supplied overrides for a profile under construction.
///
/// Every field is optional; omitted fields keep the documented defaults
/// (empty lists, unknown seniority, no recorded years).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfilePatch {
    pub user_skills: Option<Vec<String>>,
    pub tech_stack_experience: Option<Vec<String>>,
    pub seniority: Option<Seniority>,
    pub years_experience_total: Option<f64>,
    pub years_experience_by_industry: Option<HashMap<String, f64>>,
    pub industry_tags: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub role_interests: Option<Vec<String>>,
}

/// Build a profile from the documented defaults plus the given overrides.
pub fn default_profile(patch: ProfilePatch) -> UserMatchProfile {
    apply_patch(UserMatchProfile::default(), patch)
}

/// Build a profile from skill-test results.
///
/// The passed skill names are normalized into both `user_skills` and
/// `tech_stack_experience`; everything else starts from the defaults before
/// the patch overlay.
pub fn profile_from_skill_test(skills: &[String], patch: ProfilePatch) -> UserMatchProfile {
    let normalized = normalize_skills_vec(skills);
    let base = UserMatchProfile {
        user_skills: normalized.clone(),
        tech_stack_experience: normalized,
        ..UserMatchProfile::default()
    };
    apply_patch(base, patch)
}

fn apply_patch(mut profile: UserMatchProfile, patch: ProfilePatch) -> UserMatchProfile {
    if let Some(skills) = patch.user_skills {
        profile.user_skills = skills;
    }
    if let Some(stack) = patch.tech_stack_experience {
        profile.tech_stack_experience = stack;
    }
    if let Some(seniority) = patch.seniority {
        profile.seniority = Some(seniority);
    }
    if let Some(years) = patch.years_experience_total {
        profile.years_experience_total = Some(years);
    }
    if let Some(by_industry) = patch.years_experience_by_industry {
        profile.years_experience_by_industry = by_industry;
    }
    if let Some(tags) = patch.industry_tags {
        profile.industry_tags = tags;
    }
    if let Some(languages) = patch.languages {
        profile.languages = languages;
    }
    if let Some(interests) = patch.role_interests {
        profile.role_interests = interests;
    }
    profile
}
