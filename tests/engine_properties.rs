//! End-to-end checks over the public matching API.

use serde_json::json;
use skillpath_matching::{
    default_profile, match_job_detail_to_user, match_job_to_user, normalize_skill,
    profile_from_skill_test, structured_job_from_value, ProfilePatch, Seniority, StructuredJob,
    UserMatchProfile,
};

fn init_logging() {
    skillpath_matching::logging::init_tracing_subscriber("engine-tests");
}

fn user_with_skills(skills: &[&str]) -> UserMatchProfile {
    default_profile(ProfilePatch {
        user_skills: Some(skills.iter().map(|s| s.to_string()).collect()),
        ..ProfilePatch::default()
    })
}

#[test]
fn normalization_is_idempotent_and_case_insensitive() {
    init_logging();
    for raw in ["JavaScript", "  javascript  ", "K8s", "totally unknown", ""] {
        let once = normalize_skill(raw);
        assert_eq!(normalize_skill(&once), once);
    }
    assert_eq!(normalize_skill("JavaScript"), "javascript");
    assert_eq!(normalize_skill("  javascript  "), "javascript");
}

#[test]
fn preferred_only_job_scores_half_without_critical_misses() {
    let job = StructuredJob {
        skills_preferred: vec!["docker".to_string(), "aws".to_string()],
        ..StructuredJob::default()
    };
    let result = match_job_to_user(&job, &user_with_skills(&["docker"]));

    assert_eq!(result.skills.percent, Some(50));
    assert!(result.missing_critical.is_empty());
}

#[test]
fn unmatched_required_skills_are_critical_and_cap_the_score() {
    let job = StructuredJob {
        skills_required: vec!["react".to_string(), "docker".to_string(), "aws".to_string()],
        ..StructuredJob::default()
    };
    let result = match_job_to_user(&job, &user_with_skills(&["react"]));

    assert!(result.skills.percent.unwrap() < 100);
    assert_eq!(result.missing_critical.len(), 2);
    assert!(result
        .missing_critical
        .iter()
        .all(|entry| entry.starts_with("Missing required skill: ")));
}

#[test]
fn unspecified_industry_is_not_computable() {
    let result = match_job_to_user(&StructuredJob::default(), &user_with_skills(&["react"]));
    assert_eq!(result.industry.percent, None);
    assert!(result
        .industry
        .reasons
        .iter()
        .any(|reason| reason.to_lowercase().contains("not specified")));
}

#[test]
fn satisfied_language_requirement_earns_the_badge() {
    let job = StructuredJob {
        languages_required: vec!["English C1".to_string()],
        ..StructuredJob::default()
    };
    let user = default_profile(ProfilePatch {
        languages: Some(vec!["English C1".to_string()]),
        ..ProfilePatch::default()
    });

    let result = match_job_to_user(&job, &user);
    assert!(!result
        .missing_critical
        .iter()
        .any(|entry| entry.contains("English")));
    assert!(result.badges.contains(&"Language fit".to_string()));
}

#[test]
fn missing_language_penalty_stays_in_bounds() {
    let job = StructuredJob {
        skills_required: vec!["react".to_string()],
        languages_required: vec!["German B2".to_string()],
        ..StructuredJob::default()
    };
    let user = default_profile(ProfilePatch {
        user_skills: Some(vec!["react".to_string()]),
        languages: Some(vec!["English C1".to_string()]),
        ..ProfilePatch::default()
    });

    let result = match_job_to_user(&job, &user);
    assert!(result
        .missing_critical
        .iter()
        .any(|entry| entry.contains("German")));
    assert!(result.overall_percent <= 100);
    assert_eq!(result.overall_percent, 75);
}

#[test]
fn unknown_user_years_do_not_break_experience_scoring() {
    let job = StructuredJob {
        seniority: Some(Seniority::Mid),
        ..StructuredJob::default()
    };
    let user = default_profile(ProfilePatch {
        seniority: Some(Seniority::Mid),
        ..ProfilePatch::default()
    });

    let result = match_job_to_user(&job, &user);
    assert_eq!(result.exp_level.percent, Some(100));
    assert!(!result.exp_level.reasons.is_empty());
}

#[test]
fn skill_test_builder_round_trips() {
    let profile = profile_from_skill_test(
        &["React".to_string(), "TypeScript".to_string()],
        ProfilePatch::default(),
    );

    assert!(profile.user_skills.contains(&"react".to_string()));
    assert!(profile.user_skills.contains(&"typescript".to_string()));
    assert_eq!(profile.seniority, None);
    assert_eq!(profile.years_experience_total, None);
    assert!(profile.industry_tags.is_empty());
}

#[test]
fn all_percentages_stay_within_bounds() {
    let jobs = [
        json!({}),
        json!({
            "title": "Senior Fintech Engineer",
            "skills": "Rust, Kubernetes; AWS",
            "preferred_skills": ["GraphQL"],
            "experience": "5+ years",
            "languages": ["English C1", "German B2"],
            "industry": "Finance"
        }),
        json!({
            "job_title": "Intern, Marketing",
            "job_skills": ["Excel"],
            "role_category": "Marketing",
            "min_years_experience": 0
        }),
    ];
    let users = [
        UserMatchProfile::default(),
        profile_from_skill_test(
            &["Rust".to_string(), "k8s".to_string()],
            ProfilePatch {
                seniority: Some(Seniority::Senior),
                years_experience_total: Some(7.5),
                languages: Some(vec!["English native".to_string()]),
                industry_tags: Some(vec!["finance".to_string()]),
                ..ProfilePatch::default()
            },
        ),
    ];

    for raw in &jobs {
        for user in &users {
            let result = match_job_detail_to_user(raw, user);
            assert!(result.overall_percent <= 100);
            for bucket in [&result.skills, &result.exp_level, &result.industry] {
                if let Some(percent) = bucket.percent {
                    assert!(percent <= 100);
                }
            }
        }
    }
}

#[test]
fn structurer_feeds_the_matcher_without_caller_normalization() {
    let raw = json!({
        "position": "Mid-level Backend Developer (Fintech)",
        "skills": ["Node.js", "postgres"],
        "experience_required": "2-4 years in backend work",
        "language_requirements": "English B2",
    });

    let job = structured_job_from_value(&raw);
    assert_eq!(job.seniority, Some(Seniority::Mid));
    assert_eq!(job.min_years_experience, Some(2));
    assert!(job.skills_required.contains(&"nodejs".to_string()));
    assert!(job.industry_tags.contains(&"Fintech".to_string()));

    let user = profile_from_skill_test(
        &["node".to_string(), "PostgreSQL".to_string()],
        ProfilePatch {
            seniority: Some(Seniority::Mid),
            years_experience_total: Some(3.0),
            languages: Some(vec!["English C2".to_string()]),
            ..ProfilePatch::default()
        },
    );

    let result = match_job_detail_to_user(&raw, &user);
    assert!(result.missing_critical.is_empty());
    assert!(result.badges.contains(&"Seniority match".to_string()));
    assert!(result.badges.contains(&"Language fit".to_string()));
    assert!(result.overall_percent >= 80);
}
