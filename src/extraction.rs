use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::corrections::industry::infer_industry_tags;
use crate::corrections::seniority::{correct_seniority, seniority_from_title};
use crate::skill_normalizer::{catalog_aliases, normalize_skills_vec};
use crate::StructuredJob;

lazy_static! {
    // Experience text: "3-5 years" (take the lower bound)
    static ref YEARS_RANGE_RE: Regex = Regex::new(r"(\d{1,2})\s*[-–]\s*\d{1,2}").unwrap();
    // "5+ years"
    static ref YEARS_PLUS_RE: Regex = Regex::new(r"(\d{1,2})\s*\+").unwrap();
    // "4 years", "1 yr"
    static ref YEARS_BARE_RE: Regex = Regex::new(r"(?i)(\d{1,2})\s*(?:years?|yrs?)").unwrap();
}

/// Build a [`StructuredJob`] from a raw upstream job record.
///
/// Upstream boards disagree on field names, so every logical field is read
/// through an ordered list of accessor attempts. A missing or wrongly-typed
/// field degrades to empty/`None`; this function never fails. Non-object
/// input yields the all-empty job.
pub fn structured_job_from_value(raw: &Value) -> StructuredJob {
    let title = field_str(raw, &["title", "job_title", "position"]).unwrap_or_default();
    let description =
        field_str(raw, &["description", "job_description", "details"]).unwrap_or_default();

    let mut posting_text = String::with_capacity(title.len() + description.len() + 1);
    posting_text.push_str(title);
    posting_text.push(' ');
    posting_text.push_str(description);
    let extracted = extract_skills_from_text(&posting_text);

    let mut required = field_string_list(raw, &["required_skills", "skills", "job_skills"]);
    required.extend(extracted.iter().cloned());
    let skills_required = normalize_skills_vec(&required);

    let skills_preferred = normalize_skills_vec(&field_string_array(
        raw,
        &["preferred_skills", "nice_to_have", "optional_skills"],
    ));

    let explicit_stack = field_string_list(raw, &["tech_stack", "technologies", "stack"]);
    let tech_stack = if explicit_stack.is_empty() {
        let mut stack: Vec<String> = extracted.into_iter().collect();
        stack.sort();
        stack
    } else {
        normalize_skills_vec(&explicit_stack)
    };

    let seniority = field_str(raw, &["seniority", "experience_level", "level"])
        .and_then(correct_seniority)
        .or_else(|| seniority_from_title(title));

    let role_category = field_str(raw, &["role_category", "category", "job_function"])
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let min_years_experience = field_years(
        raw,
        &["min_years_experience", "years_of_experience", "experience_years"],
    )
    .or_else(|| {
        field_str(raw, &["experience", "experience_required"]).and_then(min_years_from_text)
    });

    let languages_required = field_string_list(
        raw,
        &["languages_required", "languages", "language_requirements"],
    )
    .into_iter()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect();

    let industry_tags = infer_industry_tags(
        field_str(raw, &["industry", "industries", "sector"]),
        role_category.as_deref(),
        title,
    );

    StructuredJob {
        skills_required,
        skills_preferred,
        tech_stack,
        seniority,
        role_category,
        min_years_experience,
        languages_required,
        industry_tags,
    }
}

/// Scan free text for catalog skills.
///
/// Aliases are matched case-insensitively and must sit on non-alphanumeric
/// boundaries, so "go" does not fire inside "google". Results come back as
/// canonical names.
pub fn extract_skills_from_text(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    let mut found = HashSet::new();
    if lower.trim().is_empty() {
        return found;
    }

    for (alias, canonical) in catalog_aliases() {
        if alias.len() < 2 {
            continue;
        }
        if contains_on_boundary(&lower, alias) {
            found.insert(canonical.to_string());
        }
    }

    found
}

fn contains_on_boundary(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(needle) {
        let at = start + offset;
        let end = at + needle.len();

        let before_ok = haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

/// Parse a minimum-years requirement from free text.
///
/// Patterns in priority order: "N-M" range (lower bound), "N+", bare
/// "N year(s)".
pub fn min_years_from_text(text: &str) -> Option<u32> {
    for re in [&*YEARS_RANGE_RE, &*YEARS_PLUS_RE, &*YEARS_BARE_RE] {
        if let Some(caps) = re.captures(text) {
            if let Ok(years) = caps[1].parse() {
                return Some(years);
            }
        }
    }
    None
}

fn field_str<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        raw.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    })
}

/// First non-empty of the given keys, accepting either an array of strings
/// or a comma/semicolon-delimited string.
fn field_string_list(raw: &Value, keys: &[&str]) -> Vec<String> {
    for key in keys {
        let Some(value) = raw.get(*key) else { continue };
        let entries = match value {
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>(),
            Value::String(s) => s.split([',', ';']).map(str::to_string).collect(),
            Value::Null => continue,
            other => {
                warn!(field = *key, kind = json_kind(other), "ignoring unexpected field type");
                continue;
            }
        };
        let entries: Vec<String> = entries
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !entries.is_empty() {
            return entries;
        }
    }
    Vec::new()
}

/// Like [`field_string_list`] but arrays only; delimited strings are not
/// accepted for preferred skills.
fn field_string_array(raw: &Value, keys: &[&str]) -> Vec<String> {
    for key in keys {
        let Some(items) = raw.get(*key).and_then(Value::as_array) else {
            continue;
        };
        let entries: Vec<String> = items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !entries.is_empty() {
            return entries;
        }
    }
    Vec::new()
}

fn field_years(raw: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        let Some(value) = raw.get(*key) else { continue };
        if let Some(n) = value.as_u64() {
            return u32::try_from(n).ok();
        }
        if let Some(f) = value.as_f64() {
            if f >= 0.0 && f <= u32::MAX as f64 {
                return Some(f as u32);
            }
            warn!(field = *key, value = f, "ignoring out-of-range years field");
        }
    }
    None
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seniority;
    use serde_json::json;

    #[test]
    fn reads_required_skills_from_any_alias_field() {
        for field in ["required_skills", "skills", "job_skills"] {
            let raw = json!({ field: ["React", "TS"] });
            let job = structured_job_from_value(&raw);
            assert!(job.skills_required.contains(&"react".to_string()), "{field}");
            assert!(job.skills_required.contains(&"typescript".to_string()));
        }
    }

    #[test]
    fn accepts_delimited_skill_strings() {
        let raw = json!({ "skills": "React, Node.js; postgres" });
        let job = structured_job_from_value(&raw);
        assert_eq!(
            job.skills_required,
            vec!["nodejs".to_string(), "postgresql".to_string(), "react".to_string()]
        );
    }

    #[test]
    fn unions_text_extracted_skills_into_required() {
        let raw = json!({
            "title": "Backend Developer",
            "description": "You will build Docker images and deploy to Kubernetes.",
            "required_skills": ["Python"]
        });
        let job = structured_job_from_value(&raw);
        assert!(job.skills_required.contains(&"python".to_string()));
        assert!(job.skills_required.contains(&"docker".to_string()));
        assert!(job.skills_required.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn text_extraction_respects_word_boundaries() {
        let found = extract_skills_from_text("We use Google Analytics heavily");
        assert!(!found.contains("golang"));

        let found = extract_skills_from_text("Experience with Go and Rust services");
        assert!(found.contains("golang"));
        assert!(found.contains("rust"));
    }

    #[test]
    fn preferred_skills_ignore_delimited_strings() {
        let raw = json!({ "preferred_skills": "Docker, AWS" });
        let job = structured_job_from_value(&raw);
        assert!(job.skills_preferred.is_empty());

        let raw = json!({ "preferred_skills": ["Docker", "AWS"] });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.skills_preferred, vec!["aws".to_string(), "docker".to_string()]);
    }

    #[test]
    fn tech_stack_falls_back_to_text_extraction() {
        let raw = json!({
            "title": "Frontend Engineer",
            "description": "Our stack: React, TypeScript and GraphQL.",
        });
        let job = structured_job_from_value(&raw);
        assert!(job.tech_stack.contains(&"react".to_string()));
        assert!(job.tech_stack.contains(&"typescript".to_string()));
        assert!(job.tech_stack.contains(&"graphql".to_string()));

        let raw = json!({
            "description": "React all day",
            "tech_stack": ["Vue"]
        });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.tech_stack, vec!["vue".to_string()]);
    }

    #[test]
    fn seniority_prefers_explicit_field_over_title() {
        let raw = json!({
            "title": "Junior Developer",
            "experience_level": "senior"
        });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.seniority, Some(Seniority::Senior));

        let raw = json!({ "title": "Lead Data Engineer" });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.seniority, Some(Seniority::Lead));

        let raw = json!({ "title": "Barista" });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.seniority, None);
    }

    #[test]
    fn min_years_reads_numeric_field_first() {
        let raw = json!({ "min_years_experience": 4, "experience": "7+ years" });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.min_years_experience, Some(4));
    }

    #[test]
    fn min_years_parses_text_patterns_in_order() {
        assert_eq!(min_years_from_text("3-5 years of experience"), Some(3));
        assert_eq!(min_years_from_text("5+ years"), Some(5));
        assert_eq!(min_years_from_text("at least 2 years"), Some(2));
        assert_eq!(min_years_from_text("1 yr minimum"), Some(1));
        assert_eq!(min_years_from_text("experienced candidates only"), None);
    }

    #[test]
    fn languages_are_kept_verbatim() {
        let raw = json!({ "languages": "English C1; German B2" });
        let job = structured_job_from_value(&raw);
        assert_eq!(
            job.languages_required,
            vec!["English C1".to_string(), "German B2".to_string()]
        );

        let raw = json!({ "languages_required": ["Spanish"] });
        let job = structured_job_from_value(&raw);
        assert_eq!(job.languages_required, vec!["Spanish".to_string()]);
    }

    #[test]
    fn industry_tags_union_all_sources() {
        let raw = json!({
            "title": "Fintech Platform Engineer",
            "industry": "Insurance",
            "role_category": "Engineering"
        });
        let job = structured_job_from_value(&raw);
        assert_eq!(
            job.industry_tags,
            vec!["Insurance", "Technology", "Software", "Fintech", "Finance"]
        );
    }

    #[test]
    fn tolerates_missing_and_mistyped_fields() {
        let job = structured_job_from_value(&json!({}));
        assert_eq!(job, StructuredJob::default());

        let job = structured_job_from_value(&json!("not an object"));
        assert_eq!(job, StructuredJob::default());

        let raw = json!({
            "skills": 42,
            "min_years_experience": "five",
            "seniority": ["senior"]
        });
        let job = structured_job_from_value(&raw);
        assert!(job.skills_required.is_empty());
        assert_eq!(job.min_years_experience, None);
        assert_eq!(job.seniority, None);
    }
}
