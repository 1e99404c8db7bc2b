use crate::Seniority;

/// Interpret an explicit seniority field.
///
/// Accepts the canonical labels plus the loose spellings upstream boards use
/// ("Entry Level", "Mid-level", "Principal Engineer"). Unrecognized input is
/// `None`, never an error.
pub fn correct_seniority(input: &str) -> Option<Seniority> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(level) = trimmed.parse() {
        return Some(level);
    }

    seniority_from_title(trimmed)
}

/// Infer seniority from a job title.
///
/// Case-insensitive substring rules, first match wins:
/// intern → junior/entry → mid/middle/intermediate → senior → lead/principal/staff.
pub fn seniority_from_title(title: &str) -> Option<Seniority> {
    let lower = title.to_lowercase();

    if lower.contains("intern") {
        return Some(Seniority::Intern);
    }
    if lower.contains("junior") || lower.contains("entry") {
        return Some(Seniority::Junior);
    }
    if lower.contains("mid") || lower.contains("middle") || lower.contains("intermediate") {
        return Some(Seniority::Mid);
    }
    if lower.contains("senior") {
        return Some(Seniority::Senior);
    }
    if lower.contains("lead") || lower.contains("principal") || lower.contains("staff") {
        return Some(Seniority::Lead);
    }

    None
}
