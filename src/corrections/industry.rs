use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Role-category substring → industry tags, checked in order.
static ROLE_CATEGORY_TAGS: &[(&str, &[&str])] = &[
    ("engineering", &["Technology", "Software"]),
    ("software", &["Technology", "Software"]),
    ("developer", &["Technology", "Software"]),
    ("data", &["Technology", "Data & Analytics"]),
    ("design", &["Design", "Creative"]),
    ("marketing", &["Marketing", "Advertising"]),
    ("sales", &["Sales", "Business Development"]),
    ("finance", &["Finance", "Banking"]),
    ("accounting", &["Finance", "Accounting"]),
    ("health", &["Healthcare"]),
    ("education", &["Education", "E-learning"]),
    ("legal", &["Legal"]),
    ("human resources", &["Human Resources"]),
    ("recruit", &["Human Resources", "Staffing"]),
    ("support", &["Customer Support"]),
    ("operations", &["Operations"]),
    ("product", &["Technology", "Product"]),
];

static ECOMMERCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)e-?commerce").unwrap());

/// Union the explicit industry field, the role-category mapping, and the
/// title special cases into one deduplicated tag list (first-seen order;
/// duplicates compared case-insensitively).
pub fn infer_industry_tags(
    explicit: Option<&str>,
    role_category: Option<&str>,
    title: &str,
) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |tag: &str| {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_lowercase()) {
            tags.push(trimmed.to_string());
        }
    };

    if let Some(raw) = explicit {
        for part in raw.split([',', ';', '|', '/']) {
            push(part);
        }
    }

    if let Some(category) = role_category {
        let lower = category.to_lowercase();
        for (needle, mapped) in ROLE_CATEGORY_TAGS {
            if lower.contains(needle) {
                for tag in *mapped {
                    push(tag);
                }
            }
        }
    }

    let title_lower = title.to_lowercase();
    if title_lower.contains("fintech") {
        push("Fintech");
        push("Finance");
    } else if title_lower.contains("finance") {
        push("Finance");
    }
    if ECOMMERCE_RE.is_match(title) {
        push("E-commerce");
    }

    tags
}
