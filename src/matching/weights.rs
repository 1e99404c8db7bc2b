/// Dimension weights for the overall score. Dimensions a job does not
/// specify are excluded and the remaining weights renormalize.
pub const OVERALL_WEIGHTS: DimensionWeights = DimensionWeights {
    skills: 0.5,
    exp_level: 0.3,
    industry: 0.2,
};

/// Skill-category weights inside the skill dimension.
pub const SKILL_CATEGORY_WEIGHTS: SkillCategoryWeights = SkillCategoryWeights {
    required: 0.7,
    preferred: 0.2,
    stack: 0.1,
};

/// Component weights inside the experience dimension.
pub const EXP_COMPONENT_WEIGHTS: ExpComponentWeights = ExpComponentWeights {
    seniority: 0.6,
    years: 0.4,
};

/// Flat multiplier applied to the overall score when any required language
/// is missing.
pub const LANGUAGE_GATE_PENALTY: f64 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct DimensionWeights {
    pub skills: f64,
    pub exp_level: f64,
    pub industry: f64,
}

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.exp_level + self.industry
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategoryWeights {
    pub required: f64,
    pub preferred: f64,
    pub stack: f64,
}

impl SkillCategoryWeights {
    pub fn sum(&self) -> f64 {
        self.required + self.preferred + self.stack
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExpComponentWeights {
    pub seniority: f64,
    pub years: f64,
}

impl ExpComponentWeights {
    pub fn sum(&self) -> f64 {
        self.seniority + self.years
    }
}

/// Weighted average over optional values, renormalizing over the pairs that
/// are present. `None` when no value is present; a `None` input never counts
/// as zero.
pub fn weighted_average(parts: &[(f64, Option<f64>)]) -> Option<f64> {
    let mut total_weight = 0.0;
    let mut acc = 0.0;

    for (weight, value) in parts {
        if let Some(value) = value {
            acc += weight * value;
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        Some(acc / total_weight)
    } else {
        None
    }
}

/// Round a [0, 1] fraction to an integer percent, clamping first.
pub(crate) fn to_percent(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_tables_sum_to_one() {
        assert!((OVERALL_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!((SKILL_CATEGORY_WEIGHTS.sum() - 1.0).abs() < 1e-9);
        assert!((EXP_COMPONENT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn averages_present_pairs_only() {
        let avg = weighted_average(&[(0.7, Some(1.0)), (0.2, None), (0.1, Some(0.0))]);
        // 0.7 / 0.8 after renormalization.
        assert!((avg.unwrap() - 0.875).abs() < 1e-9);
    }

    #[test]
    fn single_present_pair_takes_full_weight() {
        let avg = weighted_average(&[(0.7, None), (0.2, Some(0.5)), (0.1, None)]);
        assert!((avg.unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn no_present_pairs_yield_none() {
        assert_eq!(weighted_average(&[(0.5, None), (0.5, None)]), None);
        assert_eq!(weighted_average(&[]), None);
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(to_percent(0.0), 0);
        assert_eq!(to_percent(0.505), 51);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(1.7), 100);
        assert_eq!(to_percent(-0.3), 0);
    }
}
