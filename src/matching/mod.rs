pub mod aggregate;
pub mod experience;
pub mod industry;
pub mod language;
pub mod skills;
pub mod weights;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use aggregate::{match_job_detail_to_user, match_job_to_user, MatchResult};
pub use experience::compute_exp_level_match;
pub use industry::{compute_industry_match, IndustryMatchOutcome};
pub use language::check_language_gate;
pub use skills::{compute_skill_match, SkillMatchOutcome};

/// One scored dimension of a match.
///
/// `percent` is `None` when the job does not carry the data needed to
/// evaluate the dimension. Callers must surface that as "not computable",
/// never as 0. `reasons` is human-readable and non-empty whenever a percent
/// is produced; `details` carries the structured breakdown for the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBucket {
    pub percent: Option<u8>,
    pub reasons: Vec<String>,
    pub details: Map<String, Value>,
}
