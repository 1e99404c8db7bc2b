pub mod cefr;
pub mod industry;
pub mod seniority;

pub use cefr::{cefr_rank, split_language_level, CefrLevel};
pub use industry::infer_industry_tags;
pub use seniority::{correct_seniority, seniority_from_title};
