use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// CEFR proficiency scale, with "native" as a synthetic top level above C2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Native,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unrecognized language level token: {0}")]
pub struct ParseCefrError(pub String);

impl std::str::FromStr for CefrLevel {
    type Err = ParseCefrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a1" => Ok(CefrLevel::A1),
            "a2" => Ok(CefrLevel::A2),
            "b1" => Ok(CefrLevel::B1),
            "b2" => Ok(CefrLevel::B2),
            "c1" => Ok(CefrLevel::C1),
            "c2" => Ok(CefrLevel::C2),
            "native" => Ok(CefrLevel::Native),
            other => Err(ParseCefrError(other.to_string())),
        }
    }
}

/// Ordinal rank of a level token; `None` for tokens outside the scale.
pub fn cefr_rank(token: &str) -> Option<u8> {
    token.parse::<CefrLevel>().ok().map(|level| level as u8)
}

/// Split a `"<language> <level>"` string.
///
/// The trailing token is taken as the level when it is level-shaped (a letter
/// a-c plus a digit, or "native"), so multi-word languages like
/// "Mandarin Chinese" stay intact. A level-shaped token outside the actual
/// scale (e.g. "c9") is returned as-is and will fail ranking downstream.
/// Without a level token the level defaults to native. The language comes
/// back lowercased and trimmed.
pub fn split_language_level(raw: &str) -> (String, String) {
    let cleaned = raw.trim().to_lowercase();

    if let Some((language, token)) = cleaned.rsplit_once(char::is_whitespace) {
        if looks_like_level(token) {
            return (language.trim().to_string(), token.to_string());
        }
    }

    (cleaned, "native".to_string())
}

fn looks_like_level(token: &str) -> bool {
    if token.eq_ignore_ascii_case("native") {
        return true;
    }
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('a'..='c'), Some('0'..='9'), None)
    )
}
