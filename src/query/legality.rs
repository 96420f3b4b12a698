//! Legality badge classification.
//!
//! The dataset stores legality as free text per format. The detail view
//! only distinguishes four known values; anything else is `Unknown`.

use serde::{Deserialize, Serialize};

/// Classified legality status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalityStatus {
    Legal,
    NotLegal,
    Restricted,
    Banned,
    /// Any other text, including the empty string.
    Unknown,
}

/// Badge fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Green,
    Gray,
    Red,
}

impl LegalityStatus {
    /// Canonical dataset text, `"unknown"` for `Unknown`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LegalityStatus::Legal => "legal",
            LegalityStatus::NotLegal => "not legal",
            LegalityStatus::Restricted => "restricted",
            LegalityStatus::Banned => "banned",
            LegalityStatus::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn badge_color(self) -> BadgeColor {
        match self {
            LegalityStatus::Legal => BadgeColor::Green,
            LegalityStatus::Restricted | LegalityStatus::Banned => BadgeColor::Red,
            LegalityStatus::NotLegal | LegalityStatus::Unknown => BadgeColor::Gray,
        }
    }
}

/// Map a status string to a `LegalityStatus`. Case-insensitive, never fails.
///
/// ```
/// use mtg_catalog::query::{classify, LegalityStatus};
///
/// assert_eq!(classify("Legal"), LegalityStatus::Legal);
/// assert_eq!(classify("BANNED"), LegalityStatus::Banned);
/// assert_eq!(classify("playable"), LegalityStatus::Unknown);
/// ```
#[must_use]
pub fn classify(status: &str) -> LegalityStatus {
    match status.to_lowercase().as_str() {
        "legal" => LegalityStatus::Legal,
        "not legal" => LegalityStatus::NotLegal,
        "restricted" => LegalityStatus::Restricted,
        "banned" => LegalityStatus::Banned,
        _ => LegalityStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(classify("legal"), LegalityStatus::Legal);
        assert_eq!(classify("not legal"), LegalityStatus::NotLegal);
        assert_eq!(classify("restricted"), LegalityStatus::Restricted);
        assert_eq!(classify("banned"), LegalityStatus::Banned);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("Legal"), LegalityStatus::Legal);
        assert_eq!(classify("NOT LEGAL"), LegalityStatus::NotLegal);
        assert_eq!(classify("ReStRiCtEd"), LegalityStatus::Restricted);
        assert_eq!(classify("BANNED"), LegalityStatus::Banned);
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(classify(""), LegalityStatus::Unknown);
        assert_eq!(classify("playable"), LegalityStatus::Unknown);
        assert_eq!(classify(" legal"), LegalityStatus::Unknown);
        assert_eq!(classify("not_legal"), LegalityStatus::Unknown);
        assert_eq!(classify("禁止"), LegalityStatus::Unknown);
    }

    #[test]
    fn test_as_str_round_trips() {
        for status in [
            LegalityStatus::Legal,
            LegalityStatus::NotLegal,
            LegalityStatus::Restricted,
            LegalityStatus::Banned,
        ] {
            assert_eq!(classify(status.as_str()), status);
        }
        assert_eq!(classify(LegalityStatus::Unknown.as_str()), LegalityStatus::Unknown);
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(LegalityStatus::Legal.badge_color(), BadgeColor::Green);
        assert_eq!(LegalityStatus::NotLegal.badge_color(), BadgeColor::Gray);
        assert_eq!(LegalityStatus::Restricted.badge_color(), BadgeColor::Red);
        assert_eq!(LegalityStatus::Banned.badge_color(), BadgeColor::Red);
        assert_eq!(LegalityStatus::Unknown.badge_color(), BadgeColor::Gray);
    }
}
