//! School grade model
//!
//! The seven grade levels the bot serves (sixth through twelfth), with
//! parsing from the icon-prefixed picker buttons.

use serde::{Deserialize, Serialize};

/// School grade, sixth through twelfth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::Six,
        Grade::Seven,
        Grade::Eight,
        Grade::Nine,
        Grade::Ten,
        Grade::Eleven,
        Grade::Twelve,
    ];

    /// Plain grade label, without the button icon.
    pub fn label(self) -> &'static str {
        match self {
            Grade::Six => "ششم",
            Grade::Seven => "هفتم",
            Grade::Eight => "هشتم",
            Grade::Nine => "نهم",
            Grade::Ten => "دهم",
            Grade::Eleven => "یازدهم",
            Grade::Twelve => "دوازدهم",
        }
    }

    /// Parse a bare grade token.
    pub fn from_label(token: &str) -> Option<Grade> {
        Grade::ALL.into_iter().find(|g| g.label() == token)
    }

    /// Parse an icon-prefixed picker button.
    ///
    /// The grade token is the second whitespace-separated word; the
    /// first word is the decorative icon.
    pub fn from_button(text: &str) -> Option<Grade> {
        text.split_whitespace().nth(1).and_then(Grade::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_label(grade.label()), Some(grade));
        }
    }

    #[test]
    fn test_from_button_strips_icon() {
        assert_eq!(Grade::from_button("📚 نهم"), Some(Grade::Nine));
        assert_eq!(Grade::from_button("🎯 دوازدهم"), Some(Grade::Twelve));
        assert_eq!(Grade::from_button("📚 ششم"), Some(Grade::Six));
    }

    #[test]
    fn test_from_button_rejects_unknown() {
        assert_eq!(Grade::from_button("نهم"), None);
        assert_eq!(Grade::from_button("📚 سیزدهم"), None);
        assert_eq!(Grade::from_button(""), None);
    }
}
