use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Dropdown order.
    pub const ALL: &[Difficulty] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Label shown in the dropdown and interpolated into the system instruction.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "초급",
            Difficulty::Intermediate => "중급",
            Difficulty::Advanced => "고급",
        }
    }

    /// Accepts either the display label or the snake_case name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "초급" | "beginner" => Some(Difficulty::Beginner),
            "중급" | "intermediate" => Some(Difficulty::Intermediate),
            "고급" | "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_three_levels_in_order() {
        let labels: Vec<_> = Difficulty::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["초급", "중급", "고급"]);
    }

    #[test]
    fn parses_labels_and_names() {
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(d.label()), Some(*d));
            assert_eq!(Difficulty::from_str(d.as_str()), Some(*d));
        }
        assert_eq!(Difficulty::from_str(" 중급 "), Some(Difficulty::Intermediate));
        assert_eq!(Difficulty::from_str("expert"), None);
        assert_eq!(Difficulty::from_str(""), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Difficulty::Advanced.to_string(), "고급");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Difficulty::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let back: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(back, Difficulty::Advanced);
    }
}
