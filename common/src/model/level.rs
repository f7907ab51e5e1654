use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Proficiency level shared by user profiles, modules and sub-modules.
///
/// The store keeps the level as its display string ("Beginner", …), so the
/// serde representation and `Display` must stay in lockstep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Every member of the closed set, in the order selects list them.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_member_of_the_set() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn rejects_values_outside_the_set() {
        assert_eq!(
            "Expert".parse::<Level>(),
            Err(ValidationError::UnknownLevel("Expert".to_string()))
        );
        assert!("beginner".parse::<Level>().is_err());
    }

    #[test]
    fn wire_format_matches_display() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Level::Intermediate);
    }

    #[test]
    fn defaults_to_beginner() {
        assert_eq!(Level::default(), Level::Beginner);
    }
}
