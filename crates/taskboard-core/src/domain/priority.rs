//! Task priority levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a task.
///
/// Serialized as the exact strings "Low" / "Medium" / "High" so documents
/// written by other clients of the same collection stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// New drafts start here.
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::low(Priority::Low, "Low")]
    #[case::medium(Priority::Medium, "Medium")]
    #[case::high(Priority::High, "High")]
    fn display_and_parse_round_trip(#[case] priority: Priority, #[case] text: &str) {
        assert_eq!(priority.to_string(), text);
        assert_eq!(text.parse::<Priority>().unwrap(), priority);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!("Urgent".parse::<Priority>().is_err());
        assert!("low".parse::<Priority>().is_err()); // case-sensitive
    }

    #[test]
    fn serde_uses_the_display_strings() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        let parsed: Priority = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn default_is_low() {
        assert_eq!(Priority::default(), Priority::Low);
    }
}
