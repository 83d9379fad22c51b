//! Task field enumerations
//!
//! Priority and importance are independent low/medium/high axes; status is
//! the board column. All three carry a numeric rank used by the sort views.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error returned when a field value string is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field value: {0}")]
pub struct ParseFieldError(pub String);

/// Task priority axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority
    High,
}

impl Priority {
    /// Numeric rank (low=1 .. high=3)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// Task importance axis
///
/// Same shape as [`Priority`] but a distinct type: the two axes never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    /// Low importance
    Low,
    /// Medium importance
    Medium,
    /// High importance
    High,
}

impl Importance {
    /// Numeric rank (low=1 .. high=3)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Importance::Low => 1,
            Importance::Medium => 2,
            Importance::High => 3,
        }
    }
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Medium
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Importance::Low => "low",
            Importance::Medium => "medium",
            Importance::High => "high",
        };
        f.write_str(s)
    }
}

impl FromStr for Importance {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Importance::Low),
            "medium" => Ok(Importance::Medium),
            "high" => Ok(Importance::High),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

/// Task workflow status (board column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Finished
    Done,
}

impl Status {
    /// Numeric rank (todo=1 .. done=3)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Status::Todo => 1,
            Status::InProgress => 2,
            Status::Done => 3,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Todo
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        };
        f.write_str(s)
    }
}

impl FromStr for Status {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Status::Todo),
            "in-progress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            other => Err(ParseFieldError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_rank_ordering() {
        assert!(Priority::Low.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::High.rank());
        assert!(Priority::Low < Priority::High);
    }

    #[test]
    fn priority_parses_lowercase() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn status_wire_names_are_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
    }

    #[test]
    fn defaults_match_form_defaults() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Importance::default(), Importance::Medium);
        assert_eq!(Status::default(), Status::Todo);
    }

    #[test]
    fn display_round_trips() {
        for p in [Priority::Low, Priority::Medium, Priority::High] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
        for s in [Status::Todo, Status::InProgress, Status::Done] {
            assert_eq!(s.to_string().parse::<Status>().unwrap(), s);
        }
    }
}
