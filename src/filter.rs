// Visibility filtering for the task list

use crate::task::Task;
use eyre::eyre;
use serde::{Deserialize, Serialize};

/// Which subset of the canonical task list is exposed to the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Active,
}

impl FilterMode {
    /// Membership predicate for a task under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => task.completed,
            FilterMode::Active => !task.completed,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Completed => write!(f, "completed"),
            FilterMode::Active => write!(f, "active"),
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "completed" => Ok(FilterMode::Completed),
            "active" => Ok(FilterMode::Active),
            other => Err(eyre!(
                "Unknown filter mode: {} (expected all, completed or active)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> Task {
        Task {
            id: 0,
            name: "t".to_string(),
            completed,
        }
    }

    #[test]
    fn test_matches() {
        assert!(FilterMode::All.matches(&task(true)));
        assert!(FilterMode::All.matches(&task(false)));

        assert!(FilterMode::Completed.matches(&task(true)));
        assert!(!FilterMode::Completed.matches(&task(false)));

        assert!(FilterMode::Active.matches(&task(false)));
        assert!(!FilterMode::Active.matches(&task(true)));
    }

    #[test]
    fn test_parse_and_display_roundtrip() {
        for mode in [FilterMode::All, FilterMode::Completed, FilterMode::Active] {
            let parsed: FilterMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("done".parse::<FilterMode>().is_err());
        assert!("".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&FilterMode::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let mode: FilterMode = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(mode, FilterMode::Completed);
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }
}
