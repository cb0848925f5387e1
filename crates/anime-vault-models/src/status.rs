use serde::{Deserialize, Serialize};
use std::fmt;

/// Watch status of a catalog entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    /// Currently airing or currently being watched
    Ongoing,
    /// Finished watching
    Completed,
    /// Saved for later
    PlanToWatch,
}

impl WatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchStatus::Ongoing => "ongoing",
            WatchStatus::Completed => "completed",
            WatchStatus::PlanToWatch => "plan-to-watch",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
