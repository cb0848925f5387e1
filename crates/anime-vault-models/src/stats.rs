use serde::{Deserialize, Serialize};

/// Aggregate counters over the full collection. `total` always reflects the
/// whole vault, independent of any status filter applied to a view.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultStats {
    pub total: usize,
    pub completed: usize,
    pub ongoing: usize,
    pub plan_to_watch: usize,
}
