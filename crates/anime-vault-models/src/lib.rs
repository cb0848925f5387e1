pub mod entry;
pub mod stats;
pub mod status;

pub use entry::{Entry, EntryPatch, NewEntry};
pub use stats::VaultStats;
pub use status::WatchStatus;
