pub mod error;
pub mod import;
pub mod persist;
pub mod store;
pub mod view;

pub use error::{Committed, PersistenceError, PersistenceWarning, VaultError};
pub use import::{entry_from_search, import_result};
pub use persist::VaultFile;
pub use store::VaultStore;
pub use view::{filtered, sorted, stats, SortKey};
