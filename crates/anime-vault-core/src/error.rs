use thiserror::Error;

/// Recoverable domain errors returned by the store and the import adapter.
/// The presentation layer decides user messaging; nothing here is fatal.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("missing required field: {field}")]
    Validation { field: &'static str },

    #[error("an entry titled \"{title}\" already exists")]
    Duplicate { title: String },

    #[error("no entry with id {id}")]
    NotFound { id: String },

    #[error("search result cannot be imported: {0}")]
    Import(String),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize vault: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write vault file: {0}")]
    Write(#[source] std::io::Error),
}

/// The in-memory mutation succeeded but the durable write did not.
/// Carried alongside the result, never instead of it.
#[derive(Debug, Error)]
#[error("change kept in memory but not written to disk: {source}")]
pub struct PersistenceWarning {
    #[from]
    pub source: PersistenceError,
}

/// Result of a mutating store operation: the affected value plus a warning
/// when the write-through persistence step failed.
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub warning: Option<PersistenceWarning>,
}
