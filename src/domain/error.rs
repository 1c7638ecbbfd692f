use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptifyError {
    #[error("Cryptify requires \"paths\" to be specified in the options hash")]
    Configuration,

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Failed to fetch previous snapshot: {0}")]
    SnapshotFetch(#[source] RepositoryError),

    #[error("Failed to hash \"{path}\": {reason}")]
    HashComputation { path: String, reason: String },

    #[error("Cannot write hash to \"{path}\": missing intermediate object")]
    PathWrite { path: String },

    #[error("Hash verification failed: {0}")]
    Verification(String),

    #[error("Comparator is disabled for this schema")]
    ComparatorDisabled,

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Failure reported by a [`HashProvider`](crate::domain::services::hash_provider::HashProvider).
///
/// Providers know nothing about field paths; the encryptor attaches the path
/// when it turns this into a [`CryptifyError`].
#[derive(Debug, Error)]
pub enum HashError {
    #[error("salt generation failed: {0}")]
    Salt(String),

    #[error("hashing failed: {0}")]
    Hash(String),

    #[error("malformed hash: {0}")]
    MalformedHash(String),
}
