use async_trait::async_trait;
use rand_core::{OsRng, TryRngCore};

use crate::domain::{
    error::HashError,
    models::hash_text::{HashText, Salt},
};

/// Slow adaptive hash used to protect document fields
#[async_trait]
pub trait HashProvider: Send + Sync {
    /// Generate a fresh random salt bound to the given cost factor
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError>;

    /// Hash a plain text value with a previously generated salt
    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<HashText, HashError>;

    /// Check a plain text value against an encoded hash in constant time.
    ///
    /// A mismatch is `Ok(false)`; `Err` is reserved for hashes that cannot be parsed.
    async fn verify(&self, plaintext: &str, hashtext: &str) -> Result<bool, HashError>;
}

/// Fill a salt from the operating system RNG.
pub fn random_salt(cost: u32) -> Result<Salt, HashError> {
    let mut bytes = [0u8; Salt::LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| HashError::Salt(e.to_string()))?;
    Ok(Salt::new(cost, bytes))
}

/// Run CPU-bound hashing work on the blocking pool.
///
/// A worker that panics or is cancelled is reported as a hashing failure.
pub async fn run_blocking<T, F>(work: F) -> Result<T, HashError>
where
    F: FnOnce() -> Result<T, HashError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| HashError::Hash(e.to_string()))?
}
