use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{
    error::{CryptifyError, HashError},
    models::{
        document::{Document, is_truthy},
        field_path::FieldPath,
        hash_text::HashText,
        options::CryptifyConfig,
    },
    repositories::document_repository::DocumentRepository,
    services::{
        hash_provider::HashProvider,
        lifecycle_hook::{BeforeSaveHook, HashComparator},
    },
};

/// Field read by [`FieldEncryptor::compare_hash`] when no path is given
pub const DEFAULT_COMPARE_PATH: &str = "password";

/// Hashes the configured fields of a document before it is saved.
///
/// Paths are processed one after another in configuration order. A path is
/// left alone when its value is empty, or when it equals the value already
/// persisted for the same document (an untouched field that already holds a
/// hash). The first failure stops the pass; paths hashed before it stay
/// hashed on the in-memory document.
pub struct FieldEncryptor<H: HashProvider> {
    paths: Vec<FieldPath>,
    cost: u32,
    hash_provider: H,
}

impl<H: HashProvider> FieldEncryptor<H> {
    pub fn new(config: &CryptifyConfig, hash_provider: H) -> Self {
        Self {
            paths: config.paths().to_vec(),
            cost: config.cost(),
            hash_provider,
        }
    }

    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn on_before_save(
        &self,
        document: &mut Document,
        snapshots: &dyn DocumentRepository,
    ) -> Result<(), CryptifyError> {
        let previous = self.previous_snapshot(document, snapshots).await?;

        for path in &self.paths {
            let raw = match document.get(path) {
                Some(value) if is_truthy(value) => value.clone(),
                _ => {
                    debug!(path = %path, "skipping empty field");
                    continue;
                }
            };

            let unchanged = previous
                .as_ref()
                .and_then(|previous| previous.get(path))
                .is_some_and(|previous| is_truthy(previous) && *previous == raw);
            if unchanged {
                debug!(path = %path, "skipping unchanged field");
                continue;
            }

            let Value::String(plaintext) = raw else {
                return Err(CryptifyError::HashComputation {
                    path: path.to_string(),
                    reason: "value is not a string".to_string(),
                });
            };

            let hash = self.hash_value(path, &plaintext).await?;
            document.set(path, Value::String(hash.into_string()))?;
            debug!(path = %path, "hashed field");
        }

        Ok(())
    }

    /// Verify `candidate` against the hash stored at `path` (default `password`).
    pub async fn compare_hash(
        &self,
        document: &Document,
        candidate: &str,
        path: Option<&str>,
    ) -> Result<bool, CryptifyError> {
        let path = FieldPath::parse(path.unwrap_or(DEFAULT_COMPARE_PATH));
        let stored = document.get(&path).and_then(Value::as_str).ok_or_else(|| {
            CryptifyError::Verification(format!("no hash stored at \"{path}\""))
        })?;

        self.hash_provider
            .verify(candidate, stored)
            .await
            .map_err(|e| CryptifyError::Verification(e.to_string()))
    }

    async fn previous_snapshot(
        &self,
        document: &Document,
        snapshots: &dyn DocumentRepository,
    ) -> Result<Option<Document>, CryptifyError> {
        let Some(id) = document.id() else {
            return Ok(None);
        };

        trace!(%id, "fetching previous snapshot");
        snapshots
            .find_by_id(id)
            .await
            .map_err(CryptifyError::SnapshotFetch)
    }

    async fn hash_value(&self, path: &FieldPath, plaintext: &str) -> Result<HashText, CryptifyError> {
        let to_error = |e: HashError| CryptifyError::HashComputation {
            path: path.to_string(),
            reason: e.to_string(),
        };

        let salt = self
            .hash_provider
            .generate_salt(self.cost)
            .await
            .map_err(to_error)?;
        self.hash_provider
            .hash(plaintext, &salt)
            .await
            .map_err(to_error)
    }
}

#[async_trait]
impl<H: HashProvider> BeforeSaveHook for FieldEncryptor<H> {
    async fn before_save(
        &self,
        document: &mut Document,
        snapshots: &dyn DocumentRepository,
    ) -> Result<(), CryptifyError> {
        self.on_before_save(document, snapshots).await
    }
}

#[async_trait]
impl<H: HashProvider> HashComparator for FieldEncryptor<H> {
    async fn compare_hash(
        &self,
        document: &Document,
        candidate: &str,
        path: Option<&str>,
    ) -> Result<bool, CryptifyError> {
        FieldEncryptor::compare_hash(self, document, candidate, path).await
    }
}
