use async_trait::async_trait;

use crate::domain::{
    error::CryptifyError, models::document::Document,
    repositories::document_repository::DocumentRepository,
};

/// Interceptor run by the host right before a document is persisted.
///
/// `Ok(())` lets the save proceed with the (possibly mutated) document; any error aborts it.
#[async_trait]
pub trait BeforeSaveHook: Send + Sync {
    async fn before_save(
        &self,
        document: &mut Document,
        snapshots: &dyn DocumentRepository,
    ) -> Result<(), CryptifyError>;
}

/// Instance-level capability comparing a candidate against a stored hash
#[async_trait]
pub trait HashComparator: Send + Sync {
    async fn compare_hash(
        &self,
        document: &Document,
        candidate: &str,
        path: Option<&str>,
    ) -> Result<bool, CryptifyError>;
}
