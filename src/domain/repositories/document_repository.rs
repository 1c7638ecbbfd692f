use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::document::{Document, DocumentId},
};

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, RepositoryError>;

    /// Store a new document and return it with its assigned id
    async fn insert(&self, document: Document) -> Result<Document, RepositoryError>;

    async fn update(&self, document: Document) -> Result<Document, RepositoryError>;
}
