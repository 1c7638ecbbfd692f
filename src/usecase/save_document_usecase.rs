use crate::domain::{
    error::CryptifyError,
    models::{
        document::{Document, DocumentId},
        schema::Schema,
    },
    repositories::document_repository::DocumentRepository,
};

/// Persists documents through a repository after running the schema's before-save hooks
pub struct SaveDocumentUsecase<R: DocumentRepository> {
    schema: Schema,
    repository: R,
}

impl<R: DocumentRepository> SaveDocumentUsecase<R> {
    pub fn new(schema: Schema, repository: R) -> Self {
        Self { schema, repository }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Run the hooks in registration order, then insert or update.
    ///
    /// A hook error aborts the save; nothing reaches the repository.
    pub async fn save(&self, mut document: Document) -> Result<Document, CryptifyError> {
        for hook in self.schema.before_save_hooks() {
            hook.before_save(&mut document, &self.repository).await?;
        }

        let saved = if document.is_new() {
            self.repository.insert(document).await?
        } else {
            self.repository.update(document).await?
        };

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, CryptifyError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn compare_hash(
        &self,
        document: &Document,
        candidate: &str,
        path: Option<&str>,
    ) -> Result<bool, CryptifyError> {
        let comparator = self
            .schema
            .comparator()
            .ok_or(CryptifyError::ComparatorDisabled)?;

        comparator.compare_hash(document, candidate, path).await
    }
}
