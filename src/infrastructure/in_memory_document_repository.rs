use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::domain::{
    error::RepositoryError,
    models::document::{Document, DocumentId},
    repositories::document_repository::DocumentRepository,
};

#[derive(Debug, Clone)]
struct StoredDocument {
    fields: Map<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Process-local document store. Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryDocumentRepository {
    documents: Arc<RwLock<HashMap<DocumentId, StoredDocument>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Creation and last update time of a stored document
    pub async fn timestamps(&self, id: &DocumentId) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.documents
            .read()
            .await
            .get(id)
            .map(|stored| (stored.created_at, stored.updated_at))
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, RepositoryError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(id)
            .map(|stored| Document::reconstruct(id.clone(), stored.fields.clone())))
    }

    async fn insert(&self, document: Document) -> Result<Document, RepositoryError> {
        let id = document.id().cloned().unwrap_or_default();
        let mut documents = self.documents.write().await;
        if documents.contains_key(&id) {
            return Err(RepositoryError::DatabaseError(format!(
                "Document already exists: {id}"
            )));
        }

        let now = Utc::now();
        let fields = document.into_fields();
        documents.insert(
            id.clone(),
            StoredDocument {
                fields: fields.clone(),
                created_at: now,
                updated_at: now,
            },
        );

        Ok(Document::reconstruct(id, fields))
    }

    async fn update(&self, document: Document) -> Result<Document, RepositoryError> {
        let id = document.id().cloned().ok_or(RepositoryError::NotFound)?;
        let mut documents = self.documents.write().await;
        let stored = documents.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        let fields = document.into_fields();
        stored.fields = fields.clone();
        stored.updated_at = Utc::now();

        Ok(Document::reconstruct(id, fields))
    }
}
