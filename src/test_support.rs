//! Mock collaborators shared by the unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    error::{HashError, RepositoryError},
    models::{
        document::{Document, DocumentId},
        hash_text::{HashText, Salt},
    },
    repositories::document_repository::DocumentRepository,
    services::hash_provider::HashProvider,
};

/// Deterministic provider producing `hashed:<cost>:<plaintext>` and recording every hashed value
#[derive(Clone, Default)]
pub struct MockHashProvider {
    hashed: Arc<Mutex<Vec<String>>>,
    fail_on: Option<String>,
}

impl MockHashProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(plaintext: &str) -> Self {
        Self {
            fail_on: Some(plaintext.to_string()),
            ..Self::default()
        }
    }

    pub async fn hashed(&self) -> Vec<String> {
        self.hashed.lock().await.clone()
    }
}

#[async_trait]
impl HashProvider for MockHashProvider {
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError> {
        Ok(Salt::new(cost, [0u8; Salt::LEN]))
    }

    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<HashText, HashError> {
        if self.fail_on.as_deref() == Some(plaintext) {
            return Err(HashError::Hash("mock failure".to_string()));
        }
        self.hashed.lock().await.push(plaintext.to_string());
        Ok(HashText::new(format!("hashed:{}:{}", salt.cost(), plaintext)))
    }

    async fn verify(&self, plaintext: &str, hashtext: &str) -> Result<bool, HashError> {
        let rest = hashtext
            .strip_prefix("hashed:")
            .ok_or_else(|| HashError::MalformedHash(hashtext.to_string()))?;
        let (_cost, stored) = rest
            .split_once(':')
            .ok_or_else(|| HashError::MalformedHash(hashtext.to_string()))?;
        Ok(stored == plaintext)
    }
}

/// Repository whose every call fails
#[derive(Clone)]
pub struct FailingDocumentRepository;

#[async_trait]
impl DocumentRepository for FailingDocumentRepository {
    async fn find_by_id(&self, _id: &DocumentId) -> Result<Option<Document>, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection refused".to_string()))
    }

    async fn insert(&self, _document: Document) -> Result<Document, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection refused".to_string()))
    }

    async fn update(&self, _document: Document) -> Result<Document, RepositoryError> {
        Err(RepositoryError::DatabaseError("connection refused".to_string()))
    }
}
