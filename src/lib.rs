//! Hash designated document fields before they are persisted.
//!
//! [`cryptify`] attaches a [`FieldEncryptor`] to a [`Schema`]: every save runs
//! it as a before-save hook, which replaces the plain value at each configured
//! path with a salted slow hash. Fields that are empty, or that still hold
//! the value already persisted, are left as they are. The same encryptor is
//! exposed as a `compare_hash` capability for checking a candidate against a
//! stored hash.

pub mod domain;
pub mod infrastructure;
pub mod usecase;

#[cfg(test)]
mod test_support;

pub use domain::{
    error::{CryptifyError, HashError, RepositoryError},
    models::{
        document::{Document, DocumentId},
        field_path::FieldPath,
        hash_text::{HashText, Salt},
        options::{CryptifyConfig, CryptifyOptions, DEFAULT_FACTOR},
        schema::Schema,
    },
    repositories::document_repository::DocumentRepository,
    services::{
        hash_provider::HashProvider,
        lifecycle_hook::{BeforeSaveHook, HashComparator},
    },
};
pub use infrastructure::{
    argon2_hash_provider::Argon2HashProvider, bcrypt_hash_provider::BcryptHashProvider,
    in_memory_document_repository::InMemoryDocumentRepository,
};
pub use usecase::{
    cryptify_plugin::cryptify,
    field_encryptor::{DEFAULT_COMPARE_PATH, FieldEncryptor},
    save_document_usecase::SaveDocumentUsecase,
};
