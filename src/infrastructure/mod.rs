pub mod argon2_hash_provider;
pub mod bcrypt_hash_provider;
pub mod in_memory_document_repository;
