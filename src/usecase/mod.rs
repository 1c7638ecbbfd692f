pub mod cryptify_plugin;
pub mod field_encryptor;
pub mod save_document_usecase;
