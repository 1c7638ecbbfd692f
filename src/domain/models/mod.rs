pub mod document;
pub mod field_path;
pub mod hash_text;
pub mod options;
pub mod schema;
