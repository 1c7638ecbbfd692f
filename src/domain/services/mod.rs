pub mod hash_provider;
pub mod lifecycle_hook;
