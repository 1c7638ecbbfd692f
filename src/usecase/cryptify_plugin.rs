use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{
        error::CryptifyError,
        models::{options::CryptifyOptions, schema::Schema},
        services::hash_provider::HashProvider,
    },
    usecase::field_encryptor::FieldEncryptor,
};

/// Attach field hashing to `schema`.
///
/// Registers one before-save hook and, unless `disableComparator` is set,
/// the `compare_hash` capability. Fails without touching the schema when no
/// paths are configured.
pub fn cryptify<H>(
    mut schema: Schema,
    options: &CryptifyOptions,
    hash_provider: H,
) -> Result<Schema, CryptifyError>
where
    H: HashProvider + 'static,
{
    let config = options.configure()?;
    let encryptor = Arc::new(FieldEncryptor::new(&config, hash_provider));

    schema.register_before_save(encryptor.clone());
    if config.enable_comparator() {
        schema.set_comparator(encryptor);
    }

    debug!(
        paths = config.paths().len(),
        cost = config.cost(),
        comparator = config.enable_comparator(),
        "cryptify registered"
    );
    Ok(schema)
}
