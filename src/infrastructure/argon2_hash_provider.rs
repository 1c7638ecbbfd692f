use argon2::{
    Algorithm, Argon2, Params, PasswordHash as Argon2Hash, Version,
    password_hash::{self, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;

use crate::domain::{
    error::HashError,
    models::hash_text::{HashText, Salt},
    services::hash_provider::{HashProvider, random_salt, run_blocking},
};

/// Argon2id hasher. The cost factor is used as the time cost (iterations);
/// memory and parallelism stay at the argon2 defaults.
#[derive(Clone)]
pub struct Argon2HashProvider;

impl Argon2HashProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2HashProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_blocking(plaintext: &str, salt: &Salt) -> Result<HashText, HashError> {
    let params = Params::new(
        Params::DEFAULT_M_COST,
        salt.cost(),
        Params::DEFAULT_P_COST,
        None,
    )
    .map_err(|e| HashError::Hash(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let salt = SaltString::encode_b64(salt.bytes()).map_err(|e| HashError::Salt(e.to_string()))?;

    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| HashError::Hash(e.to_string()))?
        .to_string();

    Ok(HashText::new(hash))
}

fn verify_blocking(plaintext: &str, hashtext: &str) -> Result<bool, HashError> {
    let parsed_hash =
        Argon2Hash::new(hashtext).map_err(|e| HashError::MalformedHash(e.to_string()))?;

    match Argon2::default().verify_password(plaintext.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HashError::MalformedHash(e.to_string())),
    }
}

#[async_trait]
impl HashProvider for Argon2HashProvider {
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError> {
        random_salt(cost)
    }

    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<HashText, HashError> {
        let plaintext = plaintext.to_owned();
        let salt = salt.clone();
        run_blocking(move || hash_blocking(&plaintext, &salt)).await
    }

    async fn verify(&self, plaintext: &str, hashtext: &str) -> Result<bool, HashError> {
        let plaintext = plaintext.to_owned();
        let hashtext = hashtext.to_owned();
        run_blocking(move || verify_blocking(&plaintext, &hashtext)).await
    }
}
