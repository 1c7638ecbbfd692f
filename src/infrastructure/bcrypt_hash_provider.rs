use async_trait::async_trait;
use bcrypt::Version;

use crate::domain::{
    error::HashError,
    models::hash_text::{HashText, Salt},
    services::hash_provider::{HashProvider, random_salt, run_blocking},
};

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// bcrypt hasher. The cost factor is the log2 of the number of rounds (4..=31).
#[derive(Clone, Default)]
pub struct BcryptHashProvider;

impl BcryptHashProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HashProvider for BcryptHashProvider {
    async fn generate_salt(&self, cost: u32) -> Result<Salt, HashError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(HashError::Salt(format!("cost {cost} is out of range")));
        }
        random_salt(cost)
    }

    async fn hash(&self, plaintext: &str, salt: &Salt) -> Result<HashText, HashError> {
        let plaintext = plaintext.to_owned();
        let salt = salt.clone();
        let parts = run_blocking(move || {
            bcrypt::hash_with_salt(plaintext, salt.cost(), *salt.bytes())
                .map_err(|e| HashError::Hash(e.to_string()))
        })
        .await?;

        Ok(HashText::new(parts.format_for_version(Version::TwoB)))
    }

    async fn verify(&self, plaintext: &str, hashtext: &str) -> Result<bool, HashError> {
        let plaintext = plaintext.to_owned();
        let hashtext = hashtext.to_owned();
        run_blocking(move || {
            bcrypt::verify(plaintext, &hashtext).map_err(|e| HashError::MalformedHash(e.to_string()))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hasher = BcryptHashProvider::new();
        let salt = hasher.generate_salt(4).await.unwrap();

        let hash = hasher.hash("test", &salt).await.unwrap();

        assert!(hash.as_str().starts_with("$2b$04$"));
        assert!(hasher.verify("test", hash.as_str()).await.unwrap());
        assert!(!hasher.verify("test2", hash.as_str()).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let hasher = BcryptHashProvider::new();
        let first = hasher.generate_salt(4).await.unwrap();
        let second = hasher.generate_salt(4).await.unwrap();

        let a = hasher.hash("test", &first).await.unwrap();
        let b = hasher.hash("test", &second).await.unwrap();

        assert_ne!(a, b);
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(32)]
    #[tokio::test]
    async fn test_generate_salt_rejects_cost_out_of_range(#[case] cost: u32) {
        let hasher = BcryptHashProvider::new();
        assert!(matches!(hasher.generate_salt(cost).await, Err(HashError::Salt(_))));
    }

    #[tokio::test]
    async fn test_verify_malformed_hash() {
        let hasher = BcryptHashProvider::new();

        let result = hasher.verify("test", "plaintext-not-a-hash").await;

        assert!(matches!(result, Err(HashError::MalformedHash(_))));
    }
}
