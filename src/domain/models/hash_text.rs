use serde::{Deserialize, Serialize};

/// Value object holding an encoded hash (modular crypt or PHC string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashText(String);

impl HashText {
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Random salt plus the cost factor the hash should be computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt {
    cost: u32,
    bytes: [u8; Salt::LEN],
}

impl Salt {
    pub const LEN: usize = 16;

    pub fn new(cost: u32, bytes: [u8; Salt::LEN]) -> Self {
        Self { cost, bytes }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn bytes(&self) -> &[u8; Salt::LEN] {
        &self.bytes
    }
}
