//! Common types used across linkchain modules.

use serde::{Deserialize, Serialize};

/// A 256-bit digest value (SHA-256), rendered as lowercase hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Create a new Hash256 from bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Convert to lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Local wall-clock reading, second precision is all the chain consumes.
pub type Timestamp = chrono::NaiveDateTime;

/// Get the current local timestamp.
pub fn now() -> Timestamp {
    chrono::Local::now().naive_local()
}
