//! SHA-256 helpers.
//!
//! Every digest in the chain is taken over UTF-8 text and rendered as
//! lowercase hex.

use crate::core::Hash256;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data.
pub fn sha256(data: &[u8]) -> Hash256 {
    Hash256::new(Sha256::digest(data).into())
}

/// Compute SHA-256 hash of multiple data chunks.
pub fn sha256_multi(chunks: &[&[u8]]) -> Hash256 {
    let mut hasher = Sha256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    Hash256::new(hasher.finalize().into())
}

/// SHA-256 of a string's UTF-8 bytes.
pub fn sha256_str(text: &str) -> Hash256 {
    sha256(text.as_bytes())
}
