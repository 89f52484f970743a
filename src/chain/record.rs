//! Chain record structure.
//!
//! Immutable records bound to their predecessor through the linkage digest.

use crate::core::Hash256;
use crate::crypto::sha256_multi;
use std::fmt::Write as _;

/// A single record in a hash-linked chain.
///
/// Fields are fixed at construction; the only link is the owned `next`
/// pointer, set once while the chain is being assembled. `Debug` stops at
/// this record; walk the chain to see the rest.
pub struct Record {
    linkage: Hash256,
    payload: Vec<u32>,
    signature: Hash256,
    pub(crate) next: Option<Box<Record>>,
}

impl Record {
    /// Create a detached record, deriving its signature from the inputs.
    pub fn new(linkage: Hash256, payload: Vec<u32>) -> Self {
        let signature = sign(&linkage, &payload);
        Self {
            linkage,
            payload,
            signature,
            next: None,
        }
    }

    /// Anchor digest: genesis timestamp digest or the predecessor's signature.
    pub fn linkage(&self) -> &Hash256 {
        &self.linkage
    }

    /// Payload integers.
    pub fn payload(&self) -> &[u32] {
        &self.payload
    }

    /// Payload rendered the way it is fed to the signature.
    pub fn payload_text(&self) -> String {
        render_payload(&self.payload)
    }

    /// Signature digest over linkage and payload.
    pub fn signature(&self) -> &Hash256 {
        &self.signature
    }

    /// Following record, `None` at the tail.
    pub fn next(&self) -> Option<&Record> {
        self.next.as_deref()
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Record")
            .field("linkage", &format_args!("{}", self.linkage))
            .field("payload", &self.payload)
            .field("signature", &format_args!("{}", self.signature))
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Linkage: {}", self.linkage)?;
        writeln!(f, "Payload: {:?}", self.payload)?;
        writeln!(f, "Signature: {}", self.signature)
    }
}

/// Render payload integers as base-10 text joined by single spaces.
pub fn render_payload(payload: &[u32]) -> String {
    let mut text = String::with_capacity(payload.len() * 7);
    for (i, value) in payload.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(text, "{value}");
    }
    text
}

/// SHA-256 over `linkage_hex + " " + payload_text`.
///
/// Pure: identical inputs always produce the identical digest. An empty
/// payload still contributes the separating space.
pub fn sign(linkage: &Hash256, payload: &[u32]) -> Hash256 {
    let linkage_hex = linkage.to_hex();
    let payload_text = render_payload(payload);
    sha256_multi(&[linkage_hex.as_bytes(), b" ", payload_text.as_bytes()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256_str;

    fn linkage() -> Hash256 {
        sha256_str("18/10/2026 09:05:03")
    }

    #[test]
    fn test_render_payload() {
        assert_eq!(render_payload(&[7, 42, 100000, 1]), "7 42 100000 1");
        assert_eq!(render_payload(&[5]), "5");
        assert_eq!(render_payload(&[]), "");
    }

    #[test]
    fn test_record_creation() {
        let record = Record::new(linkage(), vec![7, 42]);

        assert_eq!(record.linkage(), &linkage());
        assert_eq!(record.payload(), &[7, 42]);
        assert_eq!(record.payload_text(), "7 42");
        assert!(record.next().is_none());
    }

    #[test]
    fn test_signature_matches_string_form() {
        let record = Record::new(linkage(), vec![7, 42]);
        let expected = sha256_str(&format!("{} 7 42", linkage().to_hex()));

        assert_eq!(record.signature(), &expected);
        assert_eq!(
            record.signature().to_hex(),
            "b9b98f15f9919c32697b0cd3c86ca220d53fca83074c37c31ed01eaa21197d03"
        );
    }

    #[test]
    fn test_empty_payload_keeps_trailing_space() {
        let record = Record::new(linkage(), Vec::new());
        let expected = sha256_str(&format!("{} ", linkage().to_hex()));

        assert_eq!(record.signature(), &expected);
        assert_ne!(record.signature(), &sha256_str(&linkage().to_hex()));
    }

    #[test]
    fn test_sign_is_pure() {
        let payload = [100000, 1, 99];
        let first = sign(&linkage(), &payload);
        for _ in 0..10 {
            assert_eq!(sign(&linkage(), &payload), first);
        }
    }

    #[test]
    fn test_signature_changes_with_payload() {
        let a = sign(&linkage(), &[1, 2]);
        let b = sign(&linkage(), &[12]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_debug_stops_at_record() {
        let mut first = Record::new(linkage(), vec![1]);
        first.next = Some(Box::new(Record::new(*first.signature(), vec![2])));
        let text = format!("{first:?}");

        assert!(text.starts_with("Record { linkage: "));
        assert!(text.contains(&linkage().to_hex()));
        assert!(text.contains("payload: [1]"));
        assert!(!text.contains("payload: [2]"));
    }

    #[test]
    fn test_record_display() {
        let record = Record::new(linkage(), vec![3]);
        let text = record.to_string();

        assert!(text.contains(&format!("Linkage: {}", linkage())));
        assert!(text.contains("Payload: [3]"));
        assert!(text.contains("Signature: "));
    }
}
