//! Hash-linked record chains.
//!
//! - Immutable records bound to their predecessor
//! - Sequential construction with injectable clock and randomness
//! - Owned, singly linked storage with iterative teardown

pub mod builder;
pub mod record;
pub mod source;

pub use builder::{build, ChainBuilder, ChainShape};
pub use record::{render_payload, sign, Record};
pub use source::{Clock, FixedClock, PayloadSource, SequenceSource, SystemClock};

/// A built chain: exclusive owner of the head record.
#[derive(Default)]
pub struct Chain {
    head: Option<Box<Record>>,
    len: usize,
}

impl Chain {
    pub(crate) fn from_parts(head: Option<Box<Record>>, len: usize) -> Self {
        Self { head, len }
    }

    /// First record, `None` for an empty chain.
    pub fn head(&self) -> Option<&Record> {
        self.head.as_deref()
    }

    /// Last record. Walks the whole chain, O(n).
    pub fn tail(&self) -> Option<&Record> {
        self.iter().last()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the chain has no records.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk the chain from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head(),
        }
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Drop for Chain {
    // Unlink record by record so long chains don't recurse in Box's drop.
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut record) = current {
            current = record.next.take();
        }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a chain.
pub struct Iter<'a> {
    next: Option<&'a Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.next?;
        self.next = record.next();
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256_str;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_clock() -> FixedClock {
        FixedClock(
            chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 5, 3)
                .unwrap(),
        )
    }

    #[test]
    fn test_empty_chain() {
        let chain = Chain::default();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
        assert!(chain.head().is_none());
        assert!(chain.tail().is_none());
    }

    #[test]
    fn test_traversal_count_matches_len() {
        let builder = ChainBuilder::with_clock(fixed_clock());
        for n in [0usize, 1, 2, 17] {
            let chain = builder.build(n, 3, &mut StdRng::seed_from_u64(n as u64)).unwrap();
            assert_eq!(chain.iter().count(), n);
            assert_eq!(chain.len(), n);
        }
    }

    #[test]
    fn test_linkage_copies_previous_signature() {
        let builder = ChainBuilder::with_clock(fixed_clock());
        let chain = builder.build(12, 5, &mut StdRng::seed_from_u64(11)).unwrap();
        let records: Vec<&Record> = (&chain).into_iter().collect();

        for pair in records.windows(2) {
            assert_eq!(pair[1].linkage().to_hex(), pair[0].signature().to_hex());
        }
    }

    #[test]
    fn test_head_and_tail() {
        let builder = ChainBuilder::with_clock(fixed_clock());
        let chain = builder
            .build(3, 2, &mut SequenceSource::new(vec![7, 42, 100000, 1]))
            .unwrap();

        let head = chain.head().unwrap();
        assert_eq!(head.linkage(), &sha256_str("18/10/2026 09:05:03"));

        let tail = chain.tail().unwrap();
        assert!(tail.next().is_none());
        assert_eq!(
            tail.signature().to_hex(),
            "af6feea59044e40359028d5684fddf3cabb0ee07bd31c1b88dca41a28ae2093a"
        );
    }

    #[test]
    fn test_long_chain_drops_without_overflow() {
        let builder = ChainBuilder::with_clock(fixed_clock());
        let chain = builder
            .build(200_000, 0, &mut SequenceSource::new(Vec::new()))
            .unwrap();
        assert_eq!(chain.len(), 200_000);
        drop(chain);
    }

    #[test]
    fn test_long_chain_debug_without_overflow() {
        let builder = ChainBuilder::with_clock(fixed_clock());
        let chain = builder
            .build(200_000, 0, &mut SequenceSource::new(Vec::new()))
            .unwrap();
        let text = format!("{chain:?}");

        assert!(text.starts_with("[Record { linkage: "));
        assert_eq!(text.matches("Record {").count(), 200_000);
    }

    #[test]
    fn test_empty_chain_debug() {
        assert_eq!(format!("{:?}", Chain::default()), "[]");
    }
}
