//! Who each clue points to: a chained hash table of clue→suspect facts
//!
//! The table keeps the shape of the classic console version: a fixed prime
//! number of buckets, the djb2 string hash, and per-bucket chains with the
//! newest entry in front. It never resizes or rehashes within a session.

use serde::{Deserialize, Serialize};

/// Number of hash buckets. A small prime, fixed for the session.
pub const BUCKET_COUNT: usize = 101;

const HASH_SEED: u64 = 5381;

/// One clue→suspect fact, owned by exactly one bucket chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HashEntry {
    clue: String,
    suspect: String,
}

/// Associative store from clue text to the suspect it incriminates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspectDirectory {
    buckets: Vec<Vec<HashEntry>>,
}

impl Default for SuspectDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl SuspectDirectory {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    /// djb2: h = 5381, then h = h * 33 + byte for every byte, reduced
    /// modulo the bucket count. Deterministic for the whole session.
    fn bucket_of(clue: &str) -> usize {
        let mut hash = HASH_SEED;
        for &byte in clue.as_bytes() {
            hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
        }
        (hash % BUCKET_COUNT as u64) as usize
    }

    /// Record that `clue` incriminates `suspect`. No-op when either string
    /// is empty. A clue already on file has its suspect overwritten in
    /// place (last writer wins); otherwise the fact is prepended to its
    /// bucket's chain.
    pub fn insert(&mut self, clue: &str, suspect: &str) {
        if clue.is_empty() || suspect.is_empty() {
            return;
        }
        let bucket = &mut self.buckets[Self::bucket_of(clue)];
        if let Some(entry) = bucket.iter_mut().find(|entry| entry.clue == clue) {
            entry.suspect = suspect.to_string();
            return;
        }
        bucket.insert(
            0,
            HashEntry {
                clue: clue.to_string(),
                suspect: suspect.to_string(),
            },
        );
    }

    /// Look up the suspect a clue points at. A miss is not an error; clues
    /// with no fact on file simply incriminate nobody.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        if clue.is_empty() {
            return None;
        }
        self.buckets[Self::bucket_of(clue)]
            .iter()
            .find(|entry| entry.clue == clue)
            .map(|entry| entry.suspect.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_what_was_inserted() {
        let mut directory = SuspectDirectory::new();
        directory.insert("Chave dourada enferrujada", "Sr. Black");
        assert_eq!(
            directory.lookup("Chave dourada enferrujada"),
            Some("Sr. Black")
        );
        assert_eq!(directory.lookup("Meia caída sob a cama"), None);
    }

    #[test]
    fn reinserting_a_clue_overwrites_in_place() {
        let mut directory = SuspectDirectory::new();
        directory.insert("Envelope", "Sr. Black");
        directory.insert("Envelope", "Dr. Green");
        assert_eq!(directory.lookup("Envelope"), Some("Dr. Green"));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn empty_strings_are_ignored() {
        let mut directory = SuspectDirectory::new();
        directory.insert("", "Sr. Black");
        directory.insert("Envelope", "");
        assert!(directory.is_empty());
        assert_eq!(directory.lookup(""), None);
    }

    #[test]
    fn hashing_is_deterministic() {
        for clue in ["Envelope", "Pegadas de lama perto do tapete", "ç"] {
            assert_eq!(
                SuspectDirectory::bucket_of(clue),
                SuspectDirectory::bucket_of(clue)
            );
        }
    }

    #[test]
    fn djb2_reference_values() {
        // h("") = 5381, h("a") = 5381 * 33 + 97 = 177670.
        assert_eq!(SuspectDirectory::bucket_of(""), 5381 % BUCKET_COUNT);
        assert_eq!(SuspectDirectory::bucket_of("a"), 177670 % BUCKET_COUNT);
    }

    #[test]
    fn colliding_clues_chain_in_one_bucket() {
        // Brute-force two distinct clues that share a bucket, then make
        // sure chaining keeps both reachable.
        let mut directory = SuspectDirectory::new();
        let first = "clue-0".to_string();
        let target = SuspectDirectory::bucket_of(&first);
        let second = (1..)
            .map(|n| format!("clue-{n}"))
            .find(|c| SuspectDirectory::bucket_of(c) == target)
            .unwrap();

        directory.insert(&first, "Sr. Black");
        directory.insert(&second, "Dr. Green");
        assert_eq!(directory.lookup(&first), Some("Sr. Black"));
        assert_eq!(directory.lookup(&second), Some("Dr. Green"));
        assert_eq!(directory.len(), 2);
    }
}
