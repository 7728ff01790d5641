//! State identity fingerprints.
//!
//! The visited set keys on a SHA-256 digest of a state's canonical identity
//! bytes rather than the raw bytes themselves, so arbitrarily large identity
//! encodings (sorted valve schedules, material vectors) dedup at a fixed
//! 32-byte cost. Domain-separated so identity digests can never collide with
//! other artifact hashes.

use sha2::{Digest, Sha256};

/// Domain prefix for state identity hashing (null-terminated).
pub const DOMAIN_STATE_IDENTITY: &[u8] = b"SUMMIT::STATE_IDENTITY::V1\0";

/// A SHA-256 fingerprint of a state's identity bytes.
///
/// Stored as a lowercase hex digest; ordering and equality follow the hex
/// string, which gives the visited set a deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The lowercase hex digest (64 chars).
    #[must_use]
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// Consume into the owned hex digest string.
    #[must_use]
    pub fn into_hex(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash canonical identity bytes into a [`Fingerprint`].
///
/// `fingerprint(a) == fingerprint(b)` exactly when `a == b` (modulo SHA-256
/// collisions, which the engine treats as impossible).
#[must_use]
pub fn fingerprint(identity: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_STATE_IDENTITY);
    hasher.update(identity);
    Fingerprint(hex::encode(hasher.finalize()))
}
