//! One-way hashing of passwords before they are written to the store.

use sha2::{Digest, Sha256};

/// SHA-256 of the password's UTF-8 bytes, as 64 lowercase hex characters.
///
/// There is no salt, so the same password always produces the same hash.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
