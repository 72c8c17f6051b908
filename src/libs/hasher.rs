//! Password digests.
//!
//! Passwords are stored as the lower-case hex SHA-256 of their UTF-8 bytes.
//! There is no per-user salt: equal passwords produce equal digests, and login
//! compares digests directly in SQL. Adding a salt would change the stored
//! format and invalidate existing rows.

use sha2::{Digest, Sha256};

/// Length of a digest string in hex characters.
pub const DIGEST_LEN: usize = 64;

pub fn hash(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash("password123"), hash("password123"));
        assert_ne!(hash("password123"), hash("password124"));
    }

    #[test]
    fn test_hash_format() {
        let digest = hash("password123");
        assert_eq!(digest.len(), DIGEST_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(hash(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    }
}
