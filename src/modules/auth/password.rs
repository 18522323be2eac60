use sha2::{Digest, Sha256};
use std::io;

/// Hash a plaintext password into a lowercase hex SHA-256 digest.
///
/// The digest is unsalted and single-round so that hashes written by earlier
/// versions of the planner keep verifying. This is a known weakness: identical
/// passwords produce identical digests and the scheme is cheap to brute force.
pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    hex::encode(digest)
}

/// Check a plaintext password against a stored digest
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash
}

/// Helper function to read a password without echoing it to the terminal
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let first = hash_password("pw1");
        let second = hash_password("pw1");
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_known_digests() {
        // Must match digests already stored by existing databases
        assert_eq!(
            hash_password(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_password_verification() {
        let stored = hash_password("correct horse");
        assert!(verify_password("correct horse", &stored));
        assert!(!verify_password("correct horse ", &stored));
        assert!(!verify_password("Correct horse", &stored));
        assert!(!verify_password("", &stored));

        // Unicode input hashes its UTF-8 bytes
        let stored = hash_password("пароль");
        assert!(verify_password("пароль", &stored));
    }
}
