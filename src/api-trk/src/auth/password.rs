use bcrypt;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// Hash a plaintext password with a per-hash salt. Irreversible.
pub fn hash_password(plaintext: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, bcrypt::DEFAULT_COST).map_err(PasswordError::from)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
    bcrypt::verify(plaintext, hash).map_err(PasswordError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_never_the_plaintext() {
        let hash = hash_password("test_password").unwrap();
        assert_ne!(hash, "test_password");
        assert!(verify_password("test_password", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("test_password").unwrap();
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_invalid_hash_is_an_error() {
        assert!(verify_password("test_password", "invalid_hash").is_err());
    }
}
