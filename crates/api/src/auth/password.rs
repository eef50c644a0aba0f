//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format so algorithm parameters and the
//! random salt travel with the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch, and `Err` only
/// when the stored hash itself is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Validate that a password meets the minimum length requirement.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.len() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("s3cure-enough-passphrase").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");

        let ok = verify_password("s3cure-enough-passphrase", &hash).expect("verify should succeed");
        assert!(ok);
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("the-real-password").expect("hashing should succeed");
        let ok = verify_password("not-the-password", &hash).expect("verify should succeed");
        assert!(!ok);
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(validate_password_strength("tiny", 8).is_err());
        assert!(validate_password_strength("exactly8", 8).is_ok());
    }
}
