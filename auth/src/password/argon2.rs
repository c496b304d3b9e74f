use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

const DECOY_PASSWORD: &str = "decoy-password-never-assigned";

/// Digest verified against when there is no stored one, computed once with the
/// same parameters as real digests.
fn decoy_hash() -> Option<&'static str> {
    static DECOY: OnceLock<Option<String>> = OnceLock::new();
    DECOY
        .get_or_init(|| PasswordHasher::new().hash(DECOY_PASSWORD).ok())
        .as_deref()
}

/// Password hashing implementation.
///
/// Produces self-describing Argon2id digests in PHC string format. The
/// algorithm parameters and a fresh random salt are embedded in every digest,
/// so verification needs nothing besides the stored string.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a new password hasher using the argon2 crate defaults
    /// (Argon2id, 19 MiB memory, 2 iterations, 1 lane).
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Never fails: a malformed digest or any internal argon2 error is a
    /// non-match. The comparison itself is constant-time.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash in PHC string format
    ///
    /// # Returns
    /// True if password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Spend the cost of a verification when no stored digest exists.
    ///
    /// Always a non-match, so an unknown account takes as long to reject as a
    /// wrong password.
    pub fn verify_decoy(&self, password: &str) -> bool {
        match decoy_hash() {
            Some(hash) => {
                self.verify(password, hash);
            }
            None => {
                let _ = self.hash(password);
            }
        }
        false
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
