use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::role::Role;

/// Authentication coordinator combining password verification and JWT handling.
///
/// Holds the immutable signing secret and token lifetime; constructed once at
/// process start and shared behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// JWT access token
    pub access_token: String,
    /// Expiration time (Unix timestamp)
    pub expires_at: i64,
}

/// Identity recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: String,
    pub role: Role,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `expiration_hours` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], expiration_hours: i64) -> Self {
        Self::with_ttl(jwt_secret, Duration::hours(expiration_hours))
    }

    /// Create a new authenticator with an arbitrary token lifetime.
    pub fn with_ttl(jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored digest.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Reject a login for which no account exists, at the cost of a real
    /// password check.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        self.password_hasher.verify_decoy(password);
        AuthenticationError::InvalidCredentials
    }

    /// Verify credentials and issue a token for the subject.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or digest unusable)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject_id: impl ToString,
        role: Role,
    ) -> Result<IssuedToken, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject_id, role)?)
    }

    /// Issue a token without password verification.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(
        &self,
        subject_id: impl ToString,
        role: Role,
    ) -> Result<IssuedToken, JwtError> {
        self.issue_token_at(subject_id, role, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_token_at(
        &self,
        subject_id: impl ToString,
        role: Role,
        now: i64,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::issued_at(subject_id, role, now, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Validate a token and return the identity embedded at issuance.
    ///
    /// # Errors
    /// * `Malformed`, `InvalidSignature`, `Expired` - see [`JwtHandler::decode`]
    pub fn validate_token(&self, token: &str) -> Result<Identity, JwtError> {
        self.validate_token_at(token, Utc::now().timestamp())
    }

    /// Validate a token as if the current time were `now`.
    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<Identity, JwtError> {
        let claims = self.jwt_handler.decode_at(token, now)?;

        Ok(Identity {
            subject_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, 24);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", Role::Admin)
            .expect("Authentication failed");

        let identity = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(
            identity,
            Identity {
                subject_id: "user123".to_string(),
                role: Role::Admin,
            }
        );
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, 24);
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", Role::User);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reject_unknown_is_invalid_credentials() {
        let authenticator = Authenticator::new(SECRET, 24);

        assert!(matches!(
            authenticator.reject_unknown("my_password"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_authenticate_with_corrupt_hash() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result =
            authenticator.authenticate("my_password", "$argon2id$garbage", "u", Role::User);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_validate_each_role() {
        let authenticator = Authenticator::new(SECRET, 1);

        for role in [Role::Admin, Role::Editor, Role::User] {
            let token = authenticator
                .issue_token("subject-1", role)
                .expect("Failed to issue token");
            let identity = authenticator
                .validate_token(&token.access_token)
                .expect("Failed to validate token");

            assert_eq!(identity.subject_id, "subject-1");
            assert_eq!(identity.role, role);
        }
    }

    #[test]
    fn test_token_expires_after_ttl() {
        let authenticator = Authenticator::with_ttl(SECRET, Duration::seconds(30));
        let issued = authenticator
            .issue_token_at("user123", Role::User, 10_000)
            .expect("Failed to issue token");

        assert_eq!(issued.expires_at, 10_030);
        assert!(authenticator
            .validate_token_at(&issued.access_token, 10_029)
            .is_ok());
        assert_eq!(
            authenticator.validate_token_at(&issued.access_token, 10_030),
            Err(JwtError::Expired)
        );
    }

    #[test]
    fn test_validate_invalid_token() {
        let authenticator = Authenticator::new(SECRET, 24);

        let result = authenticator.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }
}
