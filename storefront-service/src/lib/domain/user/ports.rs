use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::ProvisionUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Exchange an email/password pair for a session token.
    ///
    /// # Arguments
    /// * `command` - Raw email and plaintext password
    ///
    /// # Returns
    /// Issued token and the authenticated user
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such email, or wrong password
    /// * `StoreUnavailable` - Credential store lookup failed
    /// * `Unknown` - Token could not be issued
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, UserError>;

    /// Create a user unless one with the same email already exists.
    ///
    /// # Returns
    /// The existing or newly created user
    ///
    /// # Errors
    /// * `StoreUnavailable` - Credential store operation failed
    /// * `Unknown` - Password hashing failed
    async fn provision_user(&self, command: ProvisionUserCommand) -> Result<User, UserError>;
}

/// Credential store: persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by exact email match.
    ///
    /// # Returns
    /// Optional user entity (None if not found); never more than one record
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `StoreUnavailable` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;
}
