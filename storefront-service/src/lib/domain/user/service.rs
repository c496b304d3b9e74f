use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginResult;
use crate::domain::user::models::ProvisionUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for authentication.
///
/// Argon2 work runs on the blocking pool so a burst of logins does not stall
/// the async workers.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password and token primitives holding the signing secret
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<LoginResult, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            // Unknown emails pay the same hashing cost as wrong passwords.
            let authenticator = Arc::clone(&self.authenticator);
            let password = command.password;
            tokio::task::spawn_blocking(move || authenticator.reject_unknown(&password))
                .await
                .map_err(|e| {
                    UserError::Unknown(format!("Password verification task failed: {}", e))
                })?;

            tracing::warn!(email = %command.email, "Login rejected");
            return Err(UserError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();
        let (user_id, role) = (user.id, user.role);

        let token = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, user_id, role)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Password verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                tracing::warn!(email = %command.email, "Login rejected");
                UserError::InvalidCredentials
            }
            AuthenticationError::JwtError(err) => {
                UserError::Unknown(format!("Token generation failed: {}", err))
            }
        })?;

        tracing::info!(user_id = %user.id, role = %user.role, "Login succeeded");

        Ok(LoginResult { token, user })
    }

    async fn provision_user(&self, command: ProvisionUserCommand) -> Result<User, UserError> {
        if let Some(existing) = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
        {
            tracing::debug!(user_id = %existing.id, "User already provisioned");
            return Ok(existing);
        }

        let password_hash = self.hash_password(command.password).await?;
        let now = Utc::now();
        let email = command.email.as_str().to_string();

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role: command.role,
            created_at: now,
            updated_at: now,
        };

        match self.repository.create(user).await {
            Ok(created) => {
                tracing::info!(user_id = %created.id, role = %created.role, "User provisioned");
                Ok(created)
            }
            // Lost a race with a concurrent provisioning of the same email.
            Err(UserError::EmailAlreadyExists(_)) => self
                .repository
                .find_by_email(&email)
                .await?
                .ok_or_else(|| UserError::StoreUnavailable(format!("User {} vanished", email))),
            Err(e) => Err(e),
        }
    }
}
