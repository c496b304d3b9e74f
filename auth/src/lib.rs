//! Authentication utilities library
//!
//! Provides the authentication primitives used by the storefront service:
//! - Password hashing (Argon2id)
//! - Session tokens (HS256 JWT carrying subject and role)
//! - The closed set of user roles
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 24);
//!
//! // Provision: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let issued = auth.authenticate("password123", &hash, "user123", Role::Editor).unwrap();
//!
//! // Protected request: validate token
//! let identity = auth.validate_token(&issued.access_token).unwrap();
//! assert_eq!(identity.subject_id, "user123");
//! assert_eq!(identity.role, Role::Editor);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod role;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::Identity;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
pub use role::RoleError;
