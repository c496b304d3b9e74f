use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Session token payload.
///
/// Every field is required: a token missing any of them does not decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Role granted at issuance
    pub role: Role,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `role` - Role to embed
    /// * `expiration_hours` - Hours until token expires
    pub fn for_user(user_id: impl ToString, role: Role, expiration_hours: i64) -> Self {
        Self::issued_at(
            user_id,
            role,
            Utc::now().timestamp(),
            Duration::hours(expiration_hours),
        )
    }

    /// Create claims for a user with an explicit issuance time.
    pub fn issued_at(user_id: impl ToString, role: Role, issued_at: i64, ttl: Duration) -> Self {
        Self {
            sub: user_id.to_string(),
            role,
            iat: issued_at,
            exp: issued_at + ttl.num_seconds(),
        }
    }

    /// Check if token is expired. The expiry instant itself counts as expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
