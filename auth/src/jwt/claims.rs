use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Role granted to every authenticated principal.
pub const ADMIN_ROLE: &str = "admin";

/// Token payload.
///
/// Every field is required when decoding, so a token missing any of them is
/// rejected as a whole instead of being inspected field by field later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account username the token was issued to
    pub username: String,

    /// Role used by the access gate
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims valid from now for `ttl`.
    ///
    /// # Arguments
    /// * `username` - Account username
    /// * `role` - Role name
    /// * `ttl` - Validity window starting now
    pub fn new(username: impl Into<String>, role: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            username: username.into(),
            role: role.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Create admin claims for a freshly authenticated account.
    pub fn for_admin(username: impl Into<String>, ttl: Duration) -> Self {
        Self::new(username, ADMIN_ROLE, ttl)
    }

    /// Override expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = exp;
        self
    }

    /// Check whether the claims carry the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Expiration as a UTC datetime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
