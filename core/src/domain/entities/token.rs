//! Session token entities for cookie-based JWT authentication.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Session token lifetime (7 days)
pub const TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued to
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `email` expiring `lifetime_seconds` from now
    ///
    /// Returns `None` when the expiry is not a representable timestamp.
    pub fn new(email: impl Into<String>, lifetime_seconds: i64) -> Option<Self> {
        let now = Utc::now();
        let expiry = TimeDelta::try_seconds(lifetime_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))?;

        Some(Self {
            email: email.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// Checks if the claims have expired
    ///
    /// A token is still valid during its `exp` second.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Expiration as a timestamp, if representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Issuance as a timestamp, if representable
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }
}

/// A freshly signed token together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,
    /// Claims signed into `token`
    pub claims: Claims,
    /// Lifetime in seconds, used as the cookie Max-Age
    pub max_age_seconds: i64,
}
