//! Claims carried by an access token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the actor id.
    pub sub: Uuid,
    /// The actor's login email.
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
}

impl Claims {
    /// The actor id from the subject claim.
    pub fn actor_id(&self) -> Uuid {
        self.sub
    }

    /// The login email, ignoring blank values.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }
}
