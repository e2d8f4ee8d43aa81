//! Request context carrying the acting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the actor behind the current request.
///
/// Built by the API layer from the bearer token and passed into every
/// service method; services never read identity from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated actor's id.
    pub actor_id: Uuid,
    /// The actor's login email, if the token carried one.
    pub actor_email: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(actor_id: Uuid, actor_email: Option<String>) -> Self {
        Self {
            actor_id,
            actor_email: actor_email.filter(|e| !e.trim().is_empty()),
            request_time: Utc::now(),
        }
    }

    /// The login email, if any.
    pub fn email(&self) -> Option<&str> {
        self.actor_email.as_deref()
    }
}
