//! Resolution of the actor's madrasa scope.

use std::sync::Arc;

use madrasa_core::error::AppError;
use madrasa_core::result::AppResult;

use crate::context::RequestContext;
use crate::traits::ProfileLookup;

/// Resolves the madrasa an actor administers from their profile.
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    profiles: Arc<dyn ProfileLookup>,
}

impl ScopeResolver {
    /// Creates a new scope resolver.
    pub fn new(profiles: Arc<dyn ProfileLookup>) -> Self {
        Self { profiles }
    }

    /// The actor's madrasa. `Authorization` when the actor has none.
    pub async fn resolve(&self, ctx: &RequestContext) -> AppResult<String> {
        let profile = self.profiles.find(ctx.actor_id).await?;
        profile
            .as_ref()
            .and_then(|p| p.madrasa())
            .map(str::to_string)
            .ok_or_else(|| AppError::authorization("No madrasa is associated with this account"))
    }
}
