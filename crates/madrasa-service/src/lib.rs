//! # madrasa-service
//!
//! Business logic for the madrasa office. Services receive an explicit
//! [`RequestContext`](context::RequestContext) identifying the actor and talk
//! to their collaborators (record store, profile lookup, notifier, cache)
//! through the traits in [`traits`].

pub mod adapters;
pub mod context;
pub mod invitation;
pub mod record;
pub mod scope;
pub mod traits;

pub use context::RequestContext;
pub use invitation::{InvitationService, IssueInvitation, JoinRequest};
pub use record::RecordService;
pub use scope::ScopeResolver;

#[cfg(test)]
mod test_support;
