//! Pending role invitations.

pub mod service;

pub use service::{InvitationService, IssueInvitation, JoinRequest};
