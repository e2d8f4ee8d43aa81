//! Pending role invitations.

pub mod model;
pub mod notice;

pub use model::{NewInvitation, PendingInvitation};
pub use notice::InvitationNotice;
