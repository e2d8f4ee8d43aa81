//! Notification payload for an issued invitation.

use serde::{Deserialize, Serialize};

/// Everything the notifier needs to tell an invitee about their invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationNotice {
    /// Recipient.
    pub email: String,
    /// Offered role.
    pub role: String,
    /// Madrasa the invitee is joining.
    pub madrasa_name: String,
    /// Display name of the inviter.
    pub invited_by: String,
}
