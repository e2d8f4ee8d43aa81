//! # madrasa-mail
//!
//! Renders the Urdu invitation email and delivers it through the
//! [Resend](https://resend.com) HTTP API.

pub mod resend;
pub mod template;

pub use resend::ResendMailer;
pub use template::InvitationEmail;
