//! Invitation email configuration.

use serde::{Deserialize, Serialize};

/// Outbound transactional email settings (Resend HTTP API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// When disabled, invitations are stored but no email is sent.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the provider API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Provider API key.
    #[serde(default)]
    pub api_key: String,
    /// `From` header of invitation emails.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Base URL the signup link is built from.
    #[serde(default)]
    pub signup_base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_base: default_api_base(),
            api_key: String::new(),
            from_address: default_from(),
            signup_base_url: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.resend.com".to_string()
}

fn default_from() -> String {
    "Madrasa Management <onboarding@resend.dev>".to_string()
}

fn default_timeout() -> u64 {
    10
}
