//! Resend HTTP API client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use madrasa_core::config::MailConfig;
use madrasa_core::error::{AppError, ErrorKind};
use madrasa_core::result::AppResult;
use madrasa_entity::invitation::InvitationNotice;

use crate::template::InvitationEmail;

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Sends invitation emails through Resend.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: Client,
    config: MailConfig,
}

impl ResendMailer {
    /// Create a mailer from configuration.
    pub fn new(config: MailConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to create mail HTTP client",
                    e,
                )
            })?;

        Ok(Self { client, config })
    }

    /// Render and send the invitation email. Returns the provider's message id.
    pub async fn send_invitation(&self, notice: &InvitationNotice) -> AppResult<String> {
        let email = InvitationEmail::render(notice, &self.config.signup_base_url)?;
        self.send(&email).await
    }

    /// Send an already rendered email.
    pub async fn send(&self, email: &InvitationEmail) -> AppResult<String> {
        let url = format!("{}/emails", self.config.api_base.trim_end_matches('/'));
        let request = SendEmailRequest {
            from: &self.config.from_address,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };

        debug!(to = %email.to, "Sending email via Resend");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Failed to call mail provider: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Mail provider error: {status} - {body}"
            )));
        }

        let body: SendEmailResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Mail provider returned an unreadable response",
                e,
            )
        })?;

        info!(to = %email.to, message_id = %body.id, "Invitation email sent");
        Ok(body.id)
    }
}
