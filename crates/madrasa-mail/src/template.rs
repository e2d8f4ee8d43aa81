//! Invitation email rendering.
//!
//! The body is right-to-left Urdu HTML. Every interpolated value is
//! HTML-escaped.

use reqwest::Url;

use madrasa_core::error::AppError;
use madrasa_core::result::AppResult;
use madrasa_entity::invitation::InvitationNotice;

/// A rendered invitation email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationEmail {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

impl InvitationEmail {
    /// Render the email for `notice`, linking to the signup page under `signup_base_url`.
    pub fn render(notice: &InvitationNotice, signup_base_url: &str) -> AppResult<Self> {
        let signup_url = signup_url(signup_base_url, &notice.email)?;
        Ok(Self {
            to: notice.email.clone(),
            subject: subject(&notice.madrasa_name),
            html: html_body(notice, signup_url.as_str()),
        })
    }
}

/// Subject line: "Invitation to join {madrasa}".
pub fn subject(madrasa_name: &str) -> String {
    format!("{madrasa_name} میں شامل ہونے کی دعوت")
}

/// The account creation link pre-filled with the invitee's email.
pub fn signup_url(base: &str, email: &str) -> AppResult<Url> {
    let endpoint = format!("{}/auth/v1/signup", base.trim_end_matches('/'));
    let mut url = Url::parse(&endpoint).map_err(|e| {
        AppError::configuration(format!("Invalid signup base URL '{base}': {e}"))
    })?;
    url.query_pairs_mut().append_pair("email", email);
    Ok(url)
}

fn html_body(notice: &InvitationNotice, signup_url: &str) -> String {
    let madrasa = escape_html(&notice.madrasa_name);
    let role = escape_html(&notice.role);
    let invited_by = escape_html(&notice.invited_by);
    let link = escape_html(signup_url);

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl" lang="ur">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="font-family: 'Noto Nastaliq Urdu', Arial, sans-serif; background-color: #f5f5f5; margin: 0; padding: 20px; direction: rtl;">
  <div style="max-width: 600px; margin: 0 auto; background-color: #ffffff; border-radius: 8px; padding: 32px;">
    <h1 style="color: #166534; font-size: 24px; margin-bottom: 16px;">السلام علیکم ورحمۃ اللہ وبرکاتہ</h1>
    <p style="font-size: 16px; line-height: 2;">آپ کو <strong>{madrasa}</strong> میں <strong>{role}</strong> کے طور پر شامل ہونے کی دعوت دی گئی ہے۔</p>
    <p style="font-size: 16px; line-height: 2;">براہ کرم اپنا اکاؤنٹ بنانے کے لیے نیچے دیے گئے بٹن پر کلک کریں:</p>
    <div style="text-align: center; margin: 32px 0;">
      <a href="{link}" style="background-color: #166534; color: #ffffff; padding: 12px 32px; border-radius: 6px; text-decoration: none; font-size: 16px;">اکاؤنٹ بنائیں</a>
    </div>
    <p style="font-size: 14px; color: #555555;">یا اس لنک کو کاپی کر کے اپنے براؤزر میں کھولیں:</p>
    <p style="font-size: 12px; color: #166534; direction: ltr; text-align: left; word-break: break-all;">{link}</p>
    <hr style="border: none; border-top: 1px solid #eeeeee; margin: 24px 0;">
    <p style="font-size: 14px; color: #555555;">آپ کو {invited_by} نے مدعو کیا ہے۔</p>
    <p style="font-size: 12px; color: #999999;">اگر آپ نے یہ دعوت نہیں مانگی تو اس ای میل کو نظرانداز کر دیں۔</p>
  </div>
</body>
</html>"#
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice() -> InvitationNotice {
        InvitationNotice {
            email: "a@x.com".to_string(),
            role: "teacher".to_string(),
            madrasa_name: "Al-Huda".to_string(),
            invited_by: "Maulana Yusuf".to_string(),
        }
    }

    #[test]
    fn test_subject_names_the_madrasa() {
        assert_eq!(subject("Al-Huda"), "Al-Huda میں شامل ہونے کی دعوت");
    }

    #[test]
    fn test_signup_url_encodes_email() {
        let url = signup_url("https://project.example.co/", "a+b@x.com").unwrap();
        assert_eq!(
            url.as_str(),
            "https://project.example.co/auth/v1/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_blank_signup_base_is_a_configuration_error() {
        let err = signup_url("", "a@x.com").unwrap_err();
        assert_eq!(err.kind, madrasa_core::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_body_mentions_role_madrasa_and_inviter() {
        let email = InvitationEmail::render(&notice(), "https://project.example.co").unwrap();

        assert_eq!(email.to, "a@x.com");
        assert!(email.html.contains(r#"dir="rtl""#));
        assert!(email.html.contains("<strong>Al-Huda</strong>"));
        assert!(email.html.contains("<strong>teacher</strong>"));
        assert!(email.html.contains("آپ کو Maulana Yusuf نے مدعو کیا ہے۔"));
        assert!(
            email
                .html
                .contains("https://project.example.co/auth/v1/signup?email=a%40x.com")
        );
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let mut notice = notice();
        notice.role = "<script>alert(1)</script>".to_string();

        let email = InvitationEmail::render(&notice, "https://project.example.co").unwrap();

        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }
}
