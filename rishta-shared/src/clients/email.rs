use reqwest::Client;
use serde::Serialize;

#[derive(Clone)]
pub struct EmailClient {
    client: Client,
    api_key: String,
    from_email: String,
    from_name: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

impl EmailClient {
    pub fn new(api_key: &str, from_email: &str, from_name: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            from_email: from_email.to_string(),
            from_name: from_name.to_string(),
        }
    }

    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html: &str,
    ) -> Result<(), String> {
        let request = SendEmailRequest {
            from: format!("{} <{}>", self.from_name, self.from_email),
            to: vec![to.to_string()],
            subject: subject.to_string(),
            html: html.to_string(),
        };

        let response = self.client
            .post("https://api.resend.com/emails")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("email send failed: {e}"))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("email API error: {body}"));
        }

        tracing::debug!(to = %to, subject = %subject, "email sent");
        Ok(())
    }

    pub async fn send_interest_received(&self, to: &str, sender_name: &str) -> Result<(), String> {
        let html = format!(
            r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto;">
            <h2 style="color: #b91c1c;">Rishta - Someone is interested in you</h2>
            <p><strong>{sender_name}</strong> has expressed interest in your profile.</p>
            <p>Sign in to view their profile and respond.</p>
            <p style="color: #666; margin-top: 20px;">You are receiving this because interest alerts are enabled on your account.</p>
            </div>"#
        );

        self.send_email(to, "Rishta - New interest received", &html).await
    }

    pub async fn send_interest_accepted(&self, to: &str, accepter_name: &str, mutual: bool) -> Result<(), String> {
        let headline = if mutual {
            "It's a match!"
        } else {
            "Your interest was accepted"
        };
        let html = format!(
            r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto;">
            <h2 style="color: #b91c1c;">Rishta - {headline}</h2>
            <p><strong>{accepter_name}</strong> accepted your interest.</p>
            <p>Sign in to continue the conversation.</p>
            </div>"#
        );

        self.send_email(to, &format!("Rishta - {headline}"), &html).await
    }
}
