use reqwest::Client;

#[derive(Clone)]
pub struct SmsClient {
    client: Client,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

impl SmsClient {
    pub fn new(account_sid: &str, auth_token: &str, from_number: &str) -> Self {
        Self {
            client: Client::new(),
            account_sid: account_sid.to_string(),
            auth_token: auth_token.to_string(),
            from_number: from_number.to_string(),
        }
    }

    pub async fn send_sms(&self, to: &str, body: &str) -> Result<(), String> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let params = [
            ("To", to),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self.client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| format!("sms send failed: {e}"))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("sms API error: {body}"));
        }

        tracing::debug!(to = %to, "sms sent");
        Ok(())
    }
}
