//! HTTP Provider Publisher
//!
//! Publishes channel events to the messaging provider's REST API:
//! `POST {base_url}/apps/{app_id}/events`. Requests are authenticated the
//! provider's way: the query string carries `auth_key`, `auth_timestamp` and
//! `body_sha256`, and `auth_signature` is HMAC-SHA256 over
//! `"POST\n{path}\n{query}"` keyed by the app secret.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::auth::hmac_sha256_hex;
use crate::{RealtimeError, RealtimePublisher, Result};
use qw_common::RealtimeMessage;

/// Provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub app_id: String,
    pub key: String,
    pub secret: String,
}

/// Publisher backed by the provider's REST API
pub struct HttpPublisher {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpPublisher {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        if config.app_id.is_empty() || config.key.is_empty() || config.secret.is_empty() {
            return Err(RealtimeError::NotConfigured);
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self { client, config })
    }

    fn events_path(&self) -> String {
        format!("/apps/{}/events", self.config.app_id)
    }

    /// Build the signed query string for a request body
    fn signed_query(&self, path: &str, body: &str) -> String {
        let timestamp = chrono::Utc::now().timestamp();
        let body_sha256 = hex::encode(Sha256::digest(body.as_bytes()));
        let query = format!(
            "auth_key={}&auth_timestamp={}&body_sha256={}",
            self.config.key, timestamp, body_sha256
        );
        let to_sign = format!("POST\n{}\n{}", path, query);
        let signature = hmac_sha256_hex(&to_sign, &self.config.secret);
        format!("{}&auth_signature={}", query, signature)
    }
}

#[async_trait]
impl RealtimePublisher for HttpPublisher {
    async fn publish(
        &self,
        channel: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<()> {
        let message = RealtimeMessage::new(channel, event, payload);
        let body = serde_json::to_string(&message)?;

        let path = self.events_path();
        let url = format!(
            "{}{}?{}",
            self.config.base_url.trim_end_matches('/'),
            path,
            self.signed_query(&path, &body)
        );

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RealtimeError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        debug!(channel, event, "Published realtime event");
        Ok(())
    }

    fn name(&self) -> &str {
        "http-provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            base_url: "https://provider.example".to_string(),
            app_id: "app-1".to_string(),
            key: "key-1".to_string(),
            secret: "secret-1".to_string(),
        }
    }

    #[test]
    fn test_requires_credentials() {
        let mut config = test_config();
        config.secret = String::new();
        assert!(matches!(
            HttpPublisher::new(config),
            Err(RealtimeError::NotConfigured)
        ));
    }

    #[test]
    fn test_signed_query_contains_auth_fields() {
        let publisher = HttpPublisher::new(test_config()).unwrap();
        let query = publisher.signed_query("/apps/app-1/events", "{}");
        assert!(query.contains("auth_key=key-1"));
        assert!(query.contains("auth_timestamp="));
        assert!(query.contains("body_sha256="));
        assert!(query.contains("auth_signature="));
    }
}
