//! Subscription Auth Signatures
//!
//! Browser clients subscribing to private channels present a signature the
//! server mints from the provider secret. The signature is computed as
//! HMAC-SHA256 over `"{socket_id}:{channel_name}"` and returned in the form
//! `key:hexsignature`, which the provider's JavaScript client forwards on
//! subscribe.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the subscription auth string for a socket/channel pair.
pub fn subscription_signature(key: &str, secret: &str, socket_id: &str, channel: &str) -> String {
    let signature = hmac_sha256_hex(&format!("{}:{}", socket_id, channel), secret);
    format!("{}:{}", key, signature)
}

/// Compute HMAC-SHA256 and return hex-encoded result (lowercase)
pub(crate) fn hmac_sha256_hex(data: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_shape() {
        let auth = subscription_signature("app-key", "app-secret", "1234.5678", "wait-times");
        let (key, sig) = auth.split_once(':').unwrap();
        assert_eq!(key, "app-key");
        assert_eq!(sig.len(), 64); // SHA256 = 32 bytes = 64 hex chars
    }

    #[test]
    fn test_signature_deterministic() {
        let a = subscription_signature("k", "s", "1.2", "queue-updates");
        let b = subscription_signature("k", "s", "1.2", "queue-updates");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_varies_by_channel() {
        let a = subscription_signature("k", "s", "1.2", "queue-updates");
        let b = subscription_signature("k", "s", "1.2", "anomaly-alerts");
        assert_ne!(a, b);
    }
}
