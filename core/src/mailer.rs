//! HTTP mailer for a JSON transactional-email API.
//!
//! POSTs `{from, to, reply_to, subject, text}` with a bearer key.
//! Any non-2xx status is a failure; the body is kept for the log.

use crate::{
    config::ContactConfig,
    contact::{Mailer, OutboundEmail},
    error::{DealerError, DealerResult},
};
use std::time::Duration;

pub struct HttpMailer {
    client:   reqwest::blocking::Client,
    endpoint: String,
    api_key:  String,
}

impl HttpMailer {
    pub fn new(endpoint: &str, api_key: &str, timeout_ms: u64) -> DealerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key:  api_key.to_string(),
        })
    }

    /// Build from config, reading the API key from the configured env var.
    pub fn from_config(config: &ContactConfig) -> DealerResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            DealerError::MailerNotConfigured {
                reason: format!("environment variable {} is not set", config.api_key_env),
            }
        })?;
        if api_key.trim().is_empty() {
            return Err(DealerError::MailerNotConfigured {
                reason: format!("environment variable {} is empty", config.api_key_env),
            });
        }
        Self::new(&config.endpoint, api_key.trim(), config.timeout_ms)
    }
}

impl Mailer for HttpMailer {
    fn send(&self, email: &OutboundEmail) -> DealerResult<()> {
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()?;

        let status = resp.status();
        if status.is_success() {
            log::debug!("mailer: {} accepted message ({status})", self.endpoint);
            return Ok(());
        }

        let body = resp.text().unwrap_or_default();
        Err(DealerError::MailRejected { status: status.as_u16(), body })
    }
}

/// Stands in when no provider credentials are available. Every send fails,
/// so submissions still go through validation and lead recording.
pub struct UnconfiguredMailer {
    reason: String,
}

impl UnconfiguredMailer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl Mailer for UnconfiguredMailer {
    fn send(&self, _email: &OutboundEmail) -> DealerResult<()> {
        Err(DealerError::MailerNotConfigured { reason: self.reason.clone() })
    }
}
