//! Contact form action: one submission, one send attempt.
//!
//! RULES:
//!   - Exactly one Mailer::send() call per valid submission. No retry, no queue.
//!   - Provider failures are logged and mapped to the configured generic
//!     message. They never propagate to the caller.

use crate::{
    config::ContactConfig,
    error::DealerResult,
    store::{LeadRecord, LeadStore},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name:    String,
    pub email:   String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn ok() -> Self {
        Self { success: true, error: None }
    }

    fn failed(message: &str) -> Self {
        Self { success: false, error: Some(message.to_string()) }
    }
}

/// A fully addressed message ready for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from:     String,
    pub to:       Vec<String>,
    pub reply_to: String,
    pub subject:  String,
    pub text:     String,
}

/// The seam between the contact action and a transactional-email provider.
pub trait Mailer {
    fn send(&self, email: &OutboundEmail) -> DealerResult<()>;
}

impl ContactRequest {
    /// Why this request cannot be sent, if anything.
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name is empty");
        }
        if self.message.trim().is_empty() {
            return Some("message is empty");
        }
        if !is_plausible_email(self.email.trim()) {
            return Some("email is malformed");
        }
        None
    }

    pub fn to_email(&self, config: &ContactConfig) -> OutboundEmail {
        let name = self.name.trim();
        let email = self.email.trim();
        OutboundEmail {
            from:     config.from_address.clone(),
            to:       vec![config.to_address.clone()],
            reply_to: email.to_string(),
            subject:  format!("{} {name}様からのお問い合わせ", config.subject_prefix),
            text:     format!(
                "お名前: {name}\nメールアドレス: {email}\n\nお問い合わせ内容:\n{}",
                self.message.trim()
            ),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validate and send one contact submission.
pub fn submit_contact(
    mailer: &dyn Mailer,
    config: &ContactConfig,
    request: &ContactRequest,
) -> ContactResponse {
    send_once(mailer, config, request).0
}

/// Same as submit_contact(), also recording the lead and its delivery
/// outcome. A store failure is logged; it does not change the response.
pub fn submit_contact_with_store(
    mailer: &dyn Mailer,
    config: &ContactConfig,
    store: &LeadStore,
    request: &ContactRequest,
) -> ContactResponse {
    let (response, delivery_error) = send_once(mailer, config, request);

    if request.validation_error().is_none() {
        let record = LeadRecord::new(request, response.success, delivery_error);
        if let Err(e) = store.record_lead(&record) {
            log::error!("contact: failed to record lead {}: {e}", record.lead_id);
        }
    }

    response
}

/// Returns the response plus the internal error text, if delivery failed.
fn send_once(
    mailer: &dyn Mailer,
    config: &ContactConfig,
    request: &ContactRequest,
) -> (ContactResponse, Option<String>) {
    if let Some(reason) = request.validation_error() {
        log::warn!("contact: rejected submission: {reason}");
        return (ContactResponse::failed(&config.messages.invalid), None);
    }

    let email = request.to_email(config);
    match mailer.send(&email) {
        Ok(()) => {
            log::info!("contact: submission from {} delivered", email.reply_to);
            (ContactResponse::ok(), None)
        }
        Err(e) => {
            log::error!("contact: delivery failed for {}: {e}", email.reply_to);
            (ContactResponse::failed(&config.messages.failure), Some(e.to_string()))
        }
    }
}
