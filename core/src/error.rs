use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid catalog '{vehicle_id}': {reason}")]
    InvalidCatalog { vehicle_id: String, reason: String },

    #[error("Vehicle '{vehicle_id}' not found")]
    VehicleNotFound { vehicle_id: String },

    #[error("Mail provider rejected message: status {status}: {body}")]
    MailRejected { status: u16, body: String },

    #[error("Mailer not configured: {reason}")]
    MailerNotConfigured { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DealerResult<T> = Result<T, DealerError>;
