use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit message must be at least {min} characters, got {0}", min = super::event::MIN_MESSAGE_LEN)]
    MessageTooShort(usize),

    #[error("failed to build audit client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("audit delivery failed: {0}")]
    Delivery(#[from] reqwest::Error),
}
