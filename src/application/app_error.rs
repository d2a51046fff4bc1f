use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid JSON payload.")]
    InvalidPayload,

    #[error("A valid email address is required.")]
    InvalidEmail,

    #[error("Waitlist storage is not configured.")]
    StorageNotConfigured,

    #[error("Already registered.")]
    AlreadyRegistered,

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidPayload => "Invalid JSON payload.",
            AppError::InvalidEmail => "A valid email address is required.",
            AppError::StorageNotConfigured => "Waitlist storage is not configured.",
            AppError::AlreadyRegistered => "Already registered.",
            AppError::Database(_) => "Unable to save right now.",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_message_is_not_leaked() {
        let err = AppError::Database("disk I/O error at /var/lib/waitlist.db".into());
        assert_eq!(err.public_message(), "Unable to save right now.");
        assert!(err.to_string().contains("disk I/O error"));
    }

    #[test]
    fn user_facing_messages_match_display() {
        for err in [
            AppError::InvalidPayload,
            AppError::InvalidEmail,
            AppError::StorageNotConfigured,
            AppError::AlreadyRegistered,
        ] {
            assert_eq!(err.public_message(), err.to_string());
        }
    }
}
