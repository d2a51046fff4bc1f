use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::{is_valid_email, normalize_email};
use crate::domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry};

// ============================================================================
// Repository Trait
// ============================================================================

#[derive(Error, Debug)]
pub enum StoreError {
    /// The insert collided with an existing `email_hash`.
    #[error("unique constraint violated")]
    Duplicate,

    #[error("storage failure: {0}")]
    Database(String),
}

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Creates the waitlist table if it does not exist yet. Safe to call repeatedly.
    async fn ensure_schema(&self) -> Result<(), StoreError>;

    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, StoreError>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Option<Arc<dyn WaitlistRepo>>,
}

impl WaitlistUseCases {
    /// `repo` is `None` when no storage is configured; signups then fail with
    /// [`AppError::StorageNotConfigured`].
    pub fn new(repo: Option<Arc<dyn WaitlistRepo>>) -> Self {
        Self { repo }
    }

    pub fn is_configured(&self) -> bool {
        self.repo.is_some()
    }

    /// Validates, hashes and stores a signup.
    ///
    /// Validation runs before the storage check, so malformed input is a 400
    /// even when no storage is configured.
    pub async fn join(&self, email: &str, source_ip: Option<String>) -> AppResult<WaitlistEntry> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidEmail);
        }

        let repo = self.repo.as_ref().ok_or(AppError::StorageNotConfigured)?;

        let entry = NewWaitlistEntry {
            email_hash: hash_email(&email),
            email,
            created_at: now_iso8601(),
            source_ip,
        };

        repo.ensure_schema().await.map_err(store_to_app_error)?;

        match repo.insert(&entry).await {
            Ok(saved) => {
                tracing::info!(
                    id = saved.id,
                    email_hash = %saved.email_hash.get(..12).unwrap_or_default(),
                    "Waitlist signup stored"
                );
                Ok(saved)
            }
            Err(err) => Err(store_to_app_error(err)),
        }
    }
}

fn store_to_app_error(err: StoreError) -> AppError {
    match err {
        StoreError::Duplicate => AppError::AlreadyRegistered,
        StoreError::Database(msg) => AppError::Database(msg),
    }
}

/// Lowercase hex SHA-256 of an already normalized address.
pub fn hash_email(email: &str) -> String {
    let hash = Sha256::digest(email.as_bytes());
    hex::encode(hash)
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
