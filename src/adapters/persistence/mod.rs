use sqlx::{SqlitePool, error::ErrorKind};

use crate::application::use_cases::waitlist::StoreError;

pub mod waitlist;

#[derive(Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePersistence { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let duplicate = match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => true,
                // Unclassified by the driver; fall back to the message text.
                ErrorKind::Other => mentions_unique(db_err.message()),
                _ => false,
            },
            _ => mentions_unique(&err.to_string()),
        };

        if duplicate {
            return StoreError::Duplicate;
        }

        StoreError::Database(err.to_string())
    }
}

fn mentions_unique(message: &str) -> bool {
    message.to_lowercase().contains("unique")
}
