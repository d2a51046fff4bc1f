use async_trait::async_trait;

use crate::{
    adapters::persistence::SqlitePersistence,
    application::use_cases::waitlist::{StoreError, WaitlistRepo},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

const CREATE_WAITLIST_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS waitlist (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        email       TEXT    NOT NULL,
        email_hash  TEXT    NOT NULL UNIQUE,
        created_at  TEXT    NOT NULL,
        source_ip   TEXT
    )
"#;

#[async_trait]
impl WaitlistRepo for SqlitePersistence {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_WAITLIST_TABLE)
            .execute(self.pool())
            .await
            .map_err(StoreError::from)?;

        Ok(())
    }

    async fn insert(&self, entry: &NewWaitlistEntry) -> Result<WaitlistEntry, StoreError> {
        let result = sqlx::query(
            "INSERT INTO waitlist (email, email_hash, created_at, source_ip) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&entry.email)
        .bind(&entry.email_hash)
        .bind(&entry.created_at)
        .bind(entry.source_ip.as_deref())
        .execute(self.pool())
        .await
        .map_err(StoreError::from)?;

        Ok(entry.clone().into_entry(result.last_insert_rowid()))
    }
}
