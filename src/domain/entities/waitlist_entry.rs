/// A persisted waitlist signup. Rows are write-once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: i64,
    pub email: String,
    pub email_hash: String,
    pub created_at: String,
    pub source_ip: Option<String>,
}

/// Values bound into the insert; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub email_hash: String,
    pub created_at: String,
    pub source_ip: Option<String>,
}

impl NewWaitlistEntry {
    pub fn into_entry(self, id: i64) -> WaitlistEntry {
        WaitlistEntry {
            id,
            email: self.email,
            email_hash: self.email_hash,
            created_at: self.created_at,
            source_ip: self.source_ip,
        }
    }
}
