use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are sanitized; the #[source] chain may carry the
/// connection string, so log with `%e` rather than `?e`.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed. Check WAITLIST_DATABASE_URL and file permissions.")]
    DatabaseConnection(#[source] sqlx::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<sqlx::Error> for InfraError {
    fn from(e: sqlx::Error) -> Self {
        InfraError::DatabaseConnection(e)
    }
}
