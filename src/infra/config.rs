use std::net::SocketAddr;

use axum::http::HeaderName;
use env_helpers::get_env_default;
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// SQLite URL for the waitlist table. `None` leaves storage unconfigured:
    /// the server still runs, but every signup answers 500.
    pub database_url: Option<SecretString>,
    pub database_max_connections: u32,
    /// Header set by the trusted reverse proxy with the client's address.
    /// Its value is stored verbatim.
    pub client_ip_header: HeaderName,
    /// Destination of the structured JSON log.
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3001)),
        );
        let database_url: Option<SecretString> = std::env::var("WAITLIST_DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| SecretString::new(url.into()));
        let database_max_connections: u32 = get_env_default("DATABASE_MAX_CONNECTIONS", 5);
        let client_ip_header: HeaderName =
            get_env_default("CLIENT_IP_HEADER", String::from("cf-connecting-ip"))
                .parse()
                .expect("CLIENT_IP_HEADER must be a valid header name");
        let log_file: String = get_env_default("LOG_FILE", String::from("app.log"));

        Self {
            bind_addr,
            database_url,
            database_max_connections,
            client_ip_header,
            log_file,
        }
    }
}
