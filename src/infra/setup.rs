use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, sqlite_persistence},
    use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
};
use secrecy::ExposeSecret;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let repo = match &config.database_url {
        Some(url) => {
            let persistence =
                sqlite_persistence(url.expose_secret(), config.database_max_connections).await?;
            Some(Arc::new(persistence) as Arc<dyn WaitlistRepo>)
        }
        None => None,
    };

    let waitlist_use_cases = WaitlistUseCases::new(repo);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true)
        .pretty();

    // File (structured JSON logs); skipped if the file can't be created
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    let file_unavailable = json_layer.is_none();

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .is_ok();

    if initialized && file_unavailable {
        tracing::warn!(log_file, "Cannot create log file, logging to console only");
    }
}
