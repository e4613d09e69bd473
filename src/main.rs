use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gestionale::app::Workspace;
use gestionale::config::AppConfig;
use gestionale::metrics::Metrics;
use gestionale::shell::Shell;

fn main() -> anyhow::Result<()> {
    // Optional .env file; real environment variables win
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // RUST_LOG overrides the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!(
        retention = %config.retention,
        start_view = %config.start_view,
        "Starting gestionale"
    );

    let metrics = Metrics::new()?;
    let workspace = Workspace::new(config.start_view, config.retention, metrics);

    Shell::new(workspace).run()
}
