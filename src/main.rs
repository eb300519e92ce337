//! Tradepulse - a terminal client for up/down price bets.
//!
//! The TUI owns stdout, so logs go to a daily rolling file.

use std::path::PathBuf;

use tradepulse::{App, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let log_dir = tradepulse::config::log_dir().unwrap_or_else(|_| PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(log_dir, "tradepulse.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradepulse=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .init();

    // Load configuration
    let config = Config::load_or_default()?;

    // Run the application
    let mut app = App::new(config).await?;
    app.run().await?;

    Ok(())
}
