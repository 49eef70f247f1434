//! localecheck — verify the localized homepage renders in de/en/tr.
//!
//! Takes no arguments. Expects the dev server on localhost:3000; writes one
//! full-page screenshot per locale and exits non-zero on the first failure.

mod runner;

use localecheck_core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::default();
    tracing::debug!(config = %serde_json::to_string(&config)?, "Using defaults");

    let report = runner::run(&config).await?;
    for path in &report.screenshots {
        println!("{}", path.display());
    }

    Ok(())
}
