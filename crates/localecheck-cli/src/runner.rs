//! The verification run: readiness, launch, three locale checks, teardown.

use std::path::PathBuf;

use tracing::{error, info};

use localecheck_browser::BrowserSession;
use localecheck_core::checks::HOMEPAGE_CHECKS;
use localecheck_core::config::Config;
use localecheck_core::error::Result;
use localecheck_core::readiness::wait_for_server;

/// Files written by a successful run, in check order.
#[derive(Debug)]
pub struct RunReport {
    pub screenshots: Vec<PathBuf>,
}

/// Run the fixed verification sequence to completion.
///
/// Strictly sequential: wait for the dev server, launch Chromium, then for
/// each locale navigate, assert the hero heading, and capture a full-page
/// screenshot. Any failure aborts the run; the browser is closed on both
/// paths.
pub async fn run(config: &Config) -> Result<RunReport> {
    wait_for_server(&config.server).await?;

    std::fs::create_dir_all(&config.output_dir)?;

    let session = BrowserSession::launch(&config.browser).await?;
    let outcome = verify_locales(config, &session).await;

    // Close regardless of outcome so Chromium doesn't outlive the run.
    if let Err(e) = session.close().await {
        error!(error = %e, "Browser teardown failed");
    }

    let report = outcome?;
    info!(
        screenshots = report.screenshots.len(),
        "All locales verified"
    );
    Ok(report)
}

async fn verify_locales(config: &Config, session: &BrowserSession) -> Result<RunReport> {
    let mut screenshots = Vec::with_capacity(HOMEPAGE_CHECKS.len());

    for check in &HOMEPAGE_CHECKS {
        let url = check.url(&config.server.base_url);
        let path = check.screenshot_path(&config.output_dir);

        info!(locale = check.locale, url, "Verifying locale");
        session.goto(&url).await?;
        session
            .wait_for_heading(check.locale, check.heading, config.browser.heading_timeout_ms)
            .await?;
        session.save_screenshot(&path).await?;

        screenshots.push(path);
    }

    Ok(RunReport { screenshots })
}

#[cfg(test)]
mod tests {
    use super::*;

    use localecheck_core::config::ServerConfig;
    use localecheck_core::error::VerifyError;

    #[tokio::test]
    async fn test_unreachable_server_aborts_before_browser_work() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let output_dir = tempfile::tempdir().unwrap();

        let config = Config {
            server: ServerConfig {
                base_url: format!("http://127.0.0.1:{port}"),
                startup_deadline_ms: 300,
                poll_interval_ms: 100,
            },
            output_dir: output_dir.path().join("shots"),
            ..Config::default()
        };

        let err = run(&config).await.unwrap_err();
        assert!(matches!(err, VerifyError::ServerUnreachable { .. }));

        // No screenshots, no output directory: the run failed up front.
        assert!(!config.output_dir.exists());
    }
}
