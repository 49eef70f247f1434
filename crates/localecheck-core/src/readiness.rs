//! Dev-server readiness probe.
//!
//! The server under verification is started externally (`next dev` or
//! similar) and may still be compiling when localecheck launches. Instead of
//! sleeping a fixed duration and hoping, poll the base URL until it answers
//! anything over HTTP, bounded by the startup deadline.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::{Result, VerifyError};

/// Wait until the server answers an HTTP request at its base URL.
///
/// Any response counts as ready; we only need the socket accepting and the
/// HTTP layer up, the per-locale checks do the real assertions. Fails with
/// [`VerifyError::ServerUnreachable`] once `startup_deadline_ms` has elapsed.
pub async fn wait_for_server(server: &ServerConfig) -> Result<()> {
    let deadline = Duration::from_millis(server.startup_deadline_ms);
    let interval = Duration::from_millis(server.poll_interval_ms);
    let started = Instant::now();

    let client = reqwest::Client::builder()
        .timeout(interval.max(Duration::from_millis(250)))
        .build()
        .map_err(anyhow::Error::from)?;

    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match client.get(&server.base_url).send().await {
            Ok(resp) => {
                info!(
                    url = %server.base_url,
                    status = %resp.status(),
                    waited_ms = started.elapsed().as_millis() as u64,
                    "Server ready"
                );
                return Ok(());
            }
            Err(e) => {
                debug!(attempt, error = %e, "Server not ready yet");
            }
        }

        if started.elapsed() >= deadline {
            return Err(VerifyError::ServerUnreachable {
                url: server.base_url.clone(),
                waited_ms: started.elapsed().as_millis() as u64,
            });
        }
        tokio::time::sleep(interval).await;
    }
}
