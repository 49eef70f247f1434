//! Browser session — one Chromium instance, one page.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use localecheck_core::config::BrowserConfig as LaunchOptions;
use localecheck_core::error::{Result, VerifyError};

/// How often the heading probe re-runs while waiting for visibility.
const HEADING_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A launched Chromium instance with a single open page.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    event_loop: JoinHandle<()>,
}

/// Translate launch options into a chromiumoxide config.
fn cdp_config(options: &LaunchOptions) -> Result<BrowserConfig> {
    let mut builder = BrowserConfig::builder();
    if !options.headless {
        builder = builder.with_head();
    }
    if let Some(path) = &options.chrome_path {
        builder = builder.chrome_executable(path);
    }
    builder
        .build()
        .map_err(|e| VerifyError::Browser(format!("Invalid browser config: {e}")))
}

/// JS probe: is an h1-h6 with this text visible on the page?
///
/// Matching follows accessible-name semantics: internal whitespace is
/// collapsed and the comparison is trimmed and case-folded on both sides,
/// so headings rendered with line breaks or nested spans still match. The
/// heading string is JSON-escaped into the script.
fn heading_probe(heading: &str) -> String {
    let want = serde_json::to_string(heading).expect("string serialization is infallible");
    format!(
        r#"(() => {{
            const normalize = s => s.replace(/\s+/g, ' ').trim().toUpperCase();
            const want = normalize({want});
            const headings = document.querySelectorAll('h1,h2,h3,h4,h5,h6');
            return Array.from(headings).some(el => {{
                const text = normalize(el.textContent || '');
                return text === want && el.getClientRects().length > 0;
            }});
        }})()"#
    )
}

impl BrowserSession {
    /// Launch Chromium and open a blank page.
    ///
    /// The CDP event loop runs on a spawned task for the lifetime of the
    /// session; [`BrowserSession::close`] tears both down.
    pub async fn launch(options: &LaunchOptions) -> Result<Self> {
        let config = cdp_config(options)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| VerifyError::Browser(format!("Chromium launch failed: {e}")))?;

        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| VerifyError::Browser(format!("Failed to open page: {e}")))?;

        info!(headless = options.headless, "Chromium launched");
        Ok(Self {
            browser,
            page,
            event_loop,
        })
    }

    /// Navigate the page and wait for the navigation to settle.
    pub async fn goto(&self, url: &str) -> Result<()> {
        info!(url, "Navigating");
        self.page
            .goto(url)
            .await
            .map_err(|e| VerifyError::Browser(format!("Navigation to {url} failed: {e}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| VerifyError::Browser(format!("Navigation to {url} did not settle: {e}")))?;
        Ok(())
    }

    /// Wait until a heading with the given text is visible.
    ///
    /// Polls the page every 250ms up to `timeout_ms`. Probe failures while
    /// the page is still loading count as "not visible yet", not as errors.
    pub async fn wait_for_heading(
        &self,
        locale: &str,
        heading: &str,
        timeout_ms: u64,
    ) -> Result<()> {
        let probe = heading_probe(heading);
        let deadline = Duration::from_millis(timeout_ms);
        let started = Instant::now();

        loop {
            let visible = match self.page.evaluate(probe.as_str()).await {
                Ok(result) => result.into_value::<bool>().unwrap_or(false),
                Err(e) => {
                    debug!(locale, error = %e, "Heading probe failed, retrying");
                    false
                }
            };

            if visible {
                info!(
                    locale,
                    heading,
                    waited_ms = started.elapsed().as_millis() as u64,
                    "Heading visible"
                );
                return Ok(());
            }

            if started.elapsed() >= deadline {
                return Err(VerifyError::HeadingTimeout {
                    locale: locale.to_string(),
                    heading: heading.to_string(),
                    timeout_ms,
                });
            }
            tokio::time::sleep(HEADING_POLL_INTERVAL).await;
        }
    }

    /// Capture a full-page PNG, overwriting any existing file at `path`.
    pub async fn save_screenshot(&self, path: &Path) -> Result<()> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();

        let bytes = self
            .page
            .save_screenshot(params, path)
            .await
            .map_err(|e| {
                VerifyError::Browser(format!("Screenshot to {} failed: {e}", path.display()))
            })?;

        info!(path = %path.display(), bytes = bytes.len(), "Screenshot saved");
        Ok(())
    }

    /// Close the browser and reap the Chromium process.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| VerifyError::Browser(format!("Browser close failed: {e}")))?;
        let _ = self.browser.wait().await;
        self.event_loop.abort();
        debug!("Chromium closed");
        Ok(())
    }
}
