//! The homepage locale checks.
//!
//! One entry per supported verification locale: the URL path segment, the
//! hero heading expected to be visible in that translation, and the
//! screenshot filename. The table is fixed; the runner walks it in order.

use std::path::{Path, PathBuf};

/// A single locale verification: navigate, assert heading, screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCheck {
    /// URL path segment selecting the page translation.
    pub locale: &'static str,
    /// Hero heading text expected to become visible.
    pub heading: &'static str,
    /// Screenshot filename inside the output directory.
    pub screenshot: &'static str,
}

/// The three homepage checks, run in this order.
pub const HOMEPAGE_CHECKS: [LocaleCheck; 3] = [
    LocaleCheck {
        locale: "de",
        heading: "WIR PFLEGEN MIT HERZ UND VERSTAND",
        screenshot: "screenshot_de.png",
    },
    LocaleCheck {
        locale: "en",
        heading: "WE CARE WITH HEART AND MIND",
        screenshot: "screenshot_en.png",
    },
    LocaleCheck {
        locale: "tr",
        heading: "KALP VE AKILLA BAKIM YAPIYORUZ",
        screenshot: "screenshot_tr.png",
    },
];

impl LocaleCheck {
    /// Full page URL for this locale.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.locale)
    }

    /// Screenshot destination inside `output_dir`.
    pub fn screenshot_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.screenshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_checks_in_locale_order() {
        let locales: Vec<&str> = HOMEPAGE_CHECKS.iter().map(|c| c.locale).collect();
        assert_eq!(locales, ["de", "en", "tr"]);
    }

    #[test]
    fn test_headings() {
        assert_eq!(HOMEPAGE_CHECKS[0].heading, "WIR PFLEGEN MIT HERZ UND VERSTAND");
        assert_eq!(HOMEPAGE_CHECKS[1].heading, "WE CARE WITH HEART AND MIND");
        assert_eq!(HOMEPAGE_CHECKS[2].heading, "KALP VE AKILLA BAKIM YAPIYORUZ");
    }

    #[test]
    fn test_url_joins_locale_segment() {
        let check = HOMEPAGE_CHECKS[0];
        assert_eq!(check.url("http://localhost:3000"), "http://localhost:3000/de");
        // Trailing slash on the base must not double up.
        assert_eq!(check.url("http://localhost:3000/"), "http://localhost:3000/de");
    }

    #[test]
    fn test_screenshot_paths() {
        let dir = Path::new("jules-scratch/verification");
        for check in &HOMEPAGE_CHECKS {
            let path = check.screenshot_path(dir);
            assert!(path.starts_with(dir));
            assert_eq!(
                path.extension().and_then(|e| e.to_str()),
                Some("png"),
                "screenshot for {} must be a png",
                check.locale
            );
        }
    }
}
