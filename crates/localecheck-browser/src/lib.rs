//! CDP browser automation for localecheck.
//!
//! One headless Chromium instance, one page, driven over the Chrome DevTools
//! Protocol. Requires Chrome/Chromium installed.

pub mod session;

pub use session::BrowserSession;
