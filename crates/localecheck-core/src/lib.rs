//! Core types, config, errors, and the locale check table for localecheck.

pub mod checks;
pub mod config;
pub mod error;
pub mod readiness;

pub use checks::{HOMEPAGE_CHECKS, LocaleCheck};
pub use config::Config;
pub use error::{Result, VerifyError};
