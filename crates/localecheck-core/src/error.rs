use thiserror::Error;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Server not reachable at {url} after {waited_ms}ms")]
    ServerUnreachable { url: String, waited_ms: u64 },

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Heading \"{heading}\" not visible on /{locale} within {timeout_ms}ms")]
    HeadingTimeout {
        locale: String,
        heading: String,
        timeout_ms: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VerifyError>;
