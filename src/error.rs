//! Common error type and result alias for the pipeline.
//!
//! Variants separate configuration problems from transport failures and
//! provider rejections so callers can tell them apart without string
//! matching.
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is absent at startup.
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),
    /// Transport-level failure from the HTTP client (connect, TLS, body read).
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),
    /// The provider answered, but with a non-success status or an unusable body.
    #[error("Provider error: {0}")]
    Provider(String),
    /// Local filesystem failure while persisting the generated image.
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}
