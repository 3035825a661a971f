//! LinkedIn auto-post pipeline library
//!
//! Modules:
//! - `openai`: Thin client for the chat-completion and image-generation endpoints.
//! - `linkedin`: Client for the ugcPosts share endpoint.
//! - `notify`: Operator notification placeholder.
//! - `pipeline`: Sequential orchestration of a single run.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `OpenAiClient`,
//! `LinkedInClient`, and `Notifier`.
pub mod config;
pub mod error;
pub mod linkedin;
pub mod notify;
pub mod openai;
pub mod pipeline;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use linkedin::client::LinkedInClient;
pub use notify::Notifier;
pub use openai::client::OpenAiClient;
