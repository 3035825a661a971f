//! Env-driven configuration for the pipeline.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. All four credentials are required and construction fails
//! with a typed error before any network call if one is absent.
use crate::error::{AppError, AppResult};
use std::env;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const LINKEDIN_API_URL: &str = "https://api.linkedin.com/v2";
/// Written into the working directory and overwritten on each run.
pub const IMAGE_OUTPUT_PATH: &str = "generated_image.png";

#[derive(Debug)]
pub struct Config {
    pub openai_api_key: String,
    pub linkedin_access_token: String,
    pub linkedin_user_id: String,
    pub notification_email: String,
    pub openai_base_url: String,
    pub linkedin_base_url: String,
    pub image_output_path: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        Ok(Config {
            openai_api_key: require("OPENAI_API_KEY")?,
            linkedin_access_token: require("LINKEDIN_ACCESS_TOKEN")?,
            linkedin_user_id: require("LINKEDIN_USER_ID")?,
            notification_email: require("NOTIFICATION_EMAIL")?,
            openai_base_url: OPENAI_API_URL.to_string(),
            linkedin_base_url: LINKEDIN_API_URL.to_string(),
            image_output_path: IMAGE_OUTPUT_PATH.to_string(),
        })
    }

    /// Print which credentials are present. Values stay redacted.
    pub fn print_env_vars() {
        println!("OPENAI_API_KEY: {}", redact(env::var("OPENAI_API_KEY").ok()));
        println!("LINKEDIN_ACCESS_TOKEN: {}", redact(env::var("LINKEDIN_ACCESS_TOKEN").ok()));
        println!("LINKEDIN_USER_ID: {}", redact(env::var("LINKEDIN_USER_ID").ok()));
        println!("NOTIFICATION_EMAIL: {}", env::var("NOTIFICATION_EMAIL").unwrap_or_else(|_| "<unset>".to_string()));
    }
}

fn require(name: &'static str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::MissingEnv(name))
}

fn redact(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("<set, {} chars>", v.len()),
        _ => "<unset>".to_string(),
    }
}
