//! Configuration module
//!
//! This module provides the configuration structure for the admin tooling:
//! API endpoint, auth token, request timeout, upload limits, and the path of
//! the local session file.

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

// Common constants
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_FILE: &str = ".shopdesk-session.json";

/// The three raster image types accepted for catalog media uploads.
/// This is a usability filter; the backend re-validates on save.
pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Admin client configuration
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub api_url: String,
    /// Bearer token; overrides the session-store token when set
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub default_page_size: u32,
    pub max_upload_bytes: usize,
    pub session_path: PathBuf,
}

impl AdminConfig {
    /// Load configuration from the environment.
    ///
    /// SHOPDESK_API_URL, SHOPDESK_API_TOKEN, SHOPDESK_TIMEOUT_SECS,
    /// SHOPDESK_PAGE_SIZE, SHOPDESK_SESSION_PATH. Binaries load `.env` first.
    pub fn from_env() -> Result<Self, AppError> {
        let api_url = env::var("SHOPDESK_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_token = env::var("SHOPDESK_API_TOKEN").ok().filter(|t| !t.is_empty());

        let request_timeout_secs = parse_env("SHOPDESK_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let default_page_size = parse_env("SHOPDESK_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let max_upload_bytes = parse_env("SHOPDESK_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;

        let session_path = env::var("SHOPDESK_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_path());

        Ok(Self {
            api_url,
            api_token,
            request_timeout_secs,
            default_page_size,
            max_upload_bytes,
            session_path,
        })
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            session_path: default_session_path(),
        }
    }
}

fn default_session_path() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(DEFAULT_SESSION_FILE),
        Err(_) => PathBuf::from(DEFAULT_SESSION_FILE),
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("{} is not a valid value", name))),
        Err(_) => Ok(default),
    }
}
