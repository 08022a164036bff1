//! Process configuration, read once at startup.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` — Gemini API key (falls back to `GOOGLE_API_KEY`)
//! - `GEMINI_MODEL` — Model name (default: `gemini-2.5-flash-lite`)
//! - `GEMINI_API_BASE` — API base URL (default: public v1beta endpoint)
//! - `HOST` — Bind address (default: `0.0.0.0`)
//! - `PORT` — HTTP port (default: 5000)
//! - `TEMPLATE_DIR` — Directory holding `chatbot.html` (default: `templates`)
//!
//! A `.env` file in the working directory is loaded first when present.
//! A missing file is fine; an unreadable or malformed one is an error.

use std::collections::HashMap;

use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT '{0}': expected an integer between 0 and 65535")]
    InvalidPort(String),

    #[error("Failed to load .env file: {0}")]
    DotEnv(String),
}

/// Accept a missing `.env`, surface every other load failure.
fn check_dotenv<T>(result: dotenvy::Result<T>) -> Result<(), ConfigError> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::DotEnv(e.to_string())),
    }
}

/// Everything the relay needs from its environment.
///
/// Built at process entry and handed to the components that need it; nothing
/// downstream reads the environment itself.
#[derive(Clone)]
pub struct RelayConfig {
    /// Gemini API key. A missing key is not an error here; the first
    /// generative call fails instead.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub host: String,
    pub port: u16,
    pub template_dir: String,
}

impl RelayConfig {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_process_env()
    }

    /// Build from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| vars.get(name).cloned())
    }

    // Only the variables we use are read, so unrelated non-UTF-8 entries
    // in the environment are never decoded.
    fn from_process_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("GOOGLE_API_KEY")),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            template_dir: get("TEMPLATE_DIR").unwrap_or_else(|| DEFAULT_TEMPLATE_DIR.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            template_dir: DEFAULT_TEMPLATE_DIR.to_string(),
        }
    }
}

// Keep the key out of logs.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("template_dir", &self.template_dir)
            .finish()
    }
}
