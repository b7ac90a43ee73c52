use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials deliberately do NOT fail startup when missing: they
/// default to literal placeholder strings, so calls made with them fail
/// upstream and ride the fallback path instead of crashing the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub reed_api_key: String,
    pub usajobs_api_key: String,
    /// USAJobs requires a contact email in the User-Agent header.
    pub usajobs_user_agent: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            adzuna_app_id: env_or("ADZUNA_APP_ID", "YOUR_ADZUNA_APP_ID"),
            adzuna_app_key: env_or("ADZUNA_APP_KEY", "YOUR_ADZUNA_APP_KEY"),
            reed_api_key: env_or("REED_API_KEY", "YOUR_REED_API_KEY"),
            usajobs_api_key: env_or("USAJOBS_API_KEY", "YOUR_USAJOBS_API_KEY"),
            usajobs_user_agent: env_or("USAJOBS_USER_AGENT", "YOUR_EMAIL@example.com"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// True when a credential looks usable: non-empty and not one of the
/// literal `YOUR_*` placeholders that `from_env` substitutes.
pub fn credential_configured(value: &str) -> bool {
    !value.trim().is_empty() && !value.starts_with("YOUR_")
}
