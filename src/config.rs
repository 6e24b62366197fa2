use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub const DEV_API_URI: &str = "http://localhost:8000";

/// Header sent outside development so tunnelled backends skip their
/// browser warning page.
pub const BYPASS_WARNING_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Detects the environment from `APP_ENV`
    pub fn detect() -> Self {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        match lookup("APP_ENV").as_deref() {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub api_uri: Url,
    /// Path prefix of the front end, prepended to every redirect target
    pub clt_mod: String,
    pub with_credentials: bool,
}

impl Config {
    /// Loads the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = Environment::from_lookup(&lookup);

        tracing::info!(
            "Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        let api_uri = Self::get_api_uri(environment, &lookup)?;
        let clt_mod = lookup("CLT_MOD")
            .map(|prefix| prefix.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        let with_credentials = lookup("API_CREDENTIALS")
            .is_none_or(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"));

        tracing::debug!("   API: {}", api_uri);
        tracing::debug!("   Prefix: {:?}", clt_mod);
        tracing::debug!("   Credentials: {}", with_credentials);

        Ok(Self {
            environment,
            api_uri,
            clt_mod,
            with_credentials,
        })
    }

    fn get_api_uri(
        environment: Environment,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Url> {
        let raw = match lookup("API_URI") {
            Some(uri) => uri,
            None if environment.is_production() => {
                anyhow::bail!("API_URI must be set in production");
            }
            None => {
                tracing::warn!("API_URI not set, using {DEV_API_URI}");
                DEV_API_URI.to_string()
            }
        };

        Url::parse(raw.trim()).with_context(|| format!("API_URI is not a valid URL: {raw}"))
    }

    /// Where unauthenticated or unauthorized visitors are sent
    pub fn landing_path(&self) -> String {
        format!("{}/", self.clt_mod)
    }

    /// Extra header attached to every request outside development
    pub fn bypass_warning(&self) -> Option<(&'static str, &'static str)> {
        (!self.environment.is_development()).then_some(BYPASS_WARNING_HEADER)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
