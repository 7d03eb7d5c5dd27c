//! Deployment profile and log output settings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deployment profile, read from `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    /// Automated test runs
    Testing,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    /// `APP_ENV` (or `ENVIRONMENT`); unknown values fall back to development
    pub fn from_env() -> Self {
        ["APP_ENV", "ENVIRONMENT"]
            .iter()
            .find_map(|key| std::env::var(key).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Testing => "testing",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown APP_ENV value '{}'", other)),
        }
    }
}

/// Log filter and output format for the tracing subscriber
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,

    /// One JSON object per line instead of the pretty formatter
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::Development)
    }
}

impl LoggingConfig {
    pub fn for_environment(env: Environment) -> Self {
        let (level, json) = match env {
            Environment::Development => ("debug,sqlx=warn", false),
            Environment::Testing => ("warn", false),
            Environment::Production => ("info,sqlx=warn", true),
        };
        Self {
            level: level.to_string(),
            json,
        }
    }

    /// Profile defaults overridden by `LOG_LEVEL` and `LOG_FORMAT=json|text`
    pub fn from_env(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.level = level;
        }
        match std::env::var("LOG_FORMAT").as_deref() {
            Ok("json") => config.json = true,
            Ok("text") => config.json = false,
            _ => {}
        }
        config
    }
}
