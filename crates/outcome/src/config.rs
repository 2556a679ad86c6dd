//! HTTP boundary configuration.

use std::env;
use std::str::FromStr;

/// Environment variable selecting the runtime environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Message sent to clients for unhandled panics outside development.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Runtime environment. Controls how much detail unhandled failures reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "production" | "prod" | "staging" => Ok(Environment::Production),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

/// Settings for the result-rendering HTTP boundary.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    pub environment: Environment,
}

impl HttpConfig {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Load from `APP_ENV`.
    ///
    /// Falls back to `Development` in debug builds and `Production` otherwise
    /// when the variable is missing or unrecognized.
    pub fn from_env() -> Self {
        let fallback = if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        };

        let environment = match env::var(APP_ENV_VAR) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!("{err}, using {fallback:?}");
                fallback
            }),
            Err(_) => fallback,
        };

        Self { environment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("Development".parse(), Ok(Environment::Development));
        assert_eq!("prod".parse(), Ok(Environment::Production));
        assert!("moon".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_is_production() {
        assert_eq!(HttpConfig::default().environment, Environment::Production);
        assert!(!Environment::default().is_development());
    }
}
