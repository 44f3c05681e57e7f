//! PromisePay environment definitions.
//!
//! This module provides the [`Environment`] enum selecting which PromisePay
//! deployment requests are sent to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// PromisePay deployment environment.
///
/// Marketplaces integrate against `Prelive` and switch to `Production`
/// when going live.
///
/// # Example
///
/// ```rust
/// use promisepay::Environment;
///
/// let env: Environment = "production".parse().unwrap();
/// assert_eq!(env, Environment::Production);
/// assert_eq!(env.default_base_url(), "https://secure.api.promisepay.com");
///
/// assert_eq!(Environment::default().to_string(), "prelive");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// The pre-live (test) deployment.
    #[default]
    Prelive,
    /// The production deployment.
    Production,
}

impl Environment {
    /// Returns the default base URL for this environment.
    #[must_use]
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Prelive => "https://test.api.promisepay.com",
            Self::Production => "https://secure.api.promisepay.com",
        }
    }

    /// Returns `true` for the production deployment.
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prelive => write!(f, "prelive"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prelive" | "test" => Ok(Self::Prelive),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment {
                environment: s.to_string(),
            }),
        }
    }
}
