//! Walkthrough configuration.
//!
//! Settings come from environment variables. Every setting has a default,
//! so an unset variable is never an error; a set but malformed one is.
//!
//! - `WALKTHROUGH_COUNT`: number of counting steps (default: 42)
//! - `WALKTHROUGH_START`: the pair of numbers added by the logged addition,
//!   written `a,b` (default: `3,4`)

use std::env;

use thiserror::Error;

const COUNT_KEY: &str = "WALKTHROUGH_COUNT";
const START_KEY: &str = "WALKTHROUGH_START";

/// A malformed configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid value for {key}: {message}")]
pub struct ConfigError {
    /// The name of the environment variable.
    pub key: String,
    /// Description of why the value is invalid.
    pub message: String,
}

impl ConfigError {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Settings for one run of the walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Number of steps the counting Writer takes.
    pub count: u32,
    /// Numbers added by the logged addition.
    pub start: (i32, i32),
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            count: 42,
            start: (3, 4),
        }
    }
}

impl WalkthroughConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to a malformed value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration from `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to a malformed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use walkthrough::WalkthroughConfig;
    ///
    /// let config = WalkthroughConfig::from_lookup(|key| {
    ///     (key == "WALKTHROUGH_COUNT").then(|| "7".to_string())
    /// })
    /// .unwrap();
    /// assert_eq!(config.count, 7);
    /// assert_eq!(config.start, (3, 4));
    /// ```
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let count = lookup(COUNT_KEY)
            .map_or(Ok(defaults.count), |value| parse_count(&value))?;
        let start = lookup(START_KEY)
            .map_or(Ok(defaults.start), |value| parse_start(&value))?;

        Ok(Self { count, start })
    }
}

fn parse_count(value: &str) -> Result<u32, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|error| ConfigError::new(COUNT_KEY, format!("{error}")))
}

fn parse_start(value: &str) -> Result<(i32, i32), ConfigError> {
    let (first, second) = value
        .split_once(',')
        .ok_or_else(|| ConfigError::new(START_KEY, "expected two numbers separated by ','"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|error| ConfigError::new(START_KEY, format!("{error}")))
    };

    Ok((parse(first)?, parse(second)?))
}
