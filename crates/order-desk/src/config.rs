//! Process configuration, read from environment variables (and `.env` via `dotenvy`).

use crate::model::Storefront;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Order desk configuration.
#[derive(Clone)]
pub struct Config {
    /// Customer channel credential.
    pub bot_token: String,
    /// Operator channel credential.
    pub admin_token: String,
    /// Number of session actors customers are spread across.
    pub session_shards: usize,
    /// Mailbox capacity of each session actor.
    pub session_mailbox: usize,
    pub storefront: Storefront,
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("admin_token", &"<redacted>")
            .field("session_shards", &self.session_shards)
            .field("session_mailbox", &self.session_mailbox)
            .field("storefront", &self.storefront)
            .finish()
    }
}

impl Config {
    pub const DEFAULT_SESSION_SHARDS: usize = 4;
    pub const DEFAULT_SESSION_MAILBOX: usize = 32;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Storefront::default();

        Ok(Self {
            bot_token: get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?,
            admin_token: get("ADMIN_TOKEN").ok_or(ConfigError::Missing("ADMIN_TOKEN"))?,
            session_shards: positive(
                "SESSION_SHARDS",
                get("SESSION_SHARDS"),
                Self::DEFAULT_SESSION_SHARDS,
            )?,
            session_mailbox: positive(
                "SESSION_MAILBOX",
                get("SESSION_MAILBOX"),
                Self::DEFAULT_SESSION_MAILBOX,
            )?,
            storefront: Storefront {
                name: get("STORE_NAME").unwrap_or(defaults.name),
                support_phone: get("SUPPORT_PHONE").unwrap_or(defaults.support_phone),
                currency: get("CURRENCY").unwrap_or(defaults.currency),
            },
        })
    }
}

fn positive(key: &'static str, value: Option<String>, default: usize) -> Result<usize, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            key,
            value,
            reason: "must be at least 1".to_string(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("BOT_TOKEN", "b"), ("ADMIN_TOKEN", "a")])).unwrap();
        assert_eq!(config.session_shards, 4);
        assert_eq!(config.session_mailbox, 32);
        assert_eq!(config.storefront, Storefront::default());
    }

    #[test]
    fn test_missing_or_empty_tokens() {
        let err = Config::from_lookup(lookup(&[("ADMIN_TOKEN", "a")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("BOT_TOKEN"));

        let err = Config::from_lookup(lookup(&[("BOT_TOKEN", "b"), ("ADMIN_TOKEN", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ADMIN_TOKEN"));
    }

    #[test]
    fn test_invalid_numbers() {
        let base = [("BOT_TOKEN", "b"), ("ADMIN_TOKEN", "a")];

        let mut pairs = base.to_vec();
        pairs.push(("SESSION_SHARDS", "0"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { key: "SESSION_SHARDS", .. })
        ));

        let mut pairs = base.to_vec();
        pairs.push(("SESSION_MAILBOX", "lots"));
        assert!(matches!(
            Config::from_lookup(lookup(&pairs)),
            Err(ConfigError::Invalid { key: "SESSION_MAILBOX", .. })
        ));
    }

    #[test]
    fn test_overrides_and_redaction() {
        let config = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "secret-bot"),
            ("ADMIN_TOKEN", "secret-admin"),
            ("SESSION_SHARDS", "8"),
            ("STORE_NAME", "Kana Foods Bole"),
            ("CURRENCY", "ETB"),
        ]))
        .unwrap();
        assert_eq!(config.session_shards, 8);
        assert_eq!(config.storefront.name, "Kana Foods Bole");
        assert_eq!(config.storefront.currency, "ETB");
        assert_eq!(config.storefront.support_phone, "+251 0986465604");

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
