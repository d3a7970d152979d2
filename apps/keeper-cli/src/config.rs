//! Shell configuration read from the environment

use tracing::{info, warn};

/// Page size used when a list command gives no usable `--limit`
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound applied to any `--limit`
pub const MAX_LIMIT: u32 = 100;

const DEFAULT_PROMPT: &str = "keeper> ";

/// Runtime configuration of the shell
///
/// | Variable | Default |
/// |---|---|
/// | `KEEPER_DEFAULT_LIMIT` | 20 |
/// | `KEEPER_MAX_LIMIT` | 100 |
/// | `KEEPER_PROMPT` | `keeper> ` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_limit: u32,
    pub max_limit: u32,
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    ///
    /// Unparseable or zero limits fall back to their defaults. A default
    /// limit larger than the maximum is lowered to the maximum.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_limit = read_limit(&lookup, "KEEPER_MAX_LIMIT", defaults.max_limit);
        let mut default_limit =
            read_limit(&lookup, "KEEPER_DEFAULT_LIMIT", defaults.default_limit);
        if default_limit > max_limit {
            warn!(
                default_limit,
                max_limit, "KEEPER_DEFAULT_LIMIT exceeds KEEPER_MAX_LIMIT, lowering it"
            );
            default_limit = max_limit;
        }

        let prompt = lookup("KEEPER_PROMPT").unwrap_or(defaults.prompt);

        info!(default_limit, max_limit, "Configuration loaded");
        Self {
            default_limit,
            max_limit,
            prompt,
        }
    }
}

fn read_limit(lookup: &impl Fn(&str) -> Option<String>, key: &str, fallback: u32) -> u32 {
    let Some(raw) = lookup(key) else {
        return fallback;
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(key, value = %raw, fallback, "Ignoring invalid limit");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup_from(&[])), AppConfig::default());
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("KEEPER_DEFAULT_LIMIT", "5"),
            ("KEEPER_MAX_LIMIT", "50"),
            ("KEEPER_PROMPT", "> "),
        ]));

        assert_eq!(config.default_limit, 5);
        assert_eq!(config.max_limit, 50);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("KEEPER_DEFAULT_LIMIT", "zero"),
            ("KEEPER_MAX_LIMIT", "0"),
        ]));

        assert_eq!(config.default_limit, DEFAULT_LIMIT);
        assert_eq!(config.max_limit, MAX_LIMIT);
    }

    #[test]
    fn test_default_limit_is_capped_by_max() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("KEEPER_DEFAULT_LIMIT", "80"),
            ("KEEPER_MAX_LIMIT", "30"),
        ]));

        assert_eq!(config.default_limit, 30);
    }
}
