use std::time::Duration;

use crate::constants::{NWS_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Settings for talking to the NWS API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Base URL without trailing slash
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_base: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Builds a config from `NWS_API_BASE`, `NWS_USER_AGENT` and `NWS_TIMEOUT_SECS`,
    /// falling back to the defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup("NWS_API_BASE").filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(agent) = lookup("NWS_USER_AGENT").filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent.trim().to_string();
        }

        if let Some(raw) = lookup("NWS_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    value = %raw,
                    "Ignoring invalid NWS_TIMEOUT_SECS, using {}s",
                    REQUEST_TIMEOUT_SECS
                ),
            }
        }

        config
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = WeatherConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, WeatherConfig::default());
        assert_eq!(config.api_base, "https://api.weather.gov");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = WeatherConfig::from_lookup(lookup_from(&[
            ("NWS_API_BASE", "http://localhost:8080/"),
            ("NWS_USER_AGENT", "test-agent/2.0"),
            ("NWS_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.user_agent, "test-agent/2.0");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["0", "-3", "soon"] {
            let config = WeatherConfig::from_lookup(lookup_from(&[("NWS_TIMEOUT_SECS", raw)]));
            assert_eq!(config.timeout, Duration::from_secs(30), "value {raw}");
        }
    }
}
