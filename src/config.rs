use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the fyfe.io zone API.
#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds a config from any key lookup shaped like `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let var = |key: &str| match lookup(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(e),
        };

        Ok(Config {
            api_url: var("FYFE_API_URL")?.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: var("FYFE_API_TOKEN")?.filter(|token| !token.is_empty()),
            timeout: Duration::from_secs(
                var("FYFE_TIMEOUT")?
                    .and_then(|secs| secs.parse().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT.as_secs()),
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<REDACTED>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Result<String, env::VarError> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.api_token, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup(&[
            ("FYFE_API_URL", "https://api.fyfe.io"),
            ("FYFE_API_TOKEN", "secret"),
            ("FYFE_TIMEOUT", "5"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.fyfe.io");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout_falls_back() {
        let config = Config::from_lookup(lookup(&[("FYFE_TIMEOUT", "soon")])).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_zero_timeout_falls_back() {
        let config = Config::from_lookup(lookup(&[("FYFE_TIMEOUT", "0")])).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_empty_token_is_none() {
        let config = Config::from_lookup(lookup(&[("FYFE_API_TOKEN", "")])).unwrap();
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn test_non_unicode_is_error() {
        let result = Config::from_lookup(|key| {
            if key == "FYFE_API_TOKEN" {
                Err(env::VarError::NotUnicode("\u{fffd}".into()))
            } else {
                Err(env::VarError::NotPresent)
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = Config::new("http://dns.internal").with_token("hunter2");
        let printed = format!("{config:?}");
        assert!(printed.contains("<REDACTED>"));
        assert!(!printed.contains("hunter2"));
    }
}
