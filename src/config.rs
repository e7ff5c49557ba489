use anyhow::{Context, Result, bail};
use std::env;
use std::time::Duration;

use crate::client::UPS_TRACKING_URL;
use crate::transport::DEFAULT_TIMEOUT;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    pub access_key: String,
    pub tracking_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `UPS_USERNAME`: Required - UPS account user id
    /// - `UPS_PASSWORD`: Required - UPS account password
    /// - `UPS_ACCESS_KEY`: Required - UPS access license number
    /// - `UPS_TRACKING_URL`: Optional - Tracking endpoint (default: production)
    /// - `UPS_TIMEOUT_SECS`: Optional - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let username = required(&lookup, "UPS_USERNAME")?;
        let password = required(&lookup, "UPS_PASSWORD")?;
        let access_key = required(&lookup, "UPS_ACCESS_KEY")?;

        let tracking_url = lookup("UPS_TRACKING_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| UPS_TRACKING_URL.to_string());

        let timeout = match lookup("UPS_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("UPS_TIMEOUT_SECS is not a number: {}", secs))?;
                if secs == 0 {
                    bail!("UPS_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            username,
            password,
            access_key,
            tracking_url,
            timeout,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    let value = lookup(key).with_context(|| format!("{} not set", key))?;

    if value.trim().is_empty() {
        bail!("{} cannot be empty", key);
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::UPS_TEST_TRACKING_URL;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("UPS_USERNAME", "user"),
        ("UPS_PASSWORD", "pwd"),
        ("UPS_ACCESS_KEY", "key"),
    ];

    #[test]
    fn defaults_apply_to_optional_keys() {
        let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

        assert_eq!(config.username, "user");
        assert_eq!(config.tracking_url, UPS_TRACKING_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn optional_keys_override_defaults() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("UPS_TRACKING_URL", UPS_TEST_TRACKING_URL));
        vars.push(("UPS_TIMEOUT_SECS", "5"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.tracking_url, UPS_TEST_TRACKING_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn missing_credential_is_reported() {
        let err = Config::from_lookup(lookup(&CREDENTIALS[..2])).unwrap_err();

        assert_eq!(err.to_string(), "UPS_ACCESS_KEY not set");
    }

    #[test]
    fn blank_credential_is_rejected() {
        let mut vars = CREDENTIALS.to_vec();
        vars[1] = ("UPS_PASSWORD", "   ");

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();

        assert_eq!(err.to_string(), "UPS_PASSWORD cannot be empty");
    }

    #[test]
    fn bad_timeout_is_rejected() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("UPS_TIMEOUT_SECS", "soon"));

        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}
