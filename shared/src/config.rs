use std::env;
use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ECHOURL_BIND is not a socket address: `{0}`")]
    InvalidBind(String),

    #[error("PUBLIC_ORIGIN is not a valid URL: `{0}`")]
    InvalidOrigin(String),
}

/// Runtime settings for the panel server, read from the environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub bind: SocketAddr,
    /// Origin used to fabricate short URLs. When unset, the request's Host
    /// header is used instead.
    pub public_origin: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("ECHOURL_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let public_origin = match lookup("PUBLIC_ORIGIN").filter(|v| !v.trim().is_empty()) {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                Url::parse(trimmed).map_err(|_| ConfigError::InvalidOrigin(raw.clone()))?;
                Some(trimmed.to_string())
            }
            None => None,
        };

        Ok(Self {
            bind,
            public_origin,
        })
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
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.bind.to_string(), DEFAULT_BIND);
        assert!(settings.public_origin.is_none());
    }

    #[test]
    fn origin_trailing_slash_is_stripped() {
        let settings =
            Settings::from_lookup(lookup_from(&[("PUBLIC_ORIGIN", "https://sho.rt/")])).unwrap();
        assert_eq!(settings.public_origin.as_deref(), Some("https://sho.rt"));
    }

    #[test]
    fn blank_origin_is_treated_as_unset() {
        let settings = Settings::from_lookup(lookup_from(&[("PUBLIC_ORIGIN", "  ")])).unwrap();
        assert!(settings.public_origin.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[("ECHOURL_BIND", "nope")])),
            Err(ConfigError::InvalidBind(_))
        ));
        assert!(matches!(
            Settings::from_lookup(lookup_from(&[("PUBLIC_ORIGIN", "sho.rt")])),
            Err(ConfigError::InvalidOrigin(_))
        ));
    }
}
