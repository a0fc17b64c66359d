//! Settings for `template store list`.

use std::env::VarError;

use super::{ALL_PLATFORMS, DEFAULT_TEMPLATES_STORE, TEMPLATE_STORE_URL_ENV};

/// Pick the store URL: `flag` if non-empty, else `env` if non-empty, else `default`.
pub fn resolve_store_url<'a>(flag: &'a str, env: &'a str, default: &'a str) -> &'a str {
    if !flag.is_empty() {
        flag
    } else if !env.is_empty() {
        env
    } else {
        default
    }
}

/// Everything the list command needs, resolved once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreListConfig {
    /// URL the request is sent to.
    pub store_url: String,
    /// URL as given on the command line (or the default), used in
    /// empty-body diagnostics.
    pub configured_url: String,
    /// Platform filter, or [`ALL_PLATFORMS`].
    pub platform: String,
    /// Show language and platform columns.
    pub verbose: bool,
}

impl Default for StoreListConfig {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_TEMPLATES_STORE.to_string(),
            configured_url: DEFAULT_TEMPLATES_STORE.to_string(),
            platform: ALL_PLATFORMS.to_string(),
            verbose: false,
        }
    }
}

impl StoreListConfig {
    /// Resolve settings using the real process environment.
    pub fn from_env(url_flag: Option<&str>, platform: &str, verbose: bool) -> Self {
        Self::from_env_with(url_flag, platform, verbose, |key: &str| std::env::var(key))
    }

    /// Resolve settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(
        url_flag: Option<&str>,
        platform: &str,
        verbose: bool,
        env_fn: F,
    ) -> Self
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let flag = url_flag.unwrap_or_default();
        let env = env_fn(TEMPLATE_STORE_URL_ENV).unwrap_or_default();
        let store_url = resolve_store_url(flag, &env, DEFAULT_TEMPLATES_STORE).to_string();

        tracing::debug!("Resolved template store URL: {}", store_url);

        let configured_url = if flag.is_empty() {
            DEFAULT_TEMPLATES_STORE
        } else {
            flag
        };

        Self {
            store_url,
            configured_url: configured_url.to_string(),
            platform: platform.to_string(),
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAG: &str = "https://flag.example.com/templates.json";
    const ENV: &str = "https://env.example.com/templates.json";

    fn env_with(value: &'static str) -> impl Fn(&str) -> Result<String, VarError> {
        move |key: &str| {
            if key == TEMPLATE_STORE_URL_ENV {
                Ok(value.to_string())
            } else {
                Err(VarError::NotPresent)
            }
        }
    }

    fn no_env(_: &str) -> Result<String, VarError> {
        Err(VarError::NotPresent)
    }

    #[test]
    fn flag_beats_env_and_default() {
        assert_eq!(resolve_store_url(FLAG, ENV, DEFAULT_TEMPLATES_STORE), FLAG);
    }

    #[test]
    fn env_beats_default() {
        assert_eq!(resolve_store_url("", ENV, DEFAULT_TEMPLATES_STORE), ENV);
    }

    #[test]
    fn default_when_nothing_set() {
        assert_eq!(
            resolve_store_url("", "", DEFAULT_TEMPLATES_STORE),
            DEFAULT_TEMPLATES_STORE
        );
    }

    #[test]
    fn config_prefers_flag_over_env() {
        let config =
            StoreListConfig::from_env_with(Some(FLAG), ALL_PLATFORMS, false, env_with(ENV));
        assert_eq!(config.store_url, FLAG);
        assert_eq!(config.configured_url, FLAG);
    }

    #[test]
    fn config_uses_env_without_flag() {
        let config = StoreListConfig::from_env_with(None, ALL_PLATFORMS, false, env_with(ENV));
        assert_eq!(config.store_url, ENV);
        assert_eq!(config.configured_url, DEFAULT_TEMPLATES_STORE);
    }

    #[test]
    fn config_ignores_empty_env() {
        let config = StoreListConfig::from_env_with(None, ALL_PLATFORMS, false, env_with(""));
        assert_eq!(config.store_url, DEFAULT_TEMPLATES_STORE);
    }

    #[test]
    fn config_treats_empty_flag_as_unset() {
        let config = StoreListConfig::from_env_with(Some(""), "arm64", true, env_with(ENV));
        assert_eq!(config.store_url, ENV);
        assert_eq!(config.platform, "arm64");
        assert!(config.verbose);
    }

    #[test]
    fn config_falls_back_to_default() {
        let config = StoreListConfig::from_env_with(None, ALL_PLATFORMS, false, no_env);
        assert_eq!(config, StoreListConfig::default());
    }
}
