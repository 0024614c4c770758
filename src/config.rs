//! Process configuration from the environment (and an optional `.env` file).

use crate::error::AppError;

pub const ENV_TOKEN: &str = "TOKEN_PROJECT_ACCESS_RW";
pub const ENV_ORG: &str = "GH_ORG_NAME";
/// Project *number* within the organization, despite the name.
pub const ENV_PROJECT_NUMBER: &str = "GH_PROJECT_ID";

/// Fallback names, consulted only when the primary variable is unset.
const TOKEN_ALIASES: &[&str] = &["GITHUB_TOKEN"];
const ORG_ALIASES: &[&str] = &["GITHUB_ORG"];
const PROJECT_NUMBER_ALIASES: &[&str] = &["GITHUB_PROJECT_NUMBER"];
pub const ENV_API_URL: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub org: String,
    pub project_number: u32,
    pub api_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("org", &self.org)
            .field("project_number", &self.project_number)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |key: &str, aliases: &[&str]| -> Result<String, AppError> {
            std::iter::once(key)
                .chain(aliases.iter().copied())
                .filter_map(&lookup)
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
                .ok_or_else(|| AppError::config(format!("Missing {key} in environment (.env).")))
        };

        let token = required(ENV_TOKEN, TOKEN_ALIASES)?;
        let org = required(ENV_ORG, ORG_ALIASES)?;
        let raw_number = required(ENV_PROJECT_NUMBER, PROJECT_NUMBER_ALIASES)?;
        let project_number = raw_number.parse::<u32>().map_err(|e| {
            AppError::config(format!("Invalid {ENV_PROJECT_NUMBER} '{raw_number}': {e}"))
        })?;
        let api_url = lookup(ENV_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            token,
            org,
            project_number,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::EXIT_CONFIG;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_required_values() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_TOKEN, "ghp_secret"),
            (ENV_ORG, "acme"),
            (ENV_PROJECT_NUMBER, " 7 "),
        ]))
        .unwrap();
        assert_eq!(config.org, "acme");
        assert_eq!(config.project_number, 7);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(!format!("{config:?}").contains("ghp_secret"));
    }

    #[test]
    fn each_missing_value_is_fatal() {
        let full = [
            (ENV_TOKEN, "t"),
            (ENV_ORG, "acme"),
            (ENV_PROJECT_NUMBER, "1"),
        ];
        for skip in 0..full.len() {
            let partial: Vec<_> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, p)| *p)
                .collect();
            let err = Config::from_lookup(lookup_from(&partial)).unwrap_err();
            assert_eq!(err.exit_code(), EXIT_CONFIG);
            assert!(err.to_string().contains(full[skip].0), "{err}");
        }
    }

    #[test]
    fn blank_and_malformed_values_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            (ENV_TOKEN, "  "),
            (ENV_ORG, "acme"),
            (ENV_PROJECT_NUMBER, "1"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(ENV_TOKEN));

        let err = Config::from_lookup(lookup_from(&[
            (ENV_TOKEN, "t"),
            (ENV_ORG, "acme"),
            (ENV_PROJECT_NUMBER, "seven"),
        ]))
        .unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CONFIG);
    }

    #[test]
    fn aliases_fill_in_for_unset_names() {
        let config = Config::from_lookup(lookup_from(&[
            ("GITHUB_TOKEN", "t"),
            ("GITHUB_ORG", "acme"),
            ("GITHUB_PROJECT_NUMBER", "4"),
        ]))
        .unwrap();
        assert_eq!(config.org, "acme");
        assert_eq!(config.project_number, 4);

        let config = Config::from_lookup(lookup_from(&[
            ("TOKEN_PROJECT_ACCESS_RW", "primary"),
            ("GITHUB_TOKEN", "fallback"),
            ("GH_ORG_NAME", "acme"),
            ("GITHUB_ORG", "other"),
            ("GH_PROJECT_ID", "9"),
            ("GITHUB_PROJECT_NUMBER", ""),
        ]))
        .unwrap();
        assert_eq!(config.token, "primary");
        assert_eq!(config.org, "acme");
        assert_eq!(config.project_number, 9);
    }

    #[test]
    fn api_url_override() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_TOKEN, "t"),
            (ENV_ORG, "acme"),
            (ENV_PROJECT_NUMBER, "1"),
            (ENV_API_URL, "https://ghe.example.com/api/graphql"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api/graphql");
    }
}
