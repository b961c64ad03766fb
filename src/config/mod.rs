mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::{debug, warn};

/// Environment variable carrying the provider credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads configuration from `CONFIG_PATH` (default `config.yaml`) and applies
/// environment overrides. A missing file yields the built-in defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from_path(&config_path).await?;
    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    Ok(config)
}

pub async fn load_from_path(config_path: impl AsRef<Path>) -> Result<Config> {
    let config_path = config_path.as_ref();

    if !tokio::fs::try_exists(config_path).await? {
        warn!(
            "Config file {} not found, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path.display());

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Overrides file values with `GEMINI_API_KEY`, `LLM_MODEL`, `HOST` and `PORT`.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup(API_KEY_ENV) {
        config.llm.api_key = Some(api_key);
    }

    if let Some(model) = lookup("LLM_MODEL") {
        config.llm.model = model;
    }

    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }

    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.llm.model, "gemini-flash-latest");
        assert_eq!(config.llm.candidate_models.len(), 8);
        assert!(config.llm.credential().is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.llm.base_url,
            "https://generativelanguage.googleapis.com/v1beta/openai"
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            lookup_from(&[
                ("GEMINI_API_KEY", "secret"),
                ("LLM_MODEL", "gemini-pro"),
                ("PORT", "8081"),
            ]),
        )
        .unwrap();

        assert_eq!(config.llm.credential(), Some("secret"));
        assert_eq!(config.llm.model, "gemini-pro");
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = Config::default();
        let result = apply_env_overrides(&mut config, lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_blank_credential_is_disabled() {
        let mut config = Config::default();
        config.llm.api_key = Some("   ".to_string());
        assert!(config.llm.credential().is_none());
    }
}
