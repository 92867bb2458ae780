//! Configuration file loading and bot token resolution

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tglogin_telemetry::TelemetryConfig;

/// Environment variable consulted for the bot token by default
pub const DEFAULT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Bot credentials section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Token stored directly in the file
    pub token: Option<String>,
    /// Name of the environment variable holding the token
    pub token_env: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

/// Parsed `tglogin.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot: BotConfig,
    pub logging: TelemetryConfig,
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let Some(p) = config_path else {
            return Ok(Self::default());
        };

        let mut config = load_config_file(&p)?;
        config.path = Some(p);
        Ok(config)
    }

    /// Resolve the bot token.
    ///
    /// Precedence: explicit flag, then the configured environment
    /// variable, then `bot.token` from the file. An empty value at any
    /// level counts as unset.
    pub fn resolve_token(&self, flag: Option<&str>) -> Result<String> {
        self.resolve_token_with(flag, |name| std::env::var(name).ok())
    }

    fn resolve_token_with(
        &self,
        flag: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<String> {
        let non_empty = |t: &String| !t.is_empty();
        let token = flag
            .map(String::from)
            .filter(non_empty)
            .or_else(|| env(&self.bot.token_env).filter(non_empty))
            .or_else(|| self.bot.token.clone().filter(non_empty));

        match token {
            Some(t) => Ok(t),
            None => bail!(
                "no bot token: pass --token, set {}, or add bot.token to tglogin.toml",
                self.bot.token_env
            ),
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".tglogin.toml", "tglogin.toml", ".config/tglogin.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.bot.token_env, DEFAULT_TOKEN_ENV);
        assert_eq!(config.logging, TelemetryConfig::default());
    }

    #[test]
    fn test_parse_full_file() {
        let config: Config = toml::from_str(
            r#"
            [bot]
            token = "from-file"
            token_env = "MY_BOT_TOKEN"

            [logging]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.bot.token.as_deref(), Some("from-file"));
        assert_eq!(config.bot.token_env, "MY_BOT_TOKEN");
        assert_eq!(config.logging.log_level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_token_precedence() {
        let mut config = Config::default();
        config.bot.token = Some("file".into());
        let env = |name: &str| (name == DEFAULT_TOKEN_ENV).then(|| "env".to_string());

        assert_eq!(config.resolve_token_with(Some("flag"), env).unwrap(), "flag");
        assert_eq!(config.resolve_token_with(None, env).unwrap(), "env");
        assert_eq!(config.resolve_token_with(None, no_env).unwrap(), "file");
    }

    #[test]
    fn test_custom_token_env() {
        let mut config = Config::default();
        config.bot.token_env = "OTHER".into();
        let env = |name: &str| (name == "OTHER").then(|| "other".to_string());

        assert_eq!(config.resolve_token_with(None, env).unwrap(), "other");
    }

    #[test]
    fn test_missing_token() {
        let err = Config::default().resolve_token_with(None, no_env).unwrap_err();
        assert!(err.to_string().contains(DEFAULT_TOKEN_ENV));
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert!(Config::default().resolve_token_with(Some(""), no_env).is_err());

        let mut config = Config::default();
        config.bot.token = Some(String::new());
        assert!(config.resolve_token_with(None, |_| Some(String::new())).is_err());
    }

    #[test]
    fn test_empty_env_falls_back_to_file() {
        let mut config = Config::default();
        config.bot.token = Some("file".into());

        assert_eq!(config.resolve_token_with(None, |_| Some(String::new())).unwrap(), "file");
    }

    #[test]
    fn test_empty_flag_falls_back_to_env() {
        let env = |_: &str| Some("env".to_string());
        assert_eq!(Config::default().resolve_token_with(Some(""), env).unwrap(), "env");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        assert!(Config::load(Some(Path::new("/nonexistent/tglogin.toml"))).is_err());
    }
}
