//! Command-line flags. Each flag overrides the matching config file value.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AppConfig, ConfigError};

#[derive(Parser, Debug, Default)]
#[command(name = "firstrun")]
#[command(version)]
#[command(about = "First-run onboarding: sign up in the browser or bring your own API key")]
pub struct Cli {
    /// Config file (default: <config dir>/firstrun/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Settings file the API configuration is written to
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Sign-up page opened by "Get Started for Free"
    #[arg(long, value_name = "URL")]
    pub signup_url: Option<String>,
}

impl Cli {
    /// Load the config file named by `--config` (or the default one) and
    /// apply the remaining flags on top.
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        self.apply(base)
    }

    pub fn apply(&self, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(store) = &self.store {
            config.store.path = Some(store.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
        if let Some(url) = &self.signup_url {
            config.welcome.signup_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "firstrun",
            "--store",
            "/tmp/s.toml",
            "--signup-url",
            "https://example.com/join",
        ]);
        let config = cli.apply(AppConfig::default()).unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/tmp/s.toml"));
        assert_eq!(config.welcome.signup_url, "https://example.com/join");
    }

    #[test]
    fn bad_signup_url_flag_is_rejected() {
        let cli = Cli::parse_from(["firstrun", "--signup-url", "ftp://nope"]);
        assert!(matches!(
            cli.apply(AppConfig::default()),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
