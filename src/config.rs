//! Run configuration
//!
//! Values come from, in order of precedence: CLI flags, environment
//! variables, an optional TOML config file, built-in defaults. Everything
//! is resolved once into [`Settings`] before the run starts; pipeline code
//! never looks at the environment.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::consts::{
    DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_SMTP_PORT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TITLE_FILTER,
};
use crate::error::ConfigError;
use crate::utils::Timezone;

pub(crate) const ENV_TOKEN: &str = "KOBO_TOKEN";
pub(crate) const ENV_API_URL: &str = "KOBO_API_URL";
pub(crate) const ENV_TITLE_FILTER: &str = "KOBO_TITLE_FILTER";
pub(crate) const ENV_LOG_FILE: &str = "KOBO_LOG_FILE";
pub(crate) const ENV_TIMEOUT_SECS: &str = "KOBO_TIMEOUT_SECS";
pub(crate) const ENV_TIMEZONE: &str = "KOBO_TIMEZONE";
pub(crate) const ENV_SMTP_HOST: &str = "SMTP_HOST";
pub(crate) const ENV_SMTP_PORT: &str = "SMTP_PORT";
pub(crate) const ENV_SMTP_USERNAME: &str = "SMTP_USERNAME";
pub(crate) const ENV_SMTP_PASSWORD: &str = "SMTP_PASSWORD";
pub(crate) const ENV_EMAIL_FROM: &str = "EMAIL_FROM";
pub(crate) const ENV_EMAIL_TO: &str = "EMAIL_TO";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SmtpConfig {
    #[serde(default)]
    pub(crate) host: Option<String>,
    #[serde(default)]
    pub(crate) port: Option<u16>,
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) password: Option<String>,
    #[serde(default)]
    pub(crate) from: Option<String>,
    #[serde(default)]
    pub(crate) to: Option<Vec<String>>,
}

/// Contents of the optional TOML config file
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) token: Option<String>,
    #[serde(default)]
    pub(crate) api_url: Option<String>,
    #[serde(default)]
    pub(crate) title_filter: Option<String>,
    #[serde(default)]
    pub(crate) log_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) dry_run: bool,
    #[serde(default)]
    pub(crate) smtp: SmtpConfig,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit path must exist and parse. Otherwise the first readable
    /// default location is used; a broken default file is skipped with a
    /// warning.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::read(path);
        }

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::read(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config file");
                    return Ok(config);
                }
                Err(e) => tracing::warn!("{e}; ignoring"),
            }
        }

        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/kobo-verify/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("kobo-verify").join("config.toml"));
        }

        // 2. Platform config dir (e.g. macOS Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("kobo-verify").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.kobo-verify.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kobo-verify.toml"));
        }

        paths
    }
}

/// Outbound mail relay and recipients
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmailSettings {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) from: String,
    pub(crate) to: Vec<String>,
}

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) token: String,
    pub(crate) api_url: String,
    pub(crate) title_filter: String,
    pub(crate) log_file: PathBuf,
    pub(crate) timeout: Duration,
    pub(crate) timezone: Timezone,
    pub(crate) dry_run: bool,
    /// `None` disables notifications
    pub(crate) email: Option<EmailSettings>,
}

impl Settings {
    pub(crate) fn from_env(cli: &Cli, config: Config) -> Result<Self, ConfigError> {
        Self::resolve(cli, config, |key| std::env::var(key).ok())
    }

    pub(crate) fn resolve<F>(cli: &Cli, config: Config, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank environment values count as unset
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let token = env(ENV_TOKEN)
            .or(config.token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingValue {
                name: "API token",
                env: ENV_TOKEN,
            })?;

        let api_url = env(ENV_API_URL)
            .or(config.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let title_filter = cli
            .title_filter
            .clone()
            .or_else(|| env(ENV_TITLE_FILTER))
            .or(config.title_filter)
            .unwrap_or_else(|| DEFAULT_TITLE_FILTER.to_string());

        let log_file = cli
            .log_file
            .clone()
            .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from))
            .or(config.log_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let timeout_secs = match env(ENV_TIMEOUT_SECS) {
            Some(raw) => parse_number(&raw, "HTTP timeout")?,
            None => config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let timezone_raw = cli
            .timezone
            .clone()
            .or_else(|| env(ENV_TIMEZONE))
            .or(config.timezone);
        let timezone = Timezone::parse(timezone_raw.as_deref())?;

        let email = if cli.no_email {
            None
        } else {
            resolve_email(config.smtp, &env)?
        };

        Ok(Self {
            token,
            api_url,
            title_filter,
            log_file,
            timeout: Duration::from_secs(timeout_secs),
            timezone,
            dry_run: cli.dry_run,
            email,
        })
    }
}

fn resolve_email<F>(smtp: SmtpConfig, env: &F) -> Result<Option<EmailSettings>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = env(ENV_SMTP_HOST).or(smtp.host);
    let username = env(ENV_SMTP_USERNAME).or(smtp.username);
    let password = env(ENV_SMTP_PASSWORD).or(smtp.password);
    let to = match env(ENV_EMAIL_TO) {
        Some(raw) => Some(split_recipients(&raw)),
        None => smtp.to,
    }
    .filter(|to| !to.is_empty());

    if host.is_none() && username.is_none() && password.is_none() && to.is_none() {
        return Ok(None);
    }

    let host = host.ok_or(ConfigError::PartialSmtp {
        missing: ENV_SMTP_HOST,
    })?;
    let username = username.ok_or(ConfigError::PartialSmtp {
        missing: ENV_SMTP_USERNAME,
    })?;
    let password = password.ok_or(ConfigError::PartialSmtp {
        missing: ENV_SMTP_PASSWORD,
    })?;
    let to = to.ok_or(ConfigError::PartialSmtp {
        missing: ENV_EMAIL_TO,
    })?;

    let port = match env(ENV_SMTP_PORT) {
        Some(raw) => parse_number(&raw, "SMTP port")?,
        None => smtp.port.unwrap_or(DEFAULT_SMTP_PORT),
    };
    let from = env(ENV_EMAIL_FROM)
        .or(smtp.from)
        .unwrap_or_else(|| username.clone());

    Ok(Some(EmailSettings {
        host,
        port,
        username,
        password,
        from,
        to,
    }))
}

fn split_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &'static str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        input: raw.to_string(),
    })
}
