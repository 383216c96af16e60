use std::path::PathBuf;

use thiserror::Error;

/// Startup problems; always fatal, reported before any network call.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Missing required setting {name} (set the {env} environment variable)")]
    MissingValue { name: &'static str, env: &'static str },

    #[error("Invalid value for {name}: \"{input}\"")]
    InvalidValue { name: &'static str, input: String },

    #[error("Failed to read config file {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("Incomplete SMTP settings: {missing} must be set when any SMTP setting is given")]
    PartialSmtp { missing: &'static str },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid SMTP settings: {message}")]
    Smtp { message: String },
}

/// A mail relay that cannot be set up is a configuration problem, not a
/// delivery failure.
impl From<NotifyError> for ConfigError {
    fn from(e: NotifyError) -> Self {
        match e {
            NotifyError::Address { input } => ConfigError::InvalidValue {
                name: "email address",
                input,
            },
            other => ConfigError::Smtp {
                message: other.to_string(),
            },
        }
    }
}

/// Failure reaching or decoding the project listing; aborts the run.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Pagination loop: {url} was already fetched in this run")]
    PaginationLoop { url: String },
}

/// Failure renaming a single project; recorded and never propagated.
#[derive(Debug, Error)]
pub(crate) enum UpdateError {
    #[error("Rename of project {uid} failed: {source}")]
    Transport {
        uid: String,
        #[source]
        source: ureq::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum NotifyError {
    #[error("Invalid email address \"{input}\"")]
    Address { input: String },

    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("Cannot write run log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write run log row: {0}")]
    Csv(#[from] csv::Error),
}
