use eqviz_client::{ClientError, Route};
use eqviz_config::ConfigError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    /// Shown without source locations; the API error already says what failed.
    #[error("{}", .source.user_message())]
    Client {
        #[source]
        source: ClientError,
    },

    #[error("Not signed in (redirected to {route}). Run `eqviz login --username <name>` first.")]
    NotSignedIn {
        route: Route,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to write {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_signed_in(route: Route) -> Self {
        CliError::NotSignedIn {
            route,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input<S: Into<String>>(message: S) -> Self {
        CliError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        CliError::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        CliError::Config { source }
    }
}

impl From<ClientError> for CliError {
    fn from(source: ClientError) -> Self {
        CliError::Client { source }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CliError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
