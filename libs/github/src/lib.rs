use anyhow::Context as _;
use reqwest::StatusCode;
use toml::{map::Map, Value};

mod client;
mod events;
mod response;

pub use client::Client;
pub use events::{
    response::{Event, Repo},
    ActivitySource,
};

pub static DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Sent on every request. The API rejects requests without a user agent.
pub static USER_AGENT: &str = "node.js";

pub static FETCH_FAILED_MESSAGE: &str = "Error when searching for user activity. Check the username or your internet connection";

/// Every variant displays [`FETCH_FAILED_MESSAGE`]; the cause is kept for
/// logging and tests only.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    ReqwestError {
        message: String,
        source: reqwest::Error,
    },

    #[error("{}", FETCH_FAILED_MESSAGE)]
    FailedStatusCode {
        status_code: StatusCode,
        message: String,
    },

    #[error("{}", FETCH_FAILED_MESSAGE)]
    SerdeJsonError {
        message: String,
        source: serde_json::Error,
    },

    #[error("{}", FETCH_FAILED_MESSAGE)]
    InvalidUrl { message: String },
}

impl FetchError {
    pub fn detail(&self) -> String {
        match self {
            FetchError::ReqwestError { message, source } => {
                format!("{}: {}", message, source)
            }
            FetchError::FailedStatusCode {
                status_code,
                message,
            } => format!("status code: {}, response: {}", status_code, message),
            FetchError::SerdeJsonError { message, source } => {
                format!("{}: {}", message, source)
            }
            FetchError::InvalidUrl { message } => message.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let Some(github) = config.get("github") else {
        return Ok(Config::default());
    };

    let base_url = match github.get("base_url") {
        Some(base_url) => base_url
            .as_str()
            .context("failed to parse base_url config")?
            .to_string(),
        None => DEFAULT_BASE_URL.to_string(),
    };

    Ok(Config { base_url })
}
