use anyhow::{ensure, Context as _};
use toml::{map::Map, Value};

pub mod driver;
pub mod prompt;
pub mod render;
pub mod spinner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub github: github::Config,
    pub limit: usize,
}

pub fn init_config(config: &Map<String, Value>) -> anyhow::Result<Config> {
    let github = github::init_config(config)?;

    let limit = match config.get("display").and_then(|d| d.get("limit")) {
        Some(limit) => {
            let limit = limit
                .as_integer()
                .context("failed to parse limit config")?;
            ensure!(limit >= 1, "limit config must be at least 1, got {}", limit);
            usize::try_from(limit).context("failed to convert limit config")?
        }
        None => render::DEFAULT_LIMIT,
    };

    Ok(Config { github, limit })
}

/// Reads the config table and builds the client the driver fetches with.
pub fn setup(
    config: &Map<String, Value>,
) -> anyhow::Result<(github::Client, Config)> {
    let config = init_config(config)?;
    let client = github::Client::new(&config.github)?;

    Ok((client, config))
}
