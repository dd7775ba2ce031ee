use anyhow::{anyhow, Result};
use std::env;

/// Runtime configuration sourced from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `HOST` and `PORT` from the environment. Both are required;
    /// a missing variable is a fatal startup error naming it.
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").map_err(|_| anyhow!("HOST is not set"))?;

        if host.trim().is_empty() {
            return Err(anyhow!("HOST is not set"));
        }

        let port_str = env::var("PORT").map_err(|_| anyhow!("PORT is not set"))?;

        if port_str.trim().is_empty() {
            return Err(anyhow!("PORT is not set"));
        }

        let port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid PORT"))?;

        Ok(Config { host, port })
    }
}
