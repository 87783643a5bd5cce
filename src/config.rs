use crate::evolution::SPRITE_ENDPOINT;
use crate::Result;
use lib_config::{Config as LibConfig, Environment};
use requester::pokeapi::API_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_endpoint: String,
    pub sprite_endpoint: String,
    pub timeout_secs: u64,
    pub move_limit: usize,
    pub bar_width: usize,
    pub colored: bool,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Defaults, overridden by `DEX_*` variables (`DEX_TIMEOUT_SECS=3`)
    pub fn from_env() -> Result<Self> {
        let mut config = LibConfig::new();

        config.set_default("api_endpoint", API_ENDPOINT)?;
        config.set_default("sprite_endpoint", SPRITE_ENDPOINT)?;
        config.set_default("timeout_secs", 10i64)?;
        config.set_default("move_limit", 20i64)?;
        config.set_default("bar_width", 30i64)?;
        config.set_default("colored", true)?;
        config.merge(Environment::with_prefix("DEX"))?;

        let res = config.try_into()?;
        Ok(res)
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
