use std::{str::FromStr, time::Duration};

use anyhow::Context;

use crate::board::{BoardConfig, SWEEP_INTERVAL};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Process settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            sweep_interval: SWEEP_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let sweep_interval = parse_var(&lookup, "SWEEP_INTERVAL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.sweep_interval);

        if sweep_interval.is_zero() {
            anyhow::bail!("SWEEP_INTERVAL_SECS must be greater than zero");
        }

        Ok(Self { host, port, sweep_interval })
    }

    /// Listen address as a `(host, port)` pair. Host names are resolved at bind time.
    pub fn addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::default().with_sweep_interval(self.sweep_interval)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().with_context(|| format!("invalid {key}: {raw:?}")))
        .transpose()
}
