use anyhow::{Context, Result};
use dotenv::var;

pub const COIN_GECKO_URL: &str = "https://api.coingecko.com/api/v3";
pub const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Base URL and key of a market data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub base_url: String,
    pub api_key: String,
}

/// Proxy settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user_agent: String,
    pub coin_gecko: Provider,
    pub alpha_vantage: Provider,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_agent: default_user_agent(),
            coin_gecko: Provider {
                base_url: COIN_GECKO_URL.to_string(),
                api_key: String::new(),
            },
            alpha_vantage: Provider {
                base_url: ALPHA_VANTAGE_URL.to_string(),
                api_key: "demo".to_string(),
            },
        }
    }
}

impl Config {
    /// Every variable is optional; unset ones keep their default.
    ///
    /// | variable                | default                            |
    /// |-------------------------|------------------------------------|
    /// | `IHUB_HOST`             | `127.0.0.1`                        |
    /// | `IHUB_PORT`             | `8080`                             |
    /// | `USER_AGENT`            | `ihub/<version>`                   |
    /// | `COIN_GECKO_URL`        | `https://api.coingecko.com/api/v3` |
    /// | `COIN_GECKO_API_KEY`    | empty                              |
    /// | `ALPHA_VANTAGE_URL`     | `https://www.alphavantage.co`      |
    /// | `ALPHA_VANTAGE_API_KEY` | `demo`                             |
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();
        let port = match var("IHUB_PORT") {
            Ok(port) => port
                .parse()
                .with_context(|| format!("IHUB_PORT is not a valid port: {port}"))?,
            Err(_) => defaults.port,
        };

        Ok(Config {
            host: var("IHUB_HOST").unwrap_or(defaults.host),
            port,
            user_agent: var("USER_AGENT").unwrap_or(defaults.user_agent),
            coin_gecko: Provider {
                base_url: trim_slash(var("COIN_GECKO_URL").unwrap_or(defaults.coin_gecko.base_url)),
                api_key: var("COIN_GECKO_API_KEY").unwrap_or(defaults.coin_gecko.api_key),
            },
            alpha_vantage: Provider {
                base_url: trim_slash(var("ALPHA_VANTAGE_URL").unwrap_or(defaults.alpha_vantage.base_url)),
                api_key: var("ALPHA_VANTAGE_API_KEY").unwrap_or(defaults.alpha_vantage.api_key),
            },
        })
    }
}

pub fn default_user_agent() -> String {
    format!("ihub/{}", env!("CARGO_PKG_VERSION"))
}

fn trim_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
