use anyhow::{anyhow, Context, Result};
use ihub_table::{CoinSummary, QuoteSummary, Record, TopMovers};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::future::Future;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

/// Error body of the proxy endpoints.
#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: String,
}

/// Calls against the market data proxy, as add-on methods for [`reqwest::Client`].
///
/// Every call resolves to the payload or to a message fit for the error page.
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
pub trait HubClient {
    fn market_data(&self, api: &str) -> impl Future<Output = Result<Vec<Record>>> + Send;

    fn coin_summary(&self, api: &str, id: &str) -> impl Future<Output = Result<CoinSummary>> + Send;

    fn quote(&self, api: &str, symbol: &str) -> impl Future<Output = Result<QuoteSummary>> + Send;

    fn top_movers(&self, api: &str) -> impl Future<Output = Result<TopMovers>> + Send;
}

impl HubClient for Client {
    async fn market_data(&self, api: &str) -> Result<Vec<Record>> {
        get_json(self, &format!("{api}/market-data"), &[])
            .await
            .context("Failed to fetch crypto data")
    }

    async fn coin_summary(&self, api: &str, id: &str) -> Result<CoinSummary> {
        get_json(self, &format!("{api}/market-data"), &[("id", id)])
            .await
            .context("Failed to fetch crypto data")
    }

    async fn quote(&self, api: &str, symbol: &str) -> Result<QuoteSummary> {
        get_json(self, &format!("{api}/quote"), &[("symbol", symbol)])
            .await
            .context("Failed to fetch stock data")
    }

    async fn top_movers(&self, api: &str) -> Result<TopMovers> {
        get_json(self, &format!("{api}/quote"), &[])
            .await
            .context("Failed to fetch stock data")
    }
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<T> {
    log::debug!("GET {url} {query:?}");
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .with_context(|| format!("{url} is unreachable"))?;

    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        log::error!("{url} answered {status}: {message}");
        return Err(anyhow!("{message} ({status})"));
    }

    response
        .json()
        .await
        .with_context(|| format!("{url} sent an unexpected payload"))
}

/// Base URL of the proxy: the `--api` flag, then `IHUB_API_URL`, then the default.
pub fn api_url(flag: Option<String>) -> String {
    flag.or_else(|| dotenv::var("IHUB_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}
