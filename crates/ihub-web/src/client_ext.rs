use crate::config::Provider;
use crate::endp::alpha_vantage::{self as av, GlobalQuoteResponse};
use crate::endp::coingecko::{self as cg, MarketCoin};
use crate::error::ProxyError;
use ihub_table::TopMovers;
use reqwest::{Client, RequestBuilder, Response};
use std::future::Future;

/// Provider calls, as add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
pub trait ClientExt {
    /// `GET /coins/markets`, optionally narrowed to a comma-separated list of coin ids.
    fn coin_markets(
        &self,
        provider: &Provider,
        ids: Option<&str>,
    ) -> impl Future<Output = Result<Vec<MarketCoin>, ProxyError>> + Send;

    /// `GET /query?function=GLOBAL_QUOTE&symbol=<symbol>`.
    fn global_quote(
        &self,
        provider: &Provider,
        symbol: &str,
    ) -> impl Future<Output = Result<GlobalQuoteResponse, ProxyError>> + Send;

    /// `GET /query?function=TOP_GAINERS_LOSERS`.
    fn top_movers(
        &self,
        provider: &Provider,
    ) -> impl Future<Output = Result<TopMovers, ProxyError>> + Send;
}

impl ClientExt for Client {
    async fn coin_markets(
        &self,
        provider: &Provider,
        ids: Option<&str>,
    ) -> Result<Vec<MarketCoin>, ProxyError> {
        let url = format!("{}/coins/markets", provider.base_url);
        let mut request = self.get(url).query(&cg::MARKETS_QUERY);
        if let Some(ids) = ids {
            request = request.query(&[("ids", ids)]);
        }
        if !provider.api_key.is_empty() {
            request = request.header(cg::API_KEY_HEADER, &provider.api_key);
        }

        let response = send(request).await?;
        if !response.status().is_success() {
            log::error!("CoinGecko answered {}", response.status());
            return Err(ProxyError::Upstream {
                status: response.status().as_u16(),
                message: "Failed to fetch market data",
            });
        }
        Ok(response.json().await?)
    }

    async fn global_quote(
        &self,
        provider: &Provider,
        symbol: &str,
    ) -> Result<GlobalQuoteResponse, ProxyError> {
        let request = self.get(format!("{}/query", provider.base_url)).query(&[
            ("function", av::GLOBAL_QUOTE),
            ("symbol", symbol),
            ("apikey", provider.api_key.as_str()),
        ]);
        let response = check_alpha_vantage(send(request).await)?;
        response.json().await.map_err(|e| masked(e.without_url()))
    }

    async fn top_movers(&self, provider: &Provider) -> Result<TopMovers, ProxyError> {
        let request = self.get(format!("{}/query", provider.base_url)).query(&[
            ("function", av::TOP_GAINERS_LOSERS),
            ("apikey", provider.api_key.as_str()),
        ]);
        let response = check_alpha_vantage(send(request).await)?;
        let movers: TopMovers = response.json().await.map_err(|e| masked(e.without_url()))?;
        if movers.top_gainers.is_empty()
            && movers.top_losers.is_empty()
            && movers.most_actively_traded.is_empty()
        {
            log::warn!("Alpha Vantage returned no movers: {:?}", movers.extra);
        }
        Ok(movers)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ProxyError> {
    request.send().await.map_err(|e| {
        let e = e.without_url();
        log::error!("provider request failed: {e}");
        ProxyError::Request(e)
    })
}

// Alpha Vantage takes its key in the query string, so nothing it fails with
// reaches the response body.
fn masked(e: impl std::fmt::Display) -> ProxyError {
    log::error!("Alpha Vantage request failed: {e}");
    ProxyError::UpstreamMasked {
        message: "Failed to fetch data",
    }
}

fn check_alpha_vantage(response: Result<Response, ProxyError>) -> Result<Response, ProxyError> {
    let response = response.map_err(masked)?;
    if response.status().is_success() {
        Ok(response)
    } else {
        log::error!("Alpha Vantage answered {}", response.status());
        Err(ProxyError::UpstreamMasked {
            message: "Failed to fetch data",
        })
    }
}

/// Build the outbound client shared by every request.
pub fn build_client(user_agent: &str) -> anyhow::Result<Client> {
    let client = reqwest::ClientBuilder::new().user_agent(user_agent).build()?;
    Ok(client)
}
