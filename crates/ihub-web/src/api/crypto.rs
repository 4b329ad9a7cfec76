use super::{non_empty, AppState};
use crate::client_ext::ClientExt;
use crate::endp::coingecko;
use crate::error::ProxyError;
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct MarketQuery {
    id: Option<String>,
    /// Older clients ask for `?coin=<id>`.
    coin: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Top 100 coins by market cap
///
/// ```json
/// [
///     {
///         "name": "Bitcoin",
///         "symbol": "btc",
///         "image": "https://coin-images.coingecko.com/coins/images/1/large/bitcoin.png",
///         "current_price": 97123.0,
///         "market_cap": 1923456789012.0,
///         "market_cap_rank": 1,
///         "total_volume": 45678901234.0,
///         "price_change_percentage_24h": -1.5442
///     },
///     // ...
/// ]
/// ```
///
/// With `?id=bitcoin`, a single coin instead:
///
/// ```json
/// {
///     "name": "Bitcoin",
///     "image": "https://coin-images.coingecko.com/coins/images/1/large/bitcoin.png",
///     "price": 97123.0,
///     "change": -1523.45,
///     "change_percentage": -1.5442,
///     "volume": 45678901234.0
/// }
/// ```
#[get("/market-data")]
pub async fn market_data(
    query: web::Query<MarketQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ProxyError> {
    let query = query.into_inner();
    let provider = &state.config.coin_gecko;

    match non_empty(query.id).or_else(|| non_empty(query.coin)) {
        Some(id) => {
            log::debug!("fetching market data for {id}");
            let coin = state
                .client
                .coin_markets(provider, Some(&id))
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| ProxyError::NotFound(id.clone()))?;
            let summary = coingecko::summary(coin).map_err(|field| {
                log::warn!("[{id}] missing or invalid `{field}`");
                ProxyError::Internal(format!("Incomplete market data for `{id}`: missing `{field}`"))
            })?;
            Ok(HttpResponse::Ok().json(summary))
        }

        None => {
            log::debug!("fetching market data for the top 100 coins");
            let coins = state.client.coin_markets(provider, None).await?;
            let records = coingecko::records(coins);
            log::trace!("serving {} records", records.len());
            Ok(HttpResponse::Ok().json(records))
        }
    }
}
