use super::{non_empty, AppState};
use crate::client_ext::ClientExt;
use crate::endp::alpha_vantage;
use crate::error::ProxyError;
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct QuoteQuery {
    symbol: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Quote of a single stock with `?symbol=<ticker>`
///
/// ```json
/// {
///     "name": "AAPL",
///     "price": "229.8700",
///     "change": "1.0400",
///     "changePercent": "0.4545%",
///     "volume": "38861017"
/// }
/// ```
///
/// Without a symbol, the day's top movers as the provider reports them:
///
/// ```json
/// {
///     "metadata": "Top gainers, losers, and most actively traded US tickers",
///     "last_updated": "2024-12-06 16:15:59 US/Eastern",
///     "top_gainers": [
///         {
///             "ticker": "XTIA",
///             "price": "1.16",
///             "change_amount": "0.67",
///             "change_percentage": "136.7347%",
///             "volume": "37154633"
///         },
///         // ...
///     ],
///     "top_losers": [ ... ],
///     "most_actively_traded": [ ... ]
/// }
/// ```
#[get("/quote")]
pub async fn quote(
    query: web::Query<QuoteQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ProxyError> {
    let provider = &state.config.alpha_vantage;

    match non_empty(query.into_inner().symbol) {
        Some(symbol) => {
            log::debug!("fetching quote for {symbol}");
            let response = state.client.global_quote(provider, &symbol).await?;
            let summary = alpha_vantage::summary(response, &symbol).map_err(|e| {
                log::warn!("[{symbol}] {e}");
                e
            })?;
            Ok(HttpResponse::Ok().json(summary))
        }

        None => {
            log::debug!("fetching top movers");
            let movers = state.client.top_movers(provider).await?;
            Ok(HttpResponse::Ok().json(movers))
        }
    }
}
