use crate::error::ProxyError;
use ihub_table::QuoteSummary;
use serde::{Deserialize, Serialize};

pub const GLOBAL_QUOTE: &str = "GLOBAL_QUOTE";
pub const TOP_GAINERS_LOSERS: &str = "TOP_GAINERS_LOSERS";

/// `function=GLOBAL_QUOTE` response.
///
/// ```json
/// {
///     "Global Quote": {
///         "01. symbol": "AAPL",
///         "02. open": "228.5200",
///         "05. price": "229.8700",
///         "06. volume": "38861017",
///         "09. change": "1.0400",
///         "10. change percent": "0.4545%"
///     }
/// }
/// ```
///
/// Unknown symbols come back as an empty `"Global Quote": {}`; a throttled
/// key gets no `"Global Quote"` at all.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    pub quote: Option<GlobalQuote>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol", default)]
    pub symbol: Option<String>,
    #[serde(rename = "05. price", default)]
    pub price: Option<String>,
    #[serde(rename = "06. volume", default)]
    pub volume: Option<String>,
    #[serde(rename = "09. change", default)]
    pub change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    pub change_percent: Option<String>,
}

/// Reshape a global quote; `symbol` names the quote when the provider does not.
pub fn summary(response: GlobalQuoteResponse, symbol: &str) -> Result<QuoteSummary, ProxyError> {
    let quote = match response.quote {
        Some(quote) if quote.price.is_some() => quote,
        _ => return Err(ProxyError::NoQuote),
    };

    Ok(QuoteSummary {
        name: quote
            .symbol
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| symbol.to_string()),
        price: quote.price.unwrap_or_default(),
        change: quote.change.unwrap_or_default(),
        change_percent: quote.change_percent.unwrap_or_default(),
        volume: quote.volume.unwrap_or_default(),
    })
}
