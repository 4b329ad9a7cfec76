use serde::{Deserialize, Serialize};

/// One row of the crypto market table, as served by `GET /market-data`.
///
/// ```json
/// {
///     "name": "Bitcoin",
///     "symbol": "btc",
///     "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
///     "current_price": 97123.0,
///     "market_cap": 1923456789012.0,
///     "market_cap_rank": 1,
///     "total_volume": 45678901234.0,
///     "price_change_percentage_24h": -1.23
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub market_cap_rank: u32,
    pub total_volume: f64,
    pub price_change_percentage_24h: f64,
}

/// Single coin snapshot, as served by `GET /market-data?id=<coin>`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CoinSummary {
    pub name: String,
    pub image: String,
    pub price: f64,
    pub change: f64,
    pub change_percentage: f64,
    pub volume: f64,
}

/// Single stock quote, as served by `GET /quote?symbol=<ticker>`.
///
/// Values are kept as the strings the stock provider reports them in
/// (e.g. `"change_percent": "0.4538%"`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub name: String,
    pub price: String,
    pub change: String,
    #[serde(rename = "changePercent")]
    pub change_percent: String,
    pub volume: String,
}

/// Entry of one of the top movers lists.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Mover {
    pub ticker: String,
    pub price: String,
    pub change_amount: String,
    pub change_percentage: String,
    pub volume: String,
}

/// Top movers payload, as served by `GET /quote`.
///
/// Lists absent from the provider payload come through empty; anything else
/// the provider sends (`metadata`, `last_updated`, ...) is passed on untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TopMovers {
    #[serde(default)]
    pub top_gainers: Vec<Mover>,
    #[serde(default)]
    pub top_losers: Vec<Mover>,
    #[serde(default)]
    pub most_actively_traded: Vec<Mover>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
