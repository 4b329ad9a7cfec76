use ihub_table::{CoinSummary, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Query of the `/coins/markets` endpoint: top 100 coins by market cap, in USD.
pub const MARKETS_QUERY: [(&str, &str); 5] = [
    ("vs_currency", "usd"),
    ("order", "market_cap_desc"),
    ("per_page", "100"),
    ("page", "1"),
    ("sparkline", "false"),
];

pub const API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// One entry of the `/coins/markets` response.
///
/// CoinGecko reports `null` for figures it has no data on, so every figure is
/// optional until it has been checked by [`records()`] or [`summary()`].
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MarketCoin {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, &'static str> {
    value.ok_or(field)
}

fn non_negative(value: Option<f64>, field: &'static str) -> Result<f64, &'static str> {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(field),
    }
}

fn finite(value: Option<f64>, field: &'static str) -> Result<f64, &'static str> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(field),
    }
}

impl TryFrom<MarketCoin> for Record {
    /// Name of the first missing or out-of-range field.
    type Error = &'static str;

    fn try_from(coin: MarketCoin) -> Result<Self, Self::Error> {
        let market_cap_rank = match coin.market_cap_rank {
            Some(rank) if rank > 0 => rank,
            _ => return Err("market_cap_rank"),
        };
        Ok(Record {
            name: required(coin.name, "name")?,
            symbol: required(coin.symbol, "symbol")?,
            image: required(coin.image, "image")?,
            current_price: non_negative(coin.current_price, "current_price")?,
            market_cap: non_negative(coin.market_cap, "market_cap")?,
            market_cap_rank,
            total_volume: non_negative(coin.total_volume, "total_volume")?,
            price_change_percentage_24h: finite(
                coin.price_change_percentage_24h,
                "price_change_percentage_24h",
            )?,
        })
    }
}

/// Turn a `/coins/markets` response into table records.
///
/// Coins with a missing or out-of-range figure are dropped, as are coins
/// repeating a rank already taken; both are logged.
pub fn records(coins: Vec<MarketCoin>) -> Vec<Record> {
    let mut ranks = HashSet::with_capacity(coins.len());
    coins
        .into_iter()
        .filter_map(|coin| {
            let id = coin.id.clone();
            match Record::try_from(coin) {
                Ok(record) if ranks.insert(record.market_cap_rank) => Some(record),
                Ok(record) => {
                    log::warn!(
                        "[{id}] repeats market cap rank {}; dropping it",
                        record.market_cap_rank
                    );
                    None
                }
                Err(field) => {
                    log::warn!("[{id}] missing or invalid `{field}`; dropping it");
                    None
                }
            }
        })
        .collect()
}

/// Reshape a single coin for the summary card.
pub fn summary(coin: MarketCoin) -> Result<CoinSummary, &'static str> {
    Ok(CoinSummary {
        name: required(coin.name, "name")?,
        image: required(coin.image, "image")?,
        price: finite(coin.current_price, "current_price")?,
        change: finite(coin.price_change_24h, "price_change_24h")?,
        change_percentage: finite(
            coin.price_change_percentage_24h,
            "price_change_percentage_24h",
        )?,
        volume: finite(coin.total_volume, "total_volume")?,
    })
}
