use crate::format::{self, Trend};
use crate::render::paint;
use crate::schema::{CoinSummary, QuoteSummary};
use colored::Colorize;

fn card(title: &str, lines: &[(&str, String)]) -> String {
    let mut out = format!("{}\n", title.bold());
    for (label, value) in lines {
        out.push_str(&format!("  {:<16}{}\n", format!("{label}:"), value));
    }
    out
}

/// Summary card of a single coin.
pub fn coin_card(coin: &CoinSummary) -> String {
    let trend = Trend::of(coin.change_percentage);
    card(
        &format!("{} (Crypto)", coin.name),
        &[
            ("Price", format!("${}", format::grouped(coin.price))),
            ("Change (24h)", format!("${}", format::fixed2(coin.change))),
            (
                "Change % (24h)",
                paint(&format::percentage(coin.change_percentage), trend).to_string(),
            ),
            ("Volume (24h)", format!("${}", format::grouped(coin.volume))),
        ],
    )
}

/// Summary card of a single stock quote.
///
/// The provider reports every figure as a string; figures that fail to parse
/// are shown as received.
pub fn quote_card(quote: &QuoteSummary) -> String {
    let change = quote.change.trim().parse::<f64>().ok();
    let price = match quote.price.trim().parse::<f64>() {
        Ok(price) => format!("${}", format::grouped(price)),
        Err(_) => quote.price.clone(),
    };
    let change = match change {
        Some(change) => format!("${}", format::fixed2(change)),
        None => quote.change.clone(),
    };
    let volume = match quote.volume.trim().parse::<u64>() {
        Ok(volume) => format::grouped(volume as f64),
        Err(_) => quote.volume.clone(),
    };
    card(
        &format!("{} (Stock)", quote.name.to_uppercase()),
        &[
            ("Price", price),
            ("Change", paint(&change, trend_of(&quote.change)).to_string()),
            (
                "Change %",
                paint(&quote.change_percent, trend_of(&quote.change_percent)).to_string(),
            ),
            ("Volume", volume),
        ],
    )
}

/// Trend of a provider figure such as `"-1.0400"` or `"0.4545%"`; figures
/// that do not parse count as down.
fn trend_of(figure: &str) -> Trend {
    match figure.trim().trim_end_matches('%').parse::<f64>() {
        Ok(value) if !value.is_nan() => Trend::of(value),
        _ => Trend::Down,
    }
}
