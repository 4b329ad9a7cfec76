use colored::Colorize;
use ihub_table::{movers, summary, CoinSummary, MoverTab, QuoteSummary, Record, SortField, SortableTable, TopMovers};

/// Crypto table with each header activation in `sorts` applied in order.
pub fn crypto_table(records: Vec<Record>, sorts: &[SortField]) -> SortableTable {
    let mut table = SortableTable::new(records);
    for field in sorts {
        table.request_sort(*field);
    }
    table
}

pub fn stock_overview(data: &TopMovers, tab: MoverTab) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        "Stock Market Overview".bold(),
        movers::render_tabs(tab),
        movers::render(tab.select(data)),
    )
}

pub fn summary_cards(coin: &CoinSummary, quote: &QuoteSummary) -> String {
    format!(
        "{}\n\n{}\n{}",
        "Investing Hub".bold(),
        summary::coin_card(coin),
        summary::quote_card(quote),
    )
}
