use crate::format::{self, Trend};
use crate::render::{self, Cell};
use crate::schema::{Mover, TopMovers};
use std::fmt;
use std::str::FromStr;

/// Tabs of the stock market overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoverTab {
    #[default]
    TopGainers,
    TopLosers,
    MostActive,
}

impl MoverTab {
    pub const ALL: [MoverTab; 3] = [MoverTab::TopGainers, MoverTab::TopLosers, MoverTab::MostActive];

    pub fn label(self) -> &'static str {
        match self {
            MoverTab::TopGainers => "Top Gainers",
            MoverTab::TopLosers => "Top Losers",
            MoverTab::MostActive => "Most Active",
        }
    }

    /// The list of `movers` shown under this tab.
    pub fn select(self, movers: &TopMovers) -> &[Mover] {
        match self {
            MoverTab::TopGainers => &movers.top_gainers,
            MoverTab::TopLosers => &movers.top_losers,
            MoverTab::MostActive => &movers.most_actively_traded,
        }
    }
}

impl fmt::Display for MoverTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown tab `{0}`; expected one of: gainers, losers, active")]
pub struct UnknownTab(pub String);

impl FromStr for MoverTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gainers" | "top_gainers" => Ok(MoverTab::TopGainers),
            "losers" | "top_losers" => Ok(MoverTab::TopLosers),
            "active" | "most_active" | "most_actively_traded" => Ok(MoverTab::MostActive),
            _ => Err(UnknownTab(s.to_string())),
        }
    }
}

/// A mover is up only when its change percentage is strictly positive;
/// unparseable values count as down.
pub fn trend(mover: &Mover) -> Trend {
    match parse_number(&mover.change_percentage) {
        Some(change) if change > 0.0 => Trend::Up,
        _ => Trend::Down,
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().trim_end_matches('%').parse().ok()
}

/// Tab strip, with the selected tab bracketed.
pub fn render_tabs(selected: MoverTab) -> String {
    MoverTab::ALL
        .iter()
        .map(|tab| {
            if *tab == selected {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Movers in payload order; no sorting.
pub fn render(movers: &[Mover]) -> String {
    let header = [
        Cell::left("Symbol"),
        Cell::right("Price"),
        Cell::right("Change"),
        Cell::right("Change %"),
        Cell::right("Volume"),
    ];

    let body: Vec<Vec<Cell>> = movers
        .iter()
        .map(|mover| {
            let trend = trend(mover);
            let arrow = match trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            let volume = match parse_number(&mover.volume) {
                Some(volume) => format::grouped(volume),
                None => mover.volume.clone(),
            };
            vec![
                Cell::left(format!("{arrow} {}", mover.ticker)).with_trend(trend),
                Cell::right(format!("${}", mover.price)),
                Cell::right(mover.change_amount.clone()).with_trend(trend),
                Cell::right(mover.change_percentage.clone()).with_trend(trend),
                Cell::right(volume),
            ]
        })
        .collect();

    render::grid(&header, &body)
}
