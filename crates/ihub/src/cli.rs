use clap::{Parser, Subcommand, ValueEnum};
use ihub_table::{MoverTab, SortField};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing
    #[arg(long, global = true, default_value = "INFO", ignore_case = true)]
    pub trace: TraceLevel,

    /// Base URL of the market data proxy [env: IHUB_API_URL]
    #[arg(long, global = true)]
    pub api: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the market data proxy.
    Serve {
        /// Address to bind [env: IHUB_HOST]
        #[arg(long)]
        host: Option<String>,

        /// Port to bind [env: IHUB_PORT]
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show the top 100 coins by market cap.
    Crypto {
        /// Activate a column header; repeat to activate several in order
        /// (rank, name, symbol, price, market_cap, volume, change).
        #[arg(long = "sort", value_name = "FIELD")]
        sort: Vec<SortField>,

        /// Keep prompting for column headers to sort by.
        #[arg(long, short)]
        interactive: bool,
    },

    /// Show the stock market's top movers.
    Stocks {
        /// gainers, losers or active
        #[arg(long, default_value = "gainers")]
        tab: MoverTab,
    },

    /// Show the summary cards of one coin and one stock.
    Summary {
        #[arg(long, default_value = "bitcoin")]
        coin: String,

        #[arg(long, default_value = "AAPL")]
        symbol: String,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<TraceLevel> for log::LevelFilter {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::TRACE => log::LevelFilter::Trace,
            TraceLevel::DEBUG => log::LevelFilter::Debug,
            TraceLevel::INFO => log::LevelFilter::Info,
            TraceLevel::WARN => log::LevelFilter::Warn,
            TraceLevel::ERROR => log::LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sort_flags_keep_their_order() {
        let cli = Cli::parse_from(["ihub", "crypto", "--sort", "price", "--sort", "price", "--sort", "name"]);
        match cli.command {
            Commands::Crypto { sort, interactive } => {
                assert_eq!(sort, vec![SortField::CurrentPrice, SortField::CurrentPrice, SortField::Name]);
                assert!(!interactive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bad_sort_field_is_rejected() {
        assert!(Cli::try_parse_from(["ihub", "crypto", "--sort", "image"]).is_err());
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["ihub", "summary"]);
        assert_eq!(cli.trace, TraceLevel::INFO);
        assert!(cli.api.is_none());
        match cli.command {
            Commands::Summary { coin, symbol } => {
                assert_eq!(coin, "bitcoin");
                assert_eq!(symbol, "AAPL");
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::parse_from(["ihub", "stocks", "--tab", "active", "--trace", "DEBUG"]);
        assert_eq!(cli.trace, TraceLevel::DEBUG);
        assert!(matches!(cli.command, Commands::Stocks { tab: MoverTab::MostActive }));
    }
}
