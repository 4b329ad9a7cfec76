use anyhow::Result;
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Select};
use dotenv::dotenv;
use ihub::{
    api::{self, HubClient},
    cli::{Cli, Commands::*},
    page::PageState,
    views,
};
use ihub_table::SortableTable;
use ihub_web::{config::default_user_agent, Config};
use std::process::ExitCode;

fn preprocess(level: log::LevelFilter) {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn client() -> Result<reqwest::Client> {
    let client = reqwest::ClientBuilder::new()
        .user_agent(default_user_agent())
        .build()?;
    Ok(client)
}

#[actix_web::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    preprocess(cli.trace.into());
    log::trace!("Command line input recorded: {cli:#?}");

    let api = api::api_url(cli.api);

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    // cli framework:
    // "> ihub <COMMAND>"
    let failed = match cli.command {
        // "> ihub serve [--host H] [--port P]"
        // run the market data proxy
        Serve { host, port } => {
            let mut config = Config::from_env()?;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            ihub_web::serve(config).await?;
            false
        }

        // "> ihub crypto [--sort FIELD]... [--interactive]"
        // top 100 coins, sorted by the given header activations
        Crypto { sort, interactive } => {
            let client = client()?;
            let page = PageState::load("Fetching crypto data", client.market_data(&api))
                .await
                .map(|records| views::crypto_table(records, &sort));
            let failed = page.is_failed();
            match page {
                PageState::Ready(table) if interactive => browse(table).await?,
                page => println!("{}", page.render(SortableTable::render)),
            }
            failed
        }

        // "> ihub stocks [--tab gainers|losers|active]"
        // top movers of the day
        Stocks { tab } => {
            let client = client()?;
            let page = PageState::load("Fetching stock data", client.top_movers(&api)).await;
            println!("{}", page.render(|data| views::stock_overview(data, tab)));
            page.is_failed()
        }

        // "> ihub summary [--coin ID] [--symbol TICKER]"
        // one coin and one stock, fetched together
        Summary { coin, symbol } => {
            let client = client()?;
            let fetch = async {
                futures::try_join!(client.coin_summary(&api, &coin), client.quote(&api, &symbol))
            };
            let page = PageState::load("Fetching market data", fetch).await;
            println!(
                "{}",
                page.render(|(coin, quote)| views::summary_cards(coin, quote))
            );
            page.is_failed()
        }
    };

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Re-render the table after every header the user picks, until they quit.
async fn browse(mut table: SortableTable) -> Result<()> {
    loop {
        println!("{}", table.render());

        let header = table.header();
        let mut items: Vec<String> = header.iter().map(|cell| cell.title()).collect();
        items.push("Quit".to_string());

        let choice = tokio::task::spawn_blocking(move || {
            Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Sort by")
                .items(&items)
                .default(0)
                .interact_opt()
        })
        .await??;

        match choice.and_then(|i| header.get(i)) {
            Some(cell) => table.request_sort(cell.field),
            None => return Ok(()),
        }
    }
}
