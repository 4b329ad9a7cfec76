use actix_web::{web, App, HttpResponse, HttpServer};
use ihub::api::{api_url, HubClient};
use ihub::page::PageState;
use ihub::views;
use ihub_table::{MoverTab, SortField};
use serde_json::json;
use std::collections::HashMap;

async fn market_data(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    match query.get("id").map(String::as_str) {
        Some("bitcoin") => HttpResponse::Ok().json(json!({
            "name": "Bitcoin",
            "image": "https://example.com/btc.png",
            "price": 97123.0,
            "change": -1523.45,
            "change_percentage": -1.5442,
            "volume": 45678901234.0
        })),
        Some(_) => HttpResponse::TooManyRequests().json(json!({ "error": "Failed to fetch market data" })),
        None => HttpResponse::Ok().json(json!([
            {
                "name": "Ethereum", "symbol": "eth", "image": "",
                "current_price": 3845.12, "market_cap": 463000000000.0, "market_cap_rank": 2,
                "total_volume": 28000000000.0, "price_change_percentage_24h": 2.5
            },
            {
                "name": "Bitcoin", "symbol": "btc", "image": "",
                "current_price": 97123.0, "market_cap": 1923000000000.0, "market_cap_rank": 1,
                "total_volume": 45678901234.0, "price_change_percentage_24h": -1.5442
            }
        ])),
    }
}

async fn quote(query: web::Query<HashMap<String, String>>) -> HttpResponse {
    match query.get("symbol").map(String::as_str) {
        Some("AAPL") => HttpResponse::Ok().json(json!({
            "name": "AAPL",
            "price": "229.8700",
            "change": "1.0400",
            "changePercent": "0.4545%",
            "volume": "38861017"
        })),
        Some(_) => HttpResponse::InternalServerError().json(json!({ "error": "No quote data available" })),
        None => HttpResponse::Ok().json(json!({
            "top_gainers": [{
                "ticker": "XTIA", "price": "1.16", "change_amount": "0.67",
                "change_percentage": "136.7347%", "volume": "37154633"
            }],
            "top_losers": [],
            "most_actively_traded": []
        })),
    }
}

fn spawn_proxy() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/market-data", web::get().to(market_data))
            .route("/quote", web::get().to(quote))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake proxy");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

#[actix_web::test]
async fn crypto_page_renders_sorted_records() {
    let api = spawn_proxy();
    let client = reqwest::Client::new();

    let page = PageState::load("crypto", client.market_data(&api))
        .await
        .map(|records| views::crypto_table(records, &[SortField::Name]));
    match page {
        PageState::Ready(table) => {
            let names: Vec<String> = table.rows().into_iter().map(|r| r.name).collect();
            assert_eq!(names, vec!["Bitcoin", "Ethereum"]);
            assert_eq!(table.records()[0].name, "Ethereum");
        }
        other => panic!("expected a ready page, got {other:?}"),
    }
}

#[actix_web::test]
async fn proxy_error_message_reaches_the_page() {
    let api = spawn_proxy();
    let client = reqwest::Client::new();

    let page = PageState::load("coin", client.coin_summary(&api, "throttled")).await;
    assert_eq!(
        page,
        PageState::Failed(
            "Failed to fetch crypto data: Failed to fetch market data (429 Too Many Requests)"
                .to_string()
        )
    );

    let page = PageState::load("quote", client.quote(&api, "ZZZZ")).await;
    assert!(page.is_failed());
}

#[actix_web::test]
async fn summary_fetches_both_cards() {
    let api = spawn_proxy();
    let client = reqwest::Client::new();

    let (coin, quote) = futures::try_join!(client.coin_summary(&api, "bitcoin"), client.quote(&api, "AAPL"))
        .expect("both cards");
    assert_eq!(coin.name, "Bitcoin");
    assert_eq!(quote.change_percent, "0.4545%");

    // one failing card fails the page
    let both = futures::try_join!(client.coin_summary(&api, "bitcoin"), client.quote(&api, "ZZZZ"));
    assert!(both.is_err());
}

#[actix_web::test]
async fn top_movers_feed_the_stock_overview() {
    colored::control::set_override(false);
    let api = spawn_proxy();
    let client = reqwest::Client::new();

    let movers = client.top_movers(&api).await.expect("movers");
    let text = views::stock_overview(&movers, MoverTab::TopGainers);
    assert!(text.contains("▲ XTIA"));
    assert!(text.contains("37,154,633"));
}

#[actix_web::test]
async fn unreachable_proxy_fails_the_page() {
    let client = reqwest::Client::new();
    let page = PageState::load("crypto", client.market_data("http://127.0.0.1:9")).await;
    assert!(page.is_failed());
}

#[test]
fn api_flag_wins_and_trailing_slash_is_trimmed() {
    assert_eq!(api_url(Some("http://proxy:8080/".to_string())), "http://proxy:8080");
}
