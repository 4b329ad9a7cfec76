use crate::config::Config;
use actix_web::web;

pub mod crypto;
pub mod stock;

/// Shared by every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub config: Config,
}

/// Register the proxy endpoints.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crypto::market_data).service(stock::quote);
}

/// Treat `?id=` the same as no `id` at all.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
