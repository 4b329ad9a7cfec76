pub mod api;
pub mod client_ext;
pub mod config;
pub mod endp;
pub mod error;

pub use crate::api::{routes, AppState};
pub use crate::config::{Config, Provider};
pub use crate::error::ProxyError;

use actix_web::{middleware::Logger, web, App, HttpServer};

/// Run the market data proxy until it is shut down.
pub async fn serve(config: Config) -> std::io::Result<()> {
    let client = client_ext::build_client(&config.user_agent).map_err(std::io::Error::other)?;
    let (host, port) = (config.host.clone(), config.port);
    let state = web::Data::new(AppState { client, config });

    log::info!("Serving market data on http://{host}:{port}");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
