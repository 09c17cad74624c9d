mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = tcgplayer_prices::Settings::load().expect("Failed to load settings");
    if settings.bearer_token.is_none() {
        log::warn!("No TCGplayer bearer token configured; upstream calls will be rejected");
    }
    let prices = tcgplayer_prices::AsyncTcgplayerPrices::builder()
        .settings(settings)
        .build()
        .expect("Failed to initialize TCGplayer client");

    let state = Arc::new(AppState { prices });

    let app = Router::new()
        .route("/api.php", get(routes::api::tcgplayer_prices))
        .route("/prices/{title}", get(routes::table::price_table))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = "0.0.0.0:3000";
    log::info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
