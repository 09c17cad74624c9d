use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tcgplayer_prices::PricesError;

use crate::state::AppState;

/// GET /prices/:title
///
/// Renders the price table for a page title. Pages without prices get an
/// empty 204 so the page shows no table; failures are only logged.
pub async fn price_table(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Response {
    match state.prices.price_table(&title).await {
        Ok(table) => Html(table.to_string()).into_response(),
        Err(PricesError::NoPrices) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log::warn!("[tcgplayer] {title}: {e}");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
