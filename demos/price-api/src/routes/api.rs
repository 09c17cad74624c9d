use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ApiParams {
    pub action: String,
    pub card: Option<String>,
}

/// GET /api.php?action=tcgplayerprices&card=Tragoedia
///
/// Returns the raw price listings for every product matching the card, or a
/// structured `{"error": {...}}` payload when the upstream calls fail.
pub async fn tcgplayer_prices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiParams>,
) -> Result<Json<Value>, AppError> {
    if params.action != "tcgplayerprices" {
        return Err(AppError::bad_request(format!("Unknown action: {}", params.action)));
    }
    let card = params
        .card
        .ok_or_else(|| AppError::bad_request("The \"card\" parameter must be set."))?;

    Ok(Json(state.prices.api_response(&card).await))
}
