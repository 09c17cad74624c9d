/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Async TCGplayer client. Each request aggregates into its own result.
    pub prices: tcgplayer_prices::AsyncTcgplayerPrices,
}
