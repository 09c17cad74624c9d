//! TCGplayer price tables for card pages.
//!
//! Fetches a card's price listings from the TCGplayer API, classifies each
//! listing by print edition, aggregates per-edition low/mid/high prices and
//! builds a table model for the page.
//!
//! # Quick start
//!
//! ```no_run
//! use tcgplayer_prices::TcgplayerPrices;
//!
//! let mut prices = TcgplayerPrices::builder()
//!     .bearer_token("secret")
//!     .build()
//!     .unwrap();
//!
//! let table = prices.price_table("Tragoedia (card)").unwrap();
//! println!("{}", table);
//! ```
//!
//! The aggregation engine works without the network as well:
//!
//! ```rust
//! use tcgplayer_prices::aggregate::ingest;
//! use tcgplayer_prices::edition::Edition;
//! use tcgplayer_prices::models::PriceRecord;
//!
//! let records = vec![PriceRecord::new("1st Edition", Some(10.0), Some(12.0), Some(15.0))];
//! let result = ingest(&records);
//! let summary = result.get(Edition::FirstEdition).unwrap().summary();
//! assert_eq!(summary.high, Some(15.0));
//! ```

pub mod aggregate;
#[cfg(feature = "async")]
pub mod async_client;
pub mod card_name;
pub mod client;
pub mod config;
pub mod edition;
pub mod error;
pub mod models;
pub mod summary;
pub mod table;
pub mod url;

pub use aggregate::{ingest, ingest_listings, AggregationResult, EditionPricePool};
#[cfg(feature = "async")]
pub use async_client::AsyncTcgplayerPrices;
pub use client::TcgplayerClient;
pub use config::Settings;
pub use edition::{classify, Classification, Edition};
pub use error::{PricesError, Result};
pub use summary::{PriceRange, PriceSummary};
pub use table::{PriceCell, PriceRow, PriceTable};

use models::ProductPrices;
use serde_json::{json, Value};
use std::time::Duration;

// ---------------------------------------------------------------------------
// TcgplayerPricesBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`TcgplayerPrices`] instance.
///
/// Starts from [`Settings::default()`]; use [`settings()`](Self::settings)
/// to start from a loaded config instead.
#[derive(Debug, Clone, Default)]
pub struct TcgplayerPricesBuilder {
    settings: Settings,
}

impl TcgplayerPricesBuilder {
    /// Replace all settings, e.g. with [`Settings::load()`].
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Override the API host (useful for tests and proxies).
    pub fn api_base(mut self, base: &str) -> Self {
        self.settings.api_base = base.to_string();
        self
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.settings.api_version = version.to_string();
        self
    }

    pub fn bearer_token(mut self, token: &str) -> Self {
        self.settings.bearer_token = Some(token.to_string());
        self
    }

    /// Affiliate partner id used in marketplace links.
    pub fn partner(mut self, partner: &str) -> Self {
        self.settings.partner = partner.to_string();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn build(self) -> Result<TcgplayerPrices> {
        if self.settings.api_version.trim().is_empty() {
            return Err(PricesError::InvalidArgument(
                "API version must not be empty".into(),
            ));
        }
        Ok(TcgplayerPrices {
            client: TcgplayerClient::new(self.settings),
        })
    }
}

// ---------------------------------------------------------------------------
// TcgplayerPrices
// ---------------------------------------------------------------------------

/// Fetch, aggregate and tabulate TCGplayer prices for a card.
///
/// Every call builds its own [`AggregationResult`]; nothing is shared
/// between requests except the HTTP client.
#[derive(Debug, Clone)]
pub struct TcgplayerPrices {
    client: TcgplayerClient,
}

impl TcgplayerPrices {
    pub fn builder() -> TcgplayerPricesBuilder {
        TcgplayerPricesBuilder::default()
    }

    pub fn settings(&self) -> &Settings {
        self.client.settings()
    }

    pub fn client_mut(&mut self) -> &mut TcgplayerClient {
        &mut self.client
    }

    /// Price listings for every product matching `card_name`.
    pub fn card_prices(&mut self, card_name: &str) -> Result<Vec<ProductPrices>> {
        if card_name.trim().is_empty() {
            return Err(PricesError::InvalidArgument(
                "Card name must not be empty".into(),
            ));
        }
        self.client.card_prices(card_name)
    }

    /// Fetch and aggregate prices for `card_name`.
    pub fn aggregate(&mut self, card_name: &str) -> Result<AggregationResult> {
        let listings = self.card_prices(card_name)?;
        Ok(ingest_listings(&listings))
    }

    /// Build the price table for a page title.
    ///
    /// Returns [`PricesError::NoPrices`] when nothing could be aggregated.
    pub fn price_table(&mut self, page_title: &str) -> Result<PriceTable> {
        let name = card_name::card_name(page_title);
        let prices = self.aggregate(&name)?;
        build_table(&prices, &name, &self.settings().partner)
    }

    /// The `tcgplayerprices` API payload for a card.
    ///
    /// On success the listings are returned as-is; any error becomes a
    /// structured `{"error": {"message", "data"}}` object.
    pub fn api_response(&mut self, card_name: &str) -> Value {
        api_payload(self.card_prices(card_name))
    }
}

/// Table for an aggregation, logging the empty case before returning
/// [`PricesError::NoPrices`].
pub fn build_table(
    prices: &AggregationResult,
    card_name: &str,
    partner: &str,
) -> Result<PriceTable> {
    PriceTable::build_with_partner(prices, card_name, partner).inspect_err(|e| {
        if matches!(e, PricesError::NoPrices) {
            log::warn!("[tcgplayer] no prices found for {:?}", card_name);
        }
    })
}

/// Wrap a fetch outcome in the `tcgplayerprices` response envelope.
pub fn api_payload(outcome: Result<Vec<ProductPrices>>) -> Value {
    let body = match outcome {
        Ok(listings) => json!(listings),
        Err(e) => {
            log::warn!("[tcgplayer] {}", e);
            if e.data().is_empty() {
                json!({ "error": { "message": e.to_string() } })
            } else {
                json!({ "error": { "message": e.to_string(), "data": e.data() } })
            }
        }
    };
    json!({ "tcgplayerprices": body })
}
