//! Async wrapper around [`TcgplayerPrices`] for use in async runtimes (Tokio, etc.).
//!
//! Blocking HTTP calls run on tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`]. The per-product price requests are issued
//! concurrently, and aggregation starts only once every one of them has
//! completed.
//!
//! # Example
//!
//! ```no_run
//! use tcgplayer_prices::AsyncTcgplayerPrices;
//!
//! #[tokio::main]
//! async fn main() {
//!     let prices = AsyncTcgplayerPrices::builder()
//!         .bearer_token("secret")
//!         .build()
//!         .unwrap();
//!
//!     let table = prices.price_table("Tragoedia (card)").await.unwrap();
//!     println!("{}", table);
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::aggregate::{ingest_listings, AggregationResult};
use crate::card_name;
use crate::config::Settings;
use crate::error::{PricesError, Result};
use crate::models::ProductPrices;
use crate::table::PriceTable;
use crate::{api_payload, build_table, TcgplayerPrices, TcgplayerPricesBuilder};

// ---------------------------------------------------------------------------
// AsyncTcgplayerPricesBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncTcgplayerPrices`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncTcgplayerPricesBuilder {
    inner: TcgplayerPricesBuilder,
}

impl AsyncTcgplayerPricesBuilder {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.inner = self.inner.settings(settings);
        self
    }

    pub fn api_base(mut self, base: &str) -> Self {
        self.inner = self.inner.api_base(base);
        self
    }

    pub fn api_version(mut self, version: &str) -> Self {
        self.inner = self.inner.api_version(version);
        self
    }

    pub fn bearer_token(mut self, token: &str) -> Self {
        self.inner = self.inner.bearer_token(token);
        self
    }

    pub fn partner(mut self, partner: &str) -> Self {
        self.inner = self.inner.partner(partner);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    pub fn build(self) -> Result<AsyncTcgplayerPrices> {
        let prices = self.inner.build()?;
        Ok(AsyncTcgplayerPrices {
            partner: prices.settings().partner.clone(),
            inner: Arc::new(Mutex::new(prices)),
        })
    }
}

// ---------------------------------------------------------------------------
// AsyncTcgplayerPrices
// ---------------------------------------------------------------------------

/// Async wrapper around [`TcgplayerPrices`].
///
/// The underlying client is protected by a [`Mutex`] since its HTTP client
/// is created lazily through `&mut self`.
#[derive(Clone)]
pub struct AsyncTcgplayerPrices {
    inner: Arc<Mutex<TcgplayerPrices>>,
    partner: String,
}

impl AsyncTcgplayerPrices {
    pub fn builder() -> AsyncTcgplayerPricesBuilder {
        AsyncTcgplayerPricesBuilder::default()
    }

    /// Run a sync operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut TcgplayerPrices) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let prices = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = prices
                .lock()
                .map_err(|_| PricesError::InvalidArgument("Client lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| PricesError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Price listings for every product matching `card_name`.
    ///
    /// The product search runs first; the price requests for the returned
    /// products then run concurrently. Listings come back in search order.
    pub async fn card_prices(&self, card_name: &str) -> Result<Vec<ProductPrices>> {
        if card_name.trim().is_empty() {
            return Err(PricesError::InvalidArgument(
                "Card name must not be empty".into(),
            ));
        }
        let name = card_name.to_string();
        let (ids, client) = self
            .run(move |p| {
                let ids = p.client_mut().product_ids(&name)?;
                p.client_mut().client()?;
                Ok((ids, p.client_mut().clone()))
            })
            .await?;

        let handles: Vec<_> = ids
            .into_iter()
            .map(|id| {
                let mut client = client.clone();
                tokio::task::spawn_blocking(move || client.product_prices(id))
            })
            .collect();

        let mut listings = Vec::with_capacity(handles.len());
        for handle in handles {
            let listing = handle
                .await
                .map_err(|e| PricesError::InvalidArgument(format!("Task join error: {e}")))??;
            listings.push(listing);
        }
        log::info!(
            "Fetched {} price listings for {:?}",
            listings.len(),
            card_name
        );
        Ok(listings)
    }

    pub async fn aggregate(&self, card_name: &str) -> Result<AggregationResult> {
        let listings = self.card_prices(card_name).await?;
        Ok(ingest_listings(&listings))
    }

    /// Build the price table for a page title.
    pub async fn price_table(&self, page_title: &str) -> Result<PriceTable> {
        let name = card_name::card_name(page_title);
        let prices = self.aggregate(&name).await?;
        build_table(&prices, &name, &self.partner)
    }

    /// The `tcgplayerprices` API payload for a card.
    pub async fn api_response(&self, card_name: &str) -> serde_json::Value {
        api_payload(self.card_prices(card_name).await)
    }
}
