//! Blocking client for the TCGplayer catalog and pricing endpoints.
//!
//! Issues one catalog search per card name, then one pricing request per
//! candidate product. Transport errors and HTTP error statuses surface as
//! [`PricesError::Http`]; the per-listing `success` flag is left for the
//! aggregator to judge.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::error::{PricesError, Result};
use crate::models::{ProductPrices, ProductSearch};
use crate::url;

/// HTTP client for the TCGplayer REST API.
#[derive(Debug, Clone)]
pub struct TcgplayerClient {
    settings: Settings,
    client: Option<Client>,
}

impl TcgplayerClient {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            client: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Lazy HTTP client, created on first use.
    pub fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.settings.timeout())
                .default_headers(self.headers()?)
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| PricesError::InvalidArgument("HTTP client unavailable".into()))
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.settings.bearer_token {
            let value = HeaderValue::from_str(&format!("bearer {}", token)).map_err(|_| {
                PricesError::InvalidArgument("Bearer token contains invalid characters".into())
            })?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn get_json<T: DeserializeOwned>(&mut self, url: Url) -> Result<T> {
        log::debug!("GET {}", url);
        let resp = self.client()?.get(url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    /// Search the catalog for products matching a card name.
    pub fn search_products(&mut self, card_name: &str) -> Result<ProductSearch> {
        let url = url::catalog_search_url(&self.settings, card_name)?;
        self.get_json(url)
    }

    /// Fetch the price listing for a single product.
    pub fn product_prices(&mut self, product_id: u64) -> Result<ProductPrices> {
        let url = url::product_pricing_url(&self.settings, product_id)?;
        self.get_json(url)
    }

    /// Candidate product ids for a card, failing if the search itself failed.
    pub fn product_ids(&mut self, card_name: &str) -> Result<Vec<u64>> {
        let search = self.search_products(card_name)?;
        if !search.success {
            return Err(PricesError::Api {
                message: "TCGplayer API Error: Failed to get product IDs.".to_string(),
                errors: search.errors,
            });
        }
        Ok(search.results.iter().map(|p| p.product_id).collect())
    }

    /// Price listings for every product matching the card name, in search order.
    pub fn card_prices(&mut self, card_name: &str) -> Result<Vec<ProductPrices>> {
        let ids = self.product_ids(card_name)?;
        let listings = ids
            .into_iter()
            .map(|id| self.product_prices(id))
            .collect::<Result<Vec<_>>>()?;
        log::info!(
            "Fetched {} price listings for {:?}",
            listings.len(),
            card_name
        );
        Ok(listings)
    }
}
