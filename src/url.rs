//! Marketplace and API URL construction.

use reqwest::Url;

use crate::config::{self, Settings};
use crate::error::{PricesError, Result};

/// Storefront search URL for a card, tagged with the affiliate partner.
pub fn marketplace_search_url(card_name: &str, partner: &str) -> Result<String> {
    let mut url = parse(config::SHOP_SEARCH_URL)?;
    url.query_pairs_mut()
        .append_pair("newSearch", "false")
        .append_pair("IsProductNameExact", "false")
        .append_pair("ProductName", card_name)
        .append_pair("Type", "Cards")
        .append_pair("condition", "Near_Mint")
        .append_pair("orientation", "list")
        .append_pair("partner", partner)
        .append_pair("utm_campaign", "affiliate")
        .append_pair("utm_medium", partner)
        .append_pair("utm_source", partner);
    Ok(url.into())
}

/// Catalog search URL for candidate products named `card_name`.
pub fn catalog_search_url(settings: &Settings, card_name: &str) -> Result<Url> {
    let mut url = parse(&format!("{}{}", settings.api_root(), config::CATALOG_ENDPOINT))?;
    url.query_pairs_mut()
        .append_pair("productName", card_name)
        .append_pair("limit", &config::SEARCH_LIMIT.to_string());
    Ok(url)
}

/// Pricing URL for a single product.
pub fn product_pricing_url(settings: &Settings, product_id: u64) -> Result<Url> {
    parse(&format!(
        "{}{}{}",
        settings.api_root(),
        config::PRICING_ENDPOINT,
        product_id
    ))
}

fn parse(raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| PricesError::InvalidArgument(format!("Invalid API URL {}: {}", raw, e)))
}
