//! Shared fixtures for the tcgplayer-prices integration tests.
//!
//! Provides price records, upstream listings and canned API payloads shaped
//! like real TCGplayer responses.
#![allow(dead_code)]

use serde_json::{json, Value};
use tcgplayer_prices::models::{PriceRecord, ProductPrices};

/// A price record with only the fields the aggregator reads.
pub fn record(label: &str, low: Option<f64>, mid: Option<f64>, high: Option<f64>) -> PriceRecord {
    PriceRecord::new(label, low, mid, high)
}

/// Three editions, one row each: 1st Edition, Unlimited and an unknown label.
pub fn three_edition_records() -> Vec<PriceRecord> {
    vec![
        record("1st Edition", Some(10.0), Some(12.0), Some(15.0)),
        record("Unlimited", Some(5.0), Some(6.0), Some(8.0)),
        record("bogus", Some(1.0), Some(1.0), Some(1.0)),
    ]
}

/// Listing JSON as returned by `/pricing/product/{id}`.
pub fn pricing_json(product_id: u64, rows: &[(&str, Option<f64>, Option<f64>, Option<f64>)]) -> Value {
    let results: Vec<Value> = rows
        .iter()
        .map(|(label, low, mid, high)| {
            json!({
                "productId": product_id,
                "lowPrice": low,
                "midPrice": mid,
                "highPrice": high,
                "marketPrice": null,
                "directLowPrice": null,
                "subTypeName": label
            })
        })
        .collect();

    json!({
        "success": true,
        "errors": [],
        "results": results
    })
}

/// Failed listing JSON.
pub fn failed_pricing_json(message: &str) -> Value {
    json!({
        "success": false,
        "errors": [message],
        "results": []
    })
}

/// Catalog search JSON listing the given product ids.
pub fn catalog_json(product_ids: &[u64]) -> Value {
    let results: Vec<Value> = product_ids
        .iter()
        .map(|id| {
            json!({
                "productId": id,
                "name": "Tragoedia",
                "cleanName": "Tragoedia",
                "imageUrl": "https://tcgplayer-cdn.tcgplayer.com/product/0_200w.jpg",
                "categoryId": 2,
                "groupId": 100,
                "url": format!("https://www.tcgplayer.com/product/{}", id),
                "modifiedOn": "2024-01-01T00:00:00"
            })
        })
        .collect();

    json!({
        "success": true,
        "errors": [],
        "totalItems": product_ids.len(),
        "results": results
    })
}

pub fn failed_listing(message: &str) -> ProductPrices {
    ProductPrices::failed(vec![message.to_string()])
}
