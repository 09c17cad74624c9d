use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceRecord - One pricing row from `/pricing/product/{productId}`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecord {
    #[serde(default)]
    pub product_id: Option<u64>,
    #[serde(default)]
    pub sub_type_name: String,
    #[serde(default)]
    pub low_price: Option<f64>,
    #[serde(default)]
    pub mid_price: Option<f64>,
    #[serde(default)]
    pub high_price: Option<f64>,
    #[serde(default)]
    pub market_price: Option<f64>,
    #[serde(default)]
    pub direct_low_price: Option<f64>,
}

impl PriceRecord {
    /// Build a record from the fields the aggregator reads.
    pub fn new(
        sub_type_name: &str,
        low_price: Option<f64>,
        mid_price: Option<f64>,
        high_price: Option<f64>,
    ) -> Self {
        Self {
            sub_type_name: sub_type_name.to_string(),
            low_price,
            mid_price,
            high_price,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// ProductPrices - Price listing response for a single product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrices {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub results: Vec<PriceRecord>,
}

impl ProductPrices {
    pub fn ok(results: Vec<PriceRecord>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            results,
        }
    }

    pub fn failed(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            results: Vec::new(),
        }
    }

    /// Whether upstream reported this listing as failed.
    pub fn is_failure(&self) -> bool {
        !self.success || !self.errors.is_empty()
    }
}
