//! Summary statistics over a price pool.
//!
//! Both the low and the mid column reduce with the minimum; the high column
//! reduces with the maximum. `None` means "not available".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest observed low price.
pub fn low(prices: &[f64]) -> Option<f64> {
    prices.iter().copied().reduce(f64::min)
}

/// Lowest observed mid price. Same reduction as [`low`].
pub fn mid(prices: &[f64]) -> Option<f64> {
    prices.iter().copied().reduce(f64::min)
}

/// Highest observed high price.
pub fn high(prices: &[f64]) -> Option<f64> {
    prices.iter().copied().reduce(f64::max)
}

/// One of the three price columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Mid,
    High,
}

impl PriceRange {
    /// Columns in table order.
    pub const ALL: [PriceRange; 3] = [PriceRange::Low, PriceRange::Mid, PriceRange::High];

    /// Apply this column's reduction.
    pub fn summarize(self, prices: &[f64]) -> Option<f64> {
        match self {
            PriceRange::Low => low(prices),
            PriceRange::Mid => mid(prices),
            PriceRange::High => high(prices),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PriceRange::Low => "low",
            PriceRange::Mid => "mid",
            PriceRange::High => "high",
        }
    }

    /// Column header text.
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::Low => "Low",
            PriceRange::Mid => "Medium",
            PriceRange::High => "High",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Low/mid/high values for one edition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSummary {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
}

impl PriceSummary {
    pub fn get(&self, range: PriceRange) -> Option<f64> {
        match range {
            PriceRange::Low => self.low,
            PriceRange::Mid => self.mid,
            PriceRange::High => self.high,
        }
    }
}

/// Format a summary value the way the table shows it.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}
