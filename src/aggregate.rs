//! Per-edition price aggregation.
//!
//! Folds upstream price records into an [`AggregationResult`]: one
//! [`EditionPricePool`] per edition, kept in the order editions were first
//! seen so the rendered table has a stable row layout.

use serde::Serialize;

use crate::edition::{classify, Classification, Edition};
use crate::models::{PriceRecord, ProductPrices};
use crate::summary::{self, PriceRange, PriceSummary};

// ---------------------------------------------------------------------------
// EditionPricePool
// ---------------------------------------------------------------------------

/// Observed low/mid/high samples for one edition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditionPricePool {
    pub low: Vec<f64>,
    pub mid: Vec<f64>,
    pub high: Vec<f64>,
}

impl EditionPricePool {
    /// Total number of samples across the three columns.
    pub fn len(&self) -> usize {
        self.low.len() + self.mid.len() + self.high.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples for a single column.
    pub fn prices(&self, range: PriceRange) -> &[f64] {
        match range {
            PriceRange::Low => &self.low,
            PriceRange::Mid => &self.mid,
            PriceRange::High => &self.high,
        }
    }

    pub fn summary(&self) -> PriceSummary {
        PriceSummary {
            low: summary::low(&self.low),
            mid: summary::mid(&self.mid),
            high: summary::high(&self.high),
        }
    }
}

// ---------------------------------------------------------------------------
// AggregationResult
// ---------------------------------------------------------------------------

/// Edition-keyed price pools built from one request's listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregationResult {
    pools: Vec<(Edition, EditionPricePool)>,
    skipped: usize,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool for `edition`, created empty on first access.
    pub fn pool_mut(&mut self, edition: Edition) -> &mut EditionPricePool {
        let idx = match self.pools.iter().position(|(e, _)| *e == edition) {
            Some(idx) => idx,
            None => {
                self.pools.push((edition, EditionPricePool::default()));
                self.pools.len() - 1
            }
        };
        &mut self.pools[idx].1
    }

    /// Record one listing row.
    ///
    /// Ultimate rows only feed the high column. Null prices are dropped, but
    /// the edition's pool is still created.
    pub fn add(
        &mut self,
        classification: Classification,
        low: Option<f64>,
        mid: Option<f64>,
        high: Option<f64>,
    ) -> &mut Self {
        let pool = self.pool_mut(classification.edition);
        if !classification.is_ultimate {
            if let Some(low) = low {
                pool.low.push(low);
            }
            if let Some(mid) = mid {
                pool.mid.push(mid);
            }
        }
        if let Some(high) = high {
            pool.high.push(high);
        }
        self
    }

    /// Classify and record a raw price record.
    pub fn add_record(&mut self, record: &PriceRecord) -> &mut Self {
        self.add(
            classify(&record.sub_type_name),
            record.low_price,
            record.mid_price,
            record.high_price,
        )
    }

    pub fn get(&self, edition: Edition) -> Option<&EditionPricePool> {
        self.pools
            .iter()
            .find(|(e, _)| *e == edition)
            .map(|(_, pool)| pool)
    }

    /// Editions in first-seen order.
    pub fn editions(&self) -> impl Iterator<Item = Edition> + '_ {
        self.pools.iter().map(|(e, _)| *e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Edition, &EditionPricePool)> {
        self.pools.iter().map(|(e, pool)| (*e, pool))
    }

    /// Number of editions with a pool.
    pub fn edition_count(&self) -> usize {
        self.pools.len()
    }

    /// Total samples across every pool and column.
    pub fn len(&self) -> usize {
        self.pools.iter().map(|(_, pool)| pool.len()).sum()
    }

    /// True when no price was recorded. Callers treat this as "no prices found".
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Listings dropped because upstream reported them as failed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

/// Aggregate raw price records in input order.
pub fn ingest<'a, I>(records: I) -> AggregationResult
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    let mut result = AggregationResult::new();
    for record in records {
        result.add_record(record);
    }
    result
}

/// Aggregate the price listings of every candidate product.
///
/// A failed listing is skipped with a warning; the others still count.
pub fn ingest_listings<'a, I>(listings: I) -> AggregationResult
where
    I: IntoIterator<Item = &'a ProductPrices>,
{
    let mut result = AggregationResult::new();
    for listing in listings {
        if listing.is_failure() {
            log::warn!(
                "[tcgplayer] skipping failed price listing: {:?}",
                listing.errors
            );
            result.skipped += 1;
            continue;
        }
        for record in &listing.results {
            result.add_record(record);
        }
    }
    log::debug!(
        "Aggregated {} prices over {} editions ({} listings skipped)",
        result.len(),
        result.edition_count(),
        result.skipped
    );
    result
}
