//! Renderable price table built from an [`AggregationResult`].
//!
//! [`PriceTable`] is a plain model the page layer can lay out however it
//! likes; its [`Display`](std::fmt::Display) impl emits the wiki table markup.

use serde::Serialize;
use std::fmt;

use crate::aggregate::AggregationResult;
use crate::config;
use crate::edition::Edition;
use crate::error::{PricesError, Result};
use crate::summary::{format_price, PriceRange};
use crate::url::marketplace_search_url;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// One low/mid/high cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCell {
    pub range: PriceRange,
    pub value: Option<f64>,
    /// Two-decimal value, or `N/A`.
    pub text: String,
    pub element_id: String,
    pub class: String,
    pub href: String,
}

/// One edition's row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub edition: Edition,
    pub label: String,
    pub cells: Vec<PriceCell>,
}

impl PriceRow {
    pub fn cell(&self, range: PriceRange) -> Option<&PriceCell> {
        self.cells.iter().find(|c| c.range == range)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTable {
    pub card_name: String,
    pub caption: String,
    pub caption_href: String,
    pub rows: Vec<PriceRow>,
}

impl PriceTable {
    /// Build the table. Fails with [`PricesError::NoPrices`] when the
    /// aggregation holds no prices.
    pub fn build(prices: &AggregationResult, card_name: &str) -> Result<Self> {
        Self::build_with_partner(prices, card_name, config::DEFAULT_PARTNER)
    }

    pub fn build_with_partner(
        prices: &AggregationResult,
        card_name: &str,
        partner: &str,
    ) -> Result<Self> {
        if prices.is_empty() {
            return Err(PricesError::NoPrices);
        }

        let href = marketplace_search_url(card_name, partner)?;
        let rows = prices
            .iter()
            .map(|(edition, pool)| {
                let css = edition.css_class();
                let cells = PriceRange::ALL
                    .iter()
                    .map(|&range| {
                        let value = range.summarize(pool.prices(range));
                        PriceCell {
                            range,
                            value,
                            text: format_price(value),
                            element_id: format!("tcgplayer__data__{}--{}", css, range.key()),
                            class: format!("tcgplayer__data__{}", css),
                            href: href.clone(),
                        }
                    })
                    .collect();
                PriceRow {
                    edition,
                    label: edition.display_name().to_string(),
                    cells,
                }
            })
            .collect();

        Ok(Self {
            card_name: card_name.to_string(),
            caption: "TCGplayer Prices".to_string(),
            caption_href: config::TCGPLAYER_HOME.to_string(),
            rows,
        })
    }

    /// Header row labels after the blank corner cell.
    pub fn headers(&self) -> [&'static str; 3] {
        PriceRange::ALL.map(PriceRange::label)
    }

    pub fn row(&self, edition: Edition) -> Option<&PriceRow> {
        self.rows.iter().find(|r| r.edition == edition)
    }
}

// ---------------------------------------------------------------------------
// Markup
// ---------------------------------------------------------------------------

impl fmt::Display for PriceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<table class="wikitable plainlinks tcgplayer__data">"#)?;
        writeln!(
            f,
            r#"<caption><a rel="nofollow" href="{}">TCGplayer</a> Prices</caption>"#,
            escape(&self.caption_href)
        )?;
        write!(
            f,
            r#"<tr class="tcgplayer__header"><th class="tcgplayer__header--empty">&nbsp;</th>"#
        )?;
        for header in self.headers() {
            write!(f, "<th>{}</th>", header)?;
        }
        writeln!(f, "</tr>")?;

        for row in &self.rows {
            write!(
                f,
                r#"<tr class="tcgplayer__data--row"><th>{}</th>"#,
                escape(&row.label)
            )?;
            for cell in &row.cells {
                write!(
                    f,
                    r#"<td><span class="{}" id="{}"><a rel="nofollow" class="external text" href="{}">{}</a></span></td>"#,
                    escape(&cell.class),
                    escape(&cell.element_id),
                    escape(&cell.href),
                    escape(&cell.text)
                )?;
            }
            writeln!(f, "</tr>")?;
        }
        write!(f, "</table>")
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
