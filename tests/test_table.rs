//! Price table model and markup tests.

mod common;

use tcgplayer_prices::aggregate::{ingest, AggregationResult};
use tcgplayer_prices::edition::Edition;
use tcgplayer_prices::summary::PriceRange;
use tcgplayer_prices::table::PriceTable;
use tcgplayer_prices::{build_table, PricesError};

use common::{record, three_edition_records};

#[test]
fn empty_aggregation_builds_no_table() {
    let err = PriceTable::build(&AggregationResult::new(), "Tragoedia").unwrap_err();
    assert!(matches!(err, PricesError::NoPrices));

    let only_nulls = ingest(&[record("Limited", None, None, None)]);
    let err = PriceTable::build(&only_nulls, "Tragoedia").unwrap_err();
    assert!(matches!(err, PricesError::NoPrices));
}

#[test]
fn empty_aggregation_maps_to_no_prices_error() {
    let err = build_table(&AggregationResult::new(), "Tragoedia", "yugipedia").unwrap_err();
    assert!(matches!(err, PricesError::NoPrices));
    assert_eq!(err.to_string(), "No prices found.");
}

#[test]
fn rows_follow_creation_order() {
    let table = PriceTable::build(&ingest(&three_edition_records()), "Tragoedia").unwrap();

    let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["1st Edition", "Unlimited Edition", "Other"]);
    assert_eq!(table.headers(), ["Low", "Medium", "High"]);
}

#[test]
fn cells_carry_values_text_and_ids() {
    let table = PriceTable::build(&ingest(&three_edition_records()), "Tragoedia").unwrap();
    let row = table.row(Edition::FirstEdition).unwrap();

    let low = row.cell(PriceRange::Low).unwrap();
    assert_eq!(low.value, Some(10.0));
    assert_eq!(low.text, "10.00");
    assert_eq!(low.element_id, "tcgplayer__data__1st-edition--low");
    assert_eq!(low.class, "tcgplayer__data__1st-edition");

    let high = row.cell(PriceRange::High).unwrap();
    assert_eq!(high.text, "15.00");
    assert_eq!(high.element_id, "tcgplayer__data__1st-edition--high");
}

#[test]
fn missing_values_render_not_available() {
    let records = vec![record("1st Edition - Ultimate", Some(10.0), Some(12.0), Some(20.0))];
    let table = PriceTable::build(&ingest(&records), "Tragoedia").unwrap();
    let row = table.row(Edition::FirstEdition).unwrap();

    assert_eq!(row.cell(PriceRange::Low).unwrap().text, "N/A");
    assert_eq!(row.cell(PriceRange::Mid).unwrap().text, "N/A");
    assert_eq!(row.cell(PriceRange::High).unwrap().text, "20.00");
}

#[test]
fn cells_link_to_marketplace_search() {
    let table = PriceTable::build(&ingest(&three_edition_records()), "Dark Magician").unwrap();
    let href = &table.rows[0].cells[0].href;

    assert!(href.starts_with("https://shop.tcgplayer.com/yugioh/product/show?"));
    assert!(href.contains("ProductName=Dark+Magician"));
    assert!(href.contains("partner=yugipedia"));
}

#[test]
fn markup_contains_caption_header_and_rows() {
    let table = PriceTable::build(&ingest(&three_edition_records()), "Tragoedia").unwrap();
    let html = table.to_string();

    assert!(html.starts_with(r#"<table class="wikitable plainlinks tcgplayer__data">"#));
    assert!(html.contains(r#"<a rel="nofollow" href="https://www.tcgplayer.com/">TCGplayer</a> Prices"#));
    assert!(html.contains("<th>Low</th><th>Medium</th><th>High</th>"));
    assert!(html.contains(r#"id="tcgplayer__data__unlimited-edition--mid""#));
    assert!(html.contains(">6.00</a>"));
    assert_eq!(html.matches(r#"class="tcgplayer__data--row""#).count(), 3);
    assert!(html.ends_with("</table>"));
}

#[test]
fn markup_escapes_link_ampersands() {
    let table = PriceTable::build(&ingest(&three_edition_records()), "Tragoedia").unwrap();
    let html = table.to_string();

    assert!(html.contains("newSearch=false&amp;IsProductNameExact=false"));
}
