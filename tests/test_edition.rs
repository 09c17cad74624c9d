//! Edition classification tests.

use tcgplayer_prices::edition::{classify, Classification, Edition};

// ---------------------------------------------------------------------------
// Known labels
// ---------------------------------------------------------------------------

#[test]
fn classifies_plain_editions() {
    assert_eq!(classify("1st Edition"), Classification::new(Edition::FirstEdition, false));
    assert_eq!(classify("Unlimited"), Classification::new(Edition::UnlimitedEdition, false));
    assert_eq!(classify("Limited"), Classification::new(Edition::LimitedEdition, false));
}

#[test]
fn classifies_ultimate_variants() {
    assert_eq!(
        classify("1st Edition - Ultimate"),
        Classification::new(Edition::FirstEdition, true)
    );
    assert_eq!(
        classify("Unlimited - Ultimate"),
        Classification::new(Edition::UnlimitedEdition, true)
    );
}

// ---------------------------------------------------------------------------
// Unknown labels
// ---------------------------------------------------------------------------

#[test]
fn unknown_labels_fall_back_to_other() {
    for label in [
        "",
        "bogus",
        "Promo",
        "1st edition",
        " 1st Edition",
        "Limited - Ultimate",
        "Unlimited - Ultimate ",
        "Ghost Rare",
    ] {
        let c = classify(label);
        assert_eq!(c.edition, Edition::Other, "label {:?}", label);
        assert!(!c.is_ultimate, "label {:?}", label);
    }
}

// ---------------------------------------------------------------------------
// Edition metadata
// ---------------------------------------------------------------------------

#[test]
fn edition_metadata_matches_table_layout() {
    assert_eq!(Edition::FirstEdition.code(), "1E");
    assert_eq!(Edition::UnlimitedEdition.display_name(), "Unlimited Edition");
    assert_eq!(Edition::LimitedEdition.css_class(), "limited-edition");
    assert_eq!(Edition::Other.display_name(), "Other");
    assert_eq!(Edition::Other.to_string(), "O");
}
