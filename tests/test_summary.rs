//! Summary statistic tests.

use tcgplayer_prices::summary::{format_price, high, low, mid, PriceRange};

#[test]
fn low_is_minimum() {
    assert_eq!(low(&[3.5, 1.25, 9.0]), Some(1.25));
}

#[test]
fn mid_is_minimum_not_average() {
    assert_eq!(mid(&[2.0, 4.0, 6.0]), Some(2.0));
}

#[test]
fn high_is_maximum() {
    assert_eq!(high(&[3.5, 1.25, 9.0]), Some(9.0));
}

#[test]
fn empty_pools_are_not_available() {
    assert_eq!(low(&[]), None);
    assert_eq!(mid(&[]), None);
    assert_eq!(high(&[]), None);
}

#[test]
fn mid_equals_low_over_identical_pools() {
    let pools: [&[f64]; 4] = [&[1.0], &[7.5, 2.25], &[0.0, 10.0, 3.0], &[4.0, 4.0]];
    for pool in pools {
        assert_eq!(mid(pool), low(pool));
    }
}

#[test]
fn summaries_do_not_mutate_input() {
    let prices = vec![5.0, 1.0, 3.0];
    let _ = low(&prices);
    let _ = high(&prices);
    assert_eq!(prices, vec![5.0, 1.0, 3.0]);
}

#[test]
fn price_range_dispatches_to_matching_reduction() {
    let prices = [4.0, 2.0, 8.0];
    assert_eq!(PriceRange::Low.summarize(&prices), Some(2.0));
    assert_eq!(PriceRange::Mid.summarize(&prices), Some(2.0));
    assert_eq!(PriceRange::High.summarize(&prices), Some(8.0));
    assert_eq!(PriceRange::Mid.label(), "Medium");
    assert_eq!(PriceRange::High.key(), "high");
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(Some(10.0)), "10.00");
    assert_eq!(format_price(Some(0.126)), "0.13");
    assert_eq!(format_price(None), "N/A");
}
