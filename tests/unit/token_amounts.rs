//! Exact amount rendering for XEC and token quantities

use tx_history_synth::tokens::{resolve_token_amount, TokenInfoCache};
use tx_history_synth::types::GenesisInfo;
use tx_history_synth::utils::amount::{sats_to_xec, scale_token_amount};

fn genesis_info(decimals: u32) -> GenesisInfo {
    GenesisInfo {
        token_ticker: "WDT".to_string(),
        token_name: "Test Token With Exceptionally Long Name".to_string(),
        token_document_url: "example.com".to_string(),
        token_document_hash: String::new(),
        decimals,
    }
}

#[test]
fn test_sats_to_xec_two_decimal_places() {
    assert_eq!(sats_to_xec(0), "0.00");
    assert_eq!(sats_to_xec(551), "5.51");
    assert_eq!(sats_to_xec(100), "1.00");
    assert_eq!(sats_to_xec(42000), "420.00");
    assert_eq!(sats_to_xec(1), "0.01");
}

#[test]
fn test_scale_preserves_declared_precision() {
    assert_eq!(scale_token_amount(7_777_777_777, 7), "777.7777777");
    assert_eq!(scale_token_amount(12, 9), "0.000000012");
    assert_eq!(scale_token_amount(100, 2), "1.00");
    assert_eq!(scale_token_amount(5, 0), "5");
}

#[test]
fn test_scale_never_loses_integer_digits() {
    // Values beyond f64's exact integer range stay exact
    assert_eq!(
        scale_token_amount(123_456_789_012_345_678_901, 3),
        "123456789012345678.901"
    );
}

#[test]
fn test_resolution_hit_and_miss() {
    let mut cache = TokenInfoCache::new();
    cache.insert("aa".repeat(32), genesis_info(9));

    let (hit, amount) = resolve_token_amount(&cache, &"aa".repeat(32), 9_876_543_156);
    assert!(hit.success);
    assert_eq!(amount, "9.876543156");

    let (miss, amount) = resolve_token_amount(&cache, &"bb".repeat(32), 9_876_543_156);
    assert!(!miss.success);
    assert_eq!(amount, "9876543156");
}
