//! Merge and ordering behaviour over multi-address histories

use tx_history_synth::synthesis::{merge_histories, sort_chronological, sort_feed};
use tx_history_synth::types::RawTx;

use crate::common::{incoming_payment, outgoing_payment};

fn txids(txs: &[RawTx]) -> Vec<&str> {
    txs.iter().map(|t| t.txid.as_str()).collect()
}

#[test]
fn test_merge_collapses_cross_address_duplicates() {
    // A self-send shows up in both addresses' pages
    let shared = outgoing_payment("dup1", Some(778616), 1676571059, 100000);
    let merged = merge_histories([
        vec![shared.clone(), incoming_payment("in1", Some(778610), 100, 5000)],
        vec![shared.clone()],
        vec![shared],
    ]);
    assert_eq!(merged.len(), 2);
}

#[test]
fn test_merge_then_merge_is_idempotent() {
    let pages = vec![
        vec![incoming_payment("a1", Some(1), 10, 100)],
        vec![incoming_payment("a2", Some(2), 20, 200)],
    ];
    let once = merge_histories(pages);
    let twice = merge_histories([once.clone()]);
    assert_eq!(txids(&once), txids(&twice));
}

#[test]
fn test_chronological_is_height_monotonic() {
    let mut txs = vec![
        incoming_payment("c", Some(778616), 300, 1),
        incoming_payment("a", Some(778610), 100, 1),
        incoming_payment("m", None, 500, 1),
        incoming_payment("b", Some(778612), 200, 1),
    ];
    sort_chronological(&mut txs);
    let heights: Vec<Option<i64>> = txs.iter().map(|t| t.block_height()).collect();
    assert_eq!(
        heights,
        vec![Some(778610), Some(778612), Some(778616), None]
    );
}

#[test]
fn test_feed_shows_mempool_before_any_confirmed() {
    let mut txs = vec![
        incoming_payment("old", Some(778610), 100, 1),
        incoming_payment("mem1", None, 900, 1),
        incoming_payment("new", Some(778616), 300, 1),
        incoming_payment("mem2", None, 950, 1),
    ];
    sort_feed(&mut txs);
    assert_eq!(txids(&txs), vec!["mem2", "mem1", "new", "old"]);
}

#[test]
fn test_both_orders_are_total_over_permutations() {
    let base = vec![
        incoming_payment("a", Some(778610), 100, 1),
        incoming_payment("b", Some(778610), 100, 1),
        incoming_payment("c", Some(778612), 100, 1),
        incoming_payment("m", None, 100, 1),
    ];
    let mut reference_chrono = base.clone();
    sort_chronological(&mut reference_chrono);
    let mut reference_feed = base.clone();
    sort_feed(&mut reference_feed);

    let mut rotated = base;
    for _ in 0..4 {
        rotated.rotate_left(1);
        let mut chrono = rotated.clone();
        sort_chronological(&mut chrono);
        assert_eq!(txids(&chrono), txids(&reference_chrono));

        let mut feed = rotated.clone();
        sort_feed(&mut feed);
        assert_eq!(txids(&feed), txids(&reference_feed));
    }
}
