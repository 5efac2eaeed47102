//! Total orderings over merged histories
//!
//! Two orders are needed: oldest-first for alias replay (consensus order)
//! and newest-first for the wallet's history feed. Both are total - the
//! txid tiebreak guarantees any two distinct transactions compare unequal,
//! so the result is independent of input order.

use std::cmp::Ordering;

use crate::types::RawTx;

/// Effective height for ordering: mempool transactions sort after every
/// confirmed one in consensus order
fn effective_height(tx: &RawTx) -> i64 {
    tx.block_height().unwrap_or(i64::MAX)
}

/// Oldest first: height ascending (unconfirmed last), then first-seen
/// ascending, then txid. This is the replay order for state machines that
/// depend on registration precedence.
pub fn sort_chronological(txs: &mut [RawTx]) {
    txs.sort_by(|a, b| {
        effective_height(a)
            .cmp(&effective_height(b))
            .then_with(|| a.time_first_seen_secs().cmp(&b.time_first_seen_secs()))
            .then_with(|| a.txid.cmp(&b.txid))
    });
}

/// Newest first, for display: all unconfirmed transactions lead the feed
/// ordered by first-seen descending, followed by confirmed transactions by
/// height descending then first-seen descending. Txid breaks any remaining
/// tie so the feed is stable across refreshes.
pub fn sort_feed(txs: &mut [RawTx]) {
    txs.sort_by(|a, b| {
        match (a.block_height(), b.block_height()) {
            (None, None) => {}
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ha), Some(hb)) => match hb.cmp(&ha) {
                Ordering::Equal => {}
                other => return other,
            },
        }
        b.time_first_seen_secs()
            .cmp(&a.time_first_seen_secs())
            .then_with(|| a.txid.cmp(&b.txid))
    });
}
