//! History page flattening
//!
//! A wallet's history arrives as one paginated feed per distinct address.
//! Addresses share transactions (a self-send touches several of the
//! wallet's own scripts), so the union of all pages contains duplicates
//! that must collapse to a single entry per txid.

use std::collections::HashSet;

use tracing::debug;

use crate::types::RawTx;

/// Flattens per-address history pages into one deduplicated list.
///
/// Transactions keep the first copy encountered, in page order; callers
/// sort afterwards, so the exact survivor ordering here is immaterial
/// (duplicate copies of a txid are identical indexer records).
pub fn merge_histories<I>(pages: I) -> Vec<RawTx>
where
    I: IntoIterator<Item = Vec<RawTx>>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<RawTx> = Vec::new();
    for page in pages {
        for tx in page {
            if seen.insert(tx.txid.clone()) {
                merged.push(tx);
            }
        }
    }
    debug!(count = merged.len(), "merged history pages");
    merged
}
