use std::path::Path;

use tracing::info;

use crate::errors::AppResult;
use crate::types::RawTx;

pub mod aliases;
pub mod decode;
pub mod feed;
pub mod parse;

/// Read a dumped history file: a JSON array of per-address arrays of
/// transactions, as returned page-by-page by the indexer
pub fn read_history_pages(path: &Path) -> AppResult<Vec<Vec<RawTx>>> {
    let raw = std::fs::read_to_string(path)?;
    let pages: Vec<Vec<RawTx>> = serde_json::from_str(&raw)?;
    info!(
        pages = pages.len(),
        txs = pages.iter().map(|p| p.len()).sum::<usize>(),
        "loaded history dump"
    );
    Ok(pages)
}
