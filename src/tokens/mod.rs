//! Token genesis metadata resolution
//!
//! Raw token amounts on the wire are undecimalised integers; rendering them
//! needs the token's genesis `decimals`. The lookup is an injected,
//! read-only collaborator for the duration of a synthesis pass - never a
//! hidden module-level singleton - so a cache miss is visible to the caller
//! (`success = false`) and the raw amount passes through unscaled.

use std::collections::HashMap;

use tracing::warn;

use crate::types::{GenesisInfo, ResolvedGenesisInfo};
use crate::utils::amount::scale_token_amount;

/// Genesis metadata lookup seam
///
/// Implementations must be side-effect free: a synthesis pass may call this
/// any number of times and in any order.
pub trait TokenMetadataLookup {
    fn genesis_info(&self, token_id: &str) -> Option<GenesisInfo>;
}

/// In-memory genesis info cache keyed by token id
///
/// Constructed once per pass from whatever the wallet has already fetched;
/// misses are reported, not fetched, to keep the pass synchronous.
#[derive(Debug, Clone, Default)]
pub struct TokenInfoCache {
    entries: HashMap<String, GenesisInfo>,
}

impl TokenInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token_id: impl Into<String>, info: GenesisInfo) {
        self.entries.insert(token_id.into(), info);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TokenMetadataLookup for TokenInfoCache {
    fn genesis_info(&self, token_id: &str) -> Option<GenesisInfo> {
        self.entries.get(token_id).cloned()
    }
}

/// Resolve genesis metadata for a token and render a raw amount
///
/// Returns the resolved info (carrying `success`) and the display amount:
/// scaled by `10^-decimals` on a hit, the raw integer string on a miss.
pub fn resolve_token_amount(
    lookup: &dyn TokenMetadataLookup,
    token_id: &str,
    raw_amount: u128,
) -> (ResolvedGenesisInfo, String) {
    match lookup.genesis_info(token_id) {
        Some(info) => {
            let scaled = scale_token_amount(raw_amount, info.decimals);
            (ResolvedGenesisInfo::hit(info), scaled)
        }
        None => {
            warn!("genesis info miss for token {}", token_id);
            (ResolvedGenesisInfo::miss(), raw_amount.to_string())
        }
    }
}
