//! History synthesis pipeline
//!
//! Merge per-address pages, order them, classify each survivor and replay
//! alias registrations. The synthesiser owns every collaborator it needs,
//! so a constructed synthesiser can always run a full pass.

pub mod alias;
pub mod classify;
pub mod merge;
pub mod sort;

use std::collections::BTreeMap;

use tracing::info;

use crate::config::AppConfig;
use crate::tokens::TokenMetadataLookup;
use crate::types::{AliasRecord, ParsedTx, RawTx};
use crate::wallet::{AddressEncoder, LengthScaledFeePolicy, MessageDecryptor, OwnedScripts};

pub use alias::resolve_aliases;
pub use classify::classify_tx;
pub use merge::merge_histories;
pub use sort::{sort_chronological, sort_feed};

/// One-wallet history synthesiser
///
/// Collaborators are taken by value at construction, so a synthesiser can
/// never exist half-wired. Each `synthesize` pass recomputes the full view
/// from the raw pages; nothing is patched incrementally.
pub struct HistorySynthesizer<W, T, D, E> {
    wallet: W,
    tokens: T,
    decryptor: D,
    encoder: E,
    fees: LengthScaledFeePolicy,
    registration_script: String,
    display_count: usize,
}

impl<W, T, D, E> HistorySynthesizer<W, T, D, E>
where
    W: OwnedScripts,
    T: TokenMetadataLookup,
    D: MessageDecryptor,
    E: AddressEncoder,
{
    pub fn new(config: &AppConfig, wallet: W, tokens: T, decryptor: D, encoder: E) -> Self {
        Self {
            wallet,
            tokens,
            decryptor,
            encoder,
            fees: LengthScaledFeePolicy {
                base_fee_sats: config.alias.base_fee_sats,
                max_length: config.alias.max_length,
            },
            registration_script: config.alias.registration_script.clone(),
            display_count: config.history.display_count,
        }
    }

    /// Merge, sort feed-order, classify, and trim to the display count.
    ///
    /// Raw and parsed views stay paired so a consumer can drill from a
    /// feed entry back into the underlying transaction.
    pub fn synthesize(&self, pages: Vec<Vec<RawTx>>) -> Vec<(RawTx, ParsedTx)> {
        let mut merged = merge_histories(pages);
        sort_feed(&mut merged);
        merged.truncate(self.display_count);

        let feed: Vec<(RawTx, ParsedTx)> = merged
            .into_iter()
            .map(|tx| {
                let parsed = classify_tx(
                    &tx,
                    &self.wallet,
                    &self.tokens,
                    &self.decryptor,
                    &self.encoder,
                );
                (tx, parsed)
            })
            .collect();
        info!(count = feed.len(), "synthesised history feed");
        feed
    }

    /// Resolve the alias registry from the same raw pages.
    pub fn resolve_aliases(&self, pages: Vec<Vec<RawTx>>) -> BTreeMap<String, AliasRecord> {
        let merged = merge_histories(pages);
        alias::resolve_aliases(merged, &self.registration_script, &self.fees, &self.encoder)
    }
}
