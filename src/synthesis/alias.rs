//! First-valid-wins alias resolution
//!
//! Aliases bind by consensus order: replay the chronological history and
//! let the earliest valid registration of each name win. The replay is a
//! pure fold, so re-running it over a superset of the same history never
//! rewrites an existing binding.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

use crate::config::UNCONFIRMED_BLOCKHEIGHT;
use crate::decoder::{decode_op_return, OpReturnFrame};
use crate::synthesis::sort::sort_chronological;
use crate::types::{AliasRecord, RawTx};
use crate::wallet::{AddressEncoder, RegistrationFeePolicy};

lazy_static! {
    /// Registerable alias charset: lowercase alphanumeric only
    static ref ALIAS_CHARSET: Regex = Regex::new(r"^[a-z0-9]+$").unwrap();
}

/// Resolve the alias map from a merged history.
///
/// `registration_script` is the P2SH output script of the well-known
/// registration address; a transaction registers a name only when its
/// outputs pay that script at least the policy fee for the name's length.
pub fn resolve_aliases(
    mut txs: Vec<RawTx>,
    registration_script: &str,
    fees: &dyn RegistrationFeePolicy,
    encoder: &dyn AddressEncoder,
) -> BTreeMap<String, AliasRecord> {
    sort_chronological(&mut txs);

    let mut registry: BTreeMap<String, AliasRecord> = BTreeMap::new();
    for tx in &txs {
        let Some(record) = try_registration(tx, registration_script, fees, encoder) else {
            continue;
        };
        if registry.contains_key(&record.alias) {
            debug!(alias = %record.alias, txid = %tx.txid, "alias already bound, ignoring");
            continue;
        }
        registry.insert(record.alias.clone(), record);
    }
    info!(count = registry.len(), "resolved alias registry");
    registry
}

/// One tx's candidate registration, or `None` when any validity rule fails
fn try_registration(
    tx: &RawTx,
    registration_script: &str,
    fees: &dyn RegistrationFeePolicy,
    encoder: &dyn AddressEncoder,
) -> Option<AliasRecord> {
    let frame = decode_op_return(tx.first_output_script()?);
    let OpReturnFrame::Alias(alias) = frame else {
        return None;
    };
    if alias.is_off_spec {
        return None;
    }
    let name = alias.name_str();
    if !ALIAS_CHARSET.is_match(&name) {
        return None;
    }

    let paid_sats: u64 = tx
        .outputs
        .iter()
        .filter(|o| o.output_script == registration_script)
        .map(|o| o.value_sats())
        .sum();
    if paid_sats < fees.required_fee_sats(alias.name.len()) {
        debug!(alias = %name, paid_sats, "registration fee underpaid");
        return None;
    }

    // Registrant is the first input's spent script
    let owner_script = tx.inputs.first()?.output_script.as_deref()?;
    let owner_address = encoder.encode(owner_script)?;

    Some(AliasRecord {
        alias: name,
        owner_address,
        registering_txid: tx.txid.clone(),
        block_height: tx.block_height().unwrap_or(UNCONFIRMED_BLOCKHEIGHT),
    })
}
