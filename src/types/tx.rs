//! Raw transaction model as returned per-address by the UTXO indexer
//!
//! These are immutable snapshots: a synthesis pass never mutates a `RawTx`,
//! it derives new views from the merged set. Field names follow the
//! indexer's JSON wire shape (camelCase, satoshi values as decimal strings).

use serde::{Deserialize, Serialize};

/// One on-chain transaction as reported by the indexer's per-address
/// transaction-history endpoint.
///
/// A transaction is confirmed iff `block` is present; `time_first_seen` is
/// always populated for ordering, with `"0"` standing in for unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTx {
    pub txid: String,
    pub version: i32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    #[serde(default)]
    pub lock_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockMeta>,
    pub time_first_seen: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub is_coinbase: bool,
    #[serde(default)]
    pub network: String,
}

/// Block metadata for a confirmed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMeta {
    pub height: i64,
    pub hash: String,
    pub timestamp: String,
}

/// Reference to a previous output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutPoint {
    pub txid: String,
    pub out_idx: u32,
}

/// Transaction input, carrying the spent output's script so wallet
/// ownership of the sender side can be determined without another lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInput {
    pub prev_out: OutPoint,
    #[serde(default)]
    pub input_script: String,
    /// Script of the output this input spends; absent for coinbase inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_script: Option<String>,
    /// Satoshis as a decimal string
    pub value: String,
    #[serde(default)]
    pub sequence_no: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slp_token: Option<SlpTokenEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slp_burn: Option<SlpBurnEntry>,
}

/// Transaction output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    /// Satoshis as a decimal string
    pub value: String,
    pub output_script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slp_token: Option<SlpTokenEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent_by: Option<OutPoint>,
}

/// Token quantity attached to an input or output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlpTokenEntry {
    /// Raw (undecimalised) token amount as a decimal string
    pub amount: String,
    #[serde(default)]
    pub is_mint_baton: bool,
}

/// Burn entry reported by the indexer on an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlpBurnEntry {
    pub token: SlpTokenEntry,
    pub token_id: String,
}

/// Parse a satoshi or token decimal string, degrading to 0 on malformed
/// input (the indexer contract says these are always well-formed, but a
/// bad field must never abort classification of the whole set)
pub fn parse_amount(value: &str) -> u128 {
    value.trim().parse::<u128>().unwrap_or(0)
}

impl RawTx {
    /// A transaction is confirmed iff the indexer attached block metadata
    pub fn is_confirmed(&self) -> bool {
        self.block.is_some()
    }

    /// Confirmation height, or `None` while in the mempool
    pub fn block_height(&self) -> Option<i64> {
        self.block.as_ref().map(|b| b.height)
    }

    /// First-seen time in unix seconds; 0 means unknown but still orderable
    pub fn time_first_seen_secs(&self) -> u64 {
        self.time_first_seen.trim().parse::<u64>().unwrap_or(0)
    }

    /// Script of the first output, if any (where OP_RETURN frames live)
    pub fn first_output_script(&self) -> Option<&str> {
        self.outputs.first().map(|o| o.output_script.as_str())
    }
}

impl TxInput {
    /// Input value in satoshis (0 on malformed field, saturating on overflow)
    pub fn value_sats(&self) -> u64 {
        u64::try_from(parse_amount(&self.value)).unwrap_or(u64::MAX)
    }
}

impl TxOutput {
    /// Output value in satoshis (0 on malformed field, saturating on overflow)
    pub fn value_sats(&self) -> u64 {
        u64::try_from(parse_amount(&self.value)).unwrap_or(u64::MAX)
    }
}
