//! Derived views: classified transactions and resolved alias registrations
//!
//! These are recomputed from the merged raw set on every synthesis pass and
//! never mutated in place - a new block can reorder history and flip a
//! classification, so incremental patching is not safe.

use serde::{Deserialize, Serialize};

/// SLP frame metadata carried alongside a token transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlpMeta {
    pub token_type: u8,
    pub tx_type: String,
    pub token_id: String,
}

/// Token genesis metadata as recorded on-chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisInfo {
    pub token_ticker: String,
    pub token_name: String,
    pub token_document_url: String,
    pub token_document_hash: String,
    pub decimals: u32,
}

/// Genesis lookup result attached to a classified transaction
///
/// `success = false` marks a cache miss: the raw integer amount passes
/// through unscaled and the caller may fetch + re-synthesise later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedGenesisInfo {
    pub success: bool,
    #[serde(default, flatten)]
    pub info: Option<GenesisInfo>,
}

impl ResolvedGenesisInfo {
    pub fn hit(info: GenesisInfo) -> Self {
        Self {
            success: true,
            info: Some(info),
        }
    }

    pub fn miss() -> Self {
        Self {
            success: false,
            info: None,
        }
    }
}

/// One transaction classified for the user-facing history feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTx {
    pub txid: String,
    pub incoming: bool,
    /// Net wallet XEC amount, 2-decimal display string
    pub xec_amount: String,
    pub is_etoken_tx: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etoken_amount: Option<String>,
    pub is_token_burn: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slp_meta: Option<SlpMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_info: Option<ResolvedGenesisInfo>,
    pub airdrop_flag: bool,
    pub airdrop_token_id: String,
    pub alias_flag: bool,
    pub op_return_message: String,
    pub is_cashtab_message: bool,
    pub is_encrypted_message: bool,
    /// Present only when decryption was attempted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decryption_success: Option<bool>,
    pub reply_address: String,
}

/// One resolved alias registration
///
/// At most one record exists per alias string, set by the earliest valid
/// chronological registration. Later registrations of the same name are
/// ignored, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasRecord {
    pub alias: String,
    pub owner_address: String,
    pub registering_txid: String,
    pub block_height: i64,
}
