//! SLP token frame payload parsing
//!
//! Grammar after the `"SLP\0"` lokad push:
//! token-type byte, tx-type string, 32-byte token id, then type-specific
//! pushes - genesis: ticker/name/url/hash/decimals/qty; send: per-output
//! 8-byte big-endian amounts; mint: baton byte + qty.

use byteorder::{BigEndian, ByteOrder};

use crate::types::GenesisInfo;

/// Decoded SLP frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlpFrame {
    pub token_type: u8,
    pub tx_type: SlpTxType,
    /// 64-hex token id
    pub token_id: String,
    /// Genesis metadata, present for GENESIS frames only
    pub genesis_info: Option<GenesisInfo>,
    /// Raw per-output amounts for SEND, or the minted/issued quantity
    pub amounts: Vec<u128>,
}

/// SLP transaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlpTxType {
    Genesis,
    Mint,
    Send,
    Unknown,
}

impl SlpTxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
            Self::Unknown => "UNKNOWN",
        }
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        match bytes {
            b"GENESIS" => Self::Genesis,
            b"MINT" => Self::Mint,
            b"SEND" => Self::Send,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for SlpTxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read an SLP quantity push (8 bytes, big-endian)
fn read_qty(push: &[u8]) -> Option<u128> {
    if push.len() != 8 {
        return None;
    }
    Some(BigEndian::read_u64(push) as u128)
}

/// Parse the pushdata stack of an SLP OP_RETURN (lokad push excluded)
///
/// Returns `None` on any grammar violation; the caller reports `Unknown`.
pub fn parse_slp_stack(stack: &[Vec<u8>]) -> Option<SlpFrame> {
    let token_type = match stack.first()?.as_slice() {
        [t] => *t,
        _ => return None,
    };
    let tx_type = SlpTxType::from_bytes(stack.get(1)?);
    if tx_type == SlpTxType::Unknown {
        return None;
    }

    let token_id_push = stack.get(2)?;
    if token_id_push.len() != 32 {
        return None;
    }
    let token_id = hex::encode(token_id_push);

    let rest = &stack[3..];
    match tx_type {
        SlpTxType::Genesis => {
            // ticker, name, url, hash, decimals, qty
            if rest.len() < 6 {
                return None;
            }
            let decimals = match rest[4].as_slice() {
                [d] if *d <= 9 => *d as u32,
                _ => return None,
            };
            let qty = read_qty(&rest[5])?;
            Some(SlpFrame {
                token_type,
                tx_type,
                token_id,
                genesis_info: Some(GenesisInfo {
                    token_ticker: String::from_utf8_lossy(&rest[0]).into_owned(),
                    token_name: String::from_utf8_lossy(&rest[1]).into_owned(),
                    token_document_url: String::from_utf8_lossy(&rest[2]).into_owned(),
                    token_document_hash: hex::encode(&rest[3]),
                    decimals,
                }),
                amounts: vec![qty],
            })
        }
        SlpTxType::Mint => {
            // baton vout byte, qty
            if rest.len() < 2 {
                return None;
            }
            let qty = read_qty(&rest[1])?;
            Some(SlpFrame {
                token_type,
                tx_type,
                token_id,
                genesis_info: None,
                amounts: vec![qty],
            })
        }
        SlpTxType::Send => {
            // one 8-byte amount per non-OP_RETURN output
            if rest.is_empty() {
                return None;
            }
            let mut amounts = Vec::with_capacity(rest.len());
            for push in rest {
                amounts.push(read_qty(push)?);
            }
            Some(SlpFrame {
                token_type,
                tx_type,
                token_id,
                genesis_info: None,
                amounts,
            })
        }
        SlpTxType::Unknown => None,
    }
}
