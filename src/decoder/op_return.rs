//! Lokad dispatch for wallet OP_RETURN sub-protocols
//!
//! Each recognised protocol has a `try_*()` helper over the pushdata stack;
//! `decode_op_return()` tries them in lokad order and is total - anything
//! malformed, truncated or unrecognised comes back as `Unknown`, never an
//! error. Frames are a closed tagged union, not open-ended dispatch.

use tracing::debug;

use crate::decoder::script::op_return_stack;
use crate::decoder::slp::{parse_slp_stack, SlpFrame};

/// Lokad identifiers: fixed 4-byte tags opening an OP_RETURN payload
pub mod lokad {
    /// SLP token protocol ("SLP\0")
    pub const SLP: &[u8] = &[0x53, 0x4c, 0x50, 0x00];
    /// Alias registration (".xec")
    pub const ALIAS: &[u8] = b".xec";
    /// Wallet message wrapper ("\0tab")
    pub const CASHTAB: &[u8] = &[0x00, 0x74, 0x61, 0x62];
    /// Encrypted wallet message ("etab")
    pub const CASHTAB_ENCRYPTED: &[u8] = b"etab";
    /// Airdrop marker ("drop")
    pub const AIRDROP: &[u8] = b"drop";
}

/// Maximum valid alias length in bytes; longer names decode but never bind
pub const ALIAS_MAX_BYTES: usize = 21;

/// Decoded OP_RETURN frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpReturnFrame {
    /// SLP token metadata (GENESIS / MINT / SEND)
    Token(SlpFrame),
    /// Alias registration payload
    Alias(AliasFrame),
    /// Plaintext wallet message
    PlainMessage { text: String },
    /// Encrypted wallet message; decryption is an external collaborator
    EncryptedMessage { ciphertext: Vec<u8> },
    /// Airdrop marker, optionally carrying a wrapped wallet message
    Airdrop {
        token_id: String,
        message: Option<Box<OpReturnFrame>>,
    },
    /// Not an OP_RETURN, unrecognised lokad, or malformed payload
    Unknown,
}

/// Alias registration payload
///
/// Off-spec payloads (empty, or longer than [`ALIAS_MAX_BYTES`]) decode
/// successfully and stay visible to classification, but must never bind a
/// name during alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasFrame {
    pub name: Vec<u8>,
    pub is_off_spec: bool,
    /// True when the registration rode inside a "\0tab" message wrapper;
    /// such a tx is both alias-flagged and a wallet message
    pub wrapped: bool,
}

impl AliasFrame {
    /// Alias name as text (lossy; resolution re-validates the charset)
    pub fn name_str(&self) -> String {
        String::from_utf8_lossy(&self.name).into_owned()
    }
}

impl OpReturnFrame {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

fn try_alias(rest: &[Vec<u8>], wrapped: bool) -> OpReturnFrame {
    let name = match rest.first() {
        Some(push) => push.clone(),
        None => Vec::new(),
    };
    let is_off_spec = name.is_empty() || name.len() > ALIAS_MAX_BYTES;
    OpReturnFrame::Alias(AliasFrame {
        name,
        is_off_spec,
        wrapped,
    })
}

/// Wrapped "\0tab" payload: either free text, or a nested lokad frame
fn try_cashtab(rest: &[Vec<u8>]) -> OpReturnFrame {
    let Some(first) = rest.first() else {
        return OpReturnFrame::Unknown;
    };

    // A nested alias registration rides inside the wrapper as
    // <".xec"><name> pushes, or as one concatenated ".xec<name>" push.
    if first.as_slice() == lokad::ALIAS {
        return try_alias(&rest[1..], true);
    }
    if first.len() > lokad::ALIAS.len() && first.starts_with(lokad::ALIAS) {
        let name = first[lokad::ALIAS.len()..].to_vec();
        let is_off_spec = name.len() > ALIAS_MAX_BYTES;
        return OpReturnFrame::Alias(AliasFrame {
            name,
            is_off_spec,
            wrapped: true,
        });
    }

    let text = rest
        .iter()
        .map(|push| String::from_utf8_lossy(push).into_owned())
        .collect::<Vec<_>>()
        .join("");
    OpReturnFrame::PlainMessage { text }
}

fn try_encrypted(rest: &[Vec<u8>]) -> OpReturnFrame {
    let ciphertext: Vec<u8> = rest.iter().flat_map(|push| push.iter().copied()).collect();
    if ciphertext.is_empty() {
        return OpReturnFrame::Unknown;
    }
    OpReturnFrame::EncryptedMessage { ciphertext }
}

fn try_airdrop(rest: &[Vec<u8>]) -> OpReturnFrame {
    let Some(token_id_push) = rest.first() else {
        return OpReturnFrame::Unknown;
    };
    if token_id_push.len() != 32 {
        return OpReturnFrame::Unknown;
    }

    // Optional wrapped message after the token id
    let message = match rest.get(1) {
        Some(push) if push.as_slice() == lokad::CASHTAB => match try_cashtab(&rest[2..]) {
            OpReturnFrame::Unknown => None,
            frame => Some(Box::new(frame)),
        },
        _ => None,
    };

    OpReturnFrame::Airdrop {
        token_id: hex::encode(token_id_push),
        message,
    }
}

/// Decode an output script as a wallet OP_RETURN frame
///
/// Total over all inputs: returns `Unknown` when the script is not an
/// OP_RETURN, its first push is not a recognised lokad, or the payload
/// does not satisfy that protocol's grammar.
pub fn decode_op_return(output_script_hex: &str) -> OpReturnFrame {
    let Some(stack) = op_return_stack(output_script_hex) else {
        return OpReturnFrame::Unknown;
    };
    let Some(lokad_push) = stack.first() else {
        return OpReturnFrame::Unknown;
    };

    let rest = &stack[1..];
    let frame = match lokad_push.as_slice() {
        lokad::SLP => match parse_slp_stack(rest) {
            Some(slp) => OpReturnFrame::Token(slp),
            None => OpReturnFrame::Unknown,
        },
        lokad::ALIAS => try_alias(rest, false),
        lokad::CASHTAB => try_cashtab(rest),
        lokad::CASHTAB_ENCRYPTED => try_encrypted(rest),
        lokad::AIRDROP => try_airdrop(rest),
        _ => OpReturnFrame::Unknown,
    };

    if frame.is_unknown() {
        debug!("unrecognised OP_RETURN payload: {}", output_script_hex);
    }
    frame
}
