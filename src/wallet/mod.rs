//! Injected wallet collaborators
//!
//! The synthesis core never derives keys, encodes addresses or decrypts
//! messages itself - those live behind narrow trait seams supplied at
//! construction time. A missing collaborator is therefore a compile error,
//! not a per-transaction failure; a collaborator *miss* (unknown script,
//! failed decryption) degrades the one affected field.

use std::collections::HashSet;

/// Predicate over output scripts: does this wallet own the script?
pub trait OwnedScripts {
    fn is_owned(&self, output_script: &str) -> bool;
}

/// Owned script set for one wallet across its derivation paths
#[derive(Debug, Clone, Default)]
pub struct WalletScriptSet {
    scripts: HashSet<String>,
}

impl WalletScriptSet {
    pub fn new<I, S>(scripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scripts: scripts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl OwnedScripts for WalletScriptSet {
    fn is_owned(&self, output_script: &str) -> bool {
        self.scripts.contains(output_script)
    }
}

/// Message decryption seam (ECDH/AES-GCM lives outside this crate)
///
/// Returns the plaintext, or `None` when decryption fails or the message
/// was not addressed to this wallet.
pub trait MessageDecryptor {
    fn decrypt(&self, ciphertext: &[u8]) -> Option<String>;
}

/// Decryptor for wallets without a message key: every attempt misses
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecryptor;

impl MessageDecryptor for NoDecryptor {
    fn decrypt(&self, _ciphertext: &[u8]) -> Option<String> {
        None
    }
}

/// Address encoding seam
///
/// The classifier only selects *which* script becomes the reply address;
/// rendering it as a cash address is external.
pub trait AddressEncoder {
    fn encode(&self, output_script: &str) -> Option<String>;
}

/// Pass-through encoder: reports the raw outputScript hex
///
/// Useful for tests and for consumers that encode lazily at render time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptHexEncoder;

impl AddressEncoder for ScriptHexEncoder {
    fn encode(&self, output_script: &str) -> Option<String> {
        Some(output_script.to_string())
    }
}

/// Alias registration fee schedule seam
///
/// The live registration contract prices by name length per price epoch;
/// the schedule is injected so it can change without touching replay logic.
pub trait RegistrationFeePolicy {
    /// Minimum fee in satoshis for a name of `alias_len` bytes
    fn required_fee_sats(&self, alias_len: usize) -> u64;
}

/// Length-scaled schedule from the current price epoch:
/// 571 sats for a 1-byte name down to 551 sats for the 21-byte maximum.
#[derive(Debug, Clone, Copy)]
pub struct LengthScaledFeePolicy {
    pub base_fee_sats: u64,
    pub max_length: usize,
}

impl Default for LengthScaledFeePolicy {
    fn default() -> Self {
        Self {
            base_fee_sats: 551,
            max_length: 21,
        }
    }
}

impl RegistrationFeePolicy for LengthScaledFeePolicy {
    fn required_fee_sats(&self, alias_len: usize) -> u64 {
        // Shorter names cost more; clamp out-of-range lengths to the
        // maximum-length price so callers can ask before validating
        let len = alias_len.clamp(1, self.max_length) as u64;
        self.base_fee_sats + (self.max_length as u64 - len)
    }
}
