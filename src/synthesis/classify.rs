//! Per-transaction classification for the history feed
//!
//! Direction follows the wallet's net satoshi flow across the transaction,
//! which resolves self-sends and change without special cases. Everything
//! protocol-specific (token metadata, decryption, address rendering) goes
//! through the injected collaborators, so classification itself stays pure.

use tracing::debug;

use crate::decoder::{decode_op_return, is_op_return_script, OpReturnFrame};
use crate::tokens::{resolve_token_amount, TokenMetadataLookup};
use crate::types::{parse_amount, ParsedTx, RawTx, ResolvedGenesisInfo, SlpMeta};
use crate::utils::amount::{sats_to_xec, scale_token_amount};
use crate::wallet::{AddressEncoder, MessageDecryptor, OwnedScripts};

/// Classify one raw transaction into its feed entry.
///
/// Never fails: malformed or unrecognised chain data degrades the affected
/// field to its default and the rest of the entry still classifies.
pub fn classify_tx(
    tx: &RawTx,
    wallet: &dyn OwnedScripts,
    tokens: &dyn TokenMetadataLookup,
    decryptor: &dyn MessageDecryptor,
    encoder: &dyn AddressEncoder,
) -> ParsedTx {
    let frame = match tx.first_output_script() {
        Some(script) => decode_op_return(script),
        None => OpReturnFrame::Unknown,
    };

    let mut parsed = ParsedTx {
        txid: tx.txid.clone(),
        incoming: false,
        xec_amount: "0.00".to_string(),
        is_etoken_tx: false,
        etoken_amount: None,
        is_token_burn: false,
        slp_meta: None,
        genesis_info: None,
        airdrop_flag: false,
        airdrop_token_id: String::new(),
        alias_flag: false,
        op_return_message: String::new(),
        is_cashtab_message: false,
        is_encrypted_message: false,
        decryption_success: None,
        reply_address: String::new(),
    };

    classify_direction(tx, wallet, &mut parsed);
    classify_token(tx, &frame, wallet, tokens, &mut parsed);
    apply_frame(&frame, decryptor, &mut parsed);
    parsed.reply_address = reply_address(tx, wallet, encoder, parsed.incoming);

    debug!(
        txid = %parsed.txid,
        incoming = parsed.incoming,
        token = parsed.is_etoken_tx,
        "classified tx"
    );
    parsed
}

/// Net-flow direction: the wallet received iff it owns more satoshis in
/// outputs than it spent in inputs. The displayed amount is the absolute
/// net, so change never inflates a send.
fn classify_direction(tx: &RawTx, wallet: &dyn OwnedScripts, parsed: &mut ParsedTx) {
    let inputs_owned: u64 = tx
        .inputs
        .iter()
        .filter(|i| {
            i.output_script
                .as_deref()
                .is_some_and(|s| wallet.is_owned(s))
        })
        .map(|i| i.value_sats())
        .sum();
    let outputs_owned: u64 = tx
        .outputs
        .iter()
        .filter(|o| wallet.is_owned(&o.output_script))
        .map(|o| o.value_sats())
        .sum();

    parsed.incoming = tx.is_coinbase || outputs_owned > inputs_owned;
    parsed.xec_amount = sats_to_xec(outputs_owned.abs_diff(inputs_owned));
}

fn classify_token(
    tx: &RawTx,
    frame: &OpReturnFrame,
    wallet: &dyn OwnedScripts,
    tokens: &dyn TokenMetadataLookup,
    parsed: &mut ParsedTx,
) {
    let slp_frame = match frame {
        OpReturnFrame::Token(f) => Some(f),
        _ => None,
    };

    let inputs_carry_token = tx
        .inputs
        .iter()
        .any(|i| i.slp_token.is_some() || i.slp_burn.is_some());
    parsed.is_etoken_tx = inputs_carry_token || slp_frame.is_some();
    if !parsed.is_etoken_tx {
        return;
    }

    let token_id = slp_frame
        .map(|f| f.token_id.clone())
        .or_else(|| {
            tx.inputs
                .iter()
                .find_map(|i| i.slp_burn.as_ref().map(|b| b.token_id.clone()))
        })
        .unwrap_or_default();

    if let Some(f) = slp_frame {
        parsed.slp_meta = Some(SlpMeta {
            token_type: f.token_type,
            tx_type: f.tx_type.as_str().to_string(),
            token_id: f.token_id.clone(),
        });
    }

    // Burn iff the inputs consumed more of the token than the outputs
    // recreate; the indexer's explicit burn entries count as consumed
    let input_token_sum: u128 = tx
        .inputs
        .iter()
        .map(|i| {
            let held = i
                .slp_token
                .as_ref()
                .map(|t| parse_amount(&t.amount))
                .unwrap_or(0);
            let burned = i
                .slp_burn
                .as_ref()
                .map(|b| parse_amount(&b.token.amount))
                .unwrap_or(0);
            held + burned
        })
        .sum();
    let output_token_sum: u128 = tx
        .outputs
        .iter()
        .filter_map(|o| o.slp_token.as_ref())
        .map(|t| parse_amount(&t.amount))
        .sum();
    parsed.is_token_burn = input_token_sum > output_token_sum;

    // Displayed quantity: the burned excess for a burn, otherwise the
    // token amount landing on the wallet's own outputs
    let raw_amount = if parsed.is_token_burn {
        input_token_sum - output_token_sum
    } else {
        tx.outputs
            .iter()
            .filter(|o| wallet.is_owned(&o.output_script))
            .filter_map(|o| o.slp_token.as_ref())
            .map(|t| parse_amount(&t.amount))
            .sum()
    };

    // A GENESIS frame carries its own metadata; everything else resolves
    // through the cache and passes the raw integer through on a miss
    let (resolved, scaled) = match slp_frame.and_then(|f| f.genesis_info.as_ref()) {
        Some(info) => (
            ResolvedGenesisInfo::hit(info.clone()),
            scale_token_amount(raw_amount, info.decimals),
        ),
        None => resolve_token_amount(tokens, &token_id, raw_amount),
    };
    parsed.genesis_info = Some(resolved);
    parsed.etoken_amount = Some(scaled);
}

/// Fold a decoded frame's protocol flags into the entry. Airdrop wrappers
/// recurse once for their nested message frame.
fn apply_frame(frame: &OpReturnFrame, decryptor: &dyn MessageDecryptor, parsed: &mut ParsedTx) {
    match frame {
        OpReturnFrame::Alias(alias) => {
            parsed.alias_flag = true;
            parsed.op_return_message = alias.name_str();
            if alias.wrapped {
                parsed.is_cashtab_message = true;
            }
        }
        OpReturnFrame::PlainMessage { text } => {
            parsed.is_cashtab_message = true;
            parsed.op_return_message = text.clone();
        }
        OpReturnFrame::EncryptedMessage { ciphertext } => {
            parsed.is_encrypted_message = true;
            match decryptor.decrypt(ciphertext) {
                Some(plaintext) => {
                    parsed.decryption_success = Some(true);
                    parsed.op_return_message = plaintext;
                }
                None => {
                    parsed.decryption_success = Some(false);
                }
            }
        }
        OpReturnFrame::Airdrop { token_id, message } => {
            parsed.airdrop_flag = true;
            parsed.airdrop_token_id = token_id.clone();
            if let Some(inner) = message {
                apply_frame(inner, decryptor, parsed);
            }
        }
        OpReturnFrame::Token(_) | OpReturnFrame::Unknown => {}
    }
}

/// Who to reply to: the primary funder for incoming transactions, the
/// first foreign recipient for outgoing ones. Coinbase has no sender.
fn reply_address(
    tx: &RawTx,
    wallet: &dyn OwnedScripts,
    encoder: &dyn AddressEncoder,
    incoming: bool,
) -> String {
    if tx.is_coinbase {
        return "N/A".to_string();
    }
    let script = if incoming {
        tx.inputs
            .iter()
            .max_by_key(|i| i.value_sats())
            .and_then(|i| i.output_script.as_deref())
    } else {
        tx.outputs
            .iter()
            .find(|o| !is_op_return_script(&o.output_script) && !wallet.is_owned(&o.output_script))
            .map(|o| o.output_script.as_str())
    };
    script
        .and_then(|s| encoder.encode(s))
        .unwrap_or_else(|| "N/A".to_string())
}
