use clap::Args;
use serde_json::json;
use tracing::info;

use crate::decoder::{decode_op_return, OpReturnFrame};
use crate::errors::AppResult;

/// Decode a single OP_RETURN output script
#[derive(Args)]
pub struct DecodeCommand {
    /// Output script as hex, starting with the OP_RETURN opcode (6a)
    pub script: String,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        info!("Decoding OP_RETURN script ({} hex chars)", self.script.len());
        let frame = decode_op_return(&self.script);
        println!("{}", serde_json::to_string_pretty(&frame_json(&frame))?);
        Ok(())
    }
}

/// Render a decoded frame as JSON for CLI output
fn frame_json(frame: &OpReturnFrame) -> serde_json::Value {
    match frame {
        OpReturnFrame::Token(slp) => json!({
            "protocol": "slp",
            "tokenType": slp.token_type,
            "txType": slp.tx_type.as_str(),
            "tokenId": slp.token_id,
            "genesisInfo": slp.genesis_info,
            "amounts": slp.amounts.iter().map(|a| a.to_string()).collect::<Vec<_>>(),
        }),
        OpReturnFrame::Alias(alias) => json!({
            "protocol": "alias",
            "name": alias.name_str(),
            "isOffSpec": alias.is_off_spec,
            "wrapped": alias.wrapped,
        }),
        OpReturnFrame::PlainMessage { text } => json!({
            "protocol": "cashtabMessage",
            "text": text,
        }),
        OpReturnFrame::EncryptedMessage { ciphertext } => json!({
            "protocol": "cashtabEncrypted",
            "ciphertextHex": hex::encode(ciphertext),
        }),
        OpReturnFrame::Airdrop { token_id, message } => json!({
            "protocol": "airdrop",
            "tokenId": token_id,
            "message": message.as_deref().map(frame_json),
        }),
        OpReturnFrame::Unknown => json!({ "protocol": "unknown" }),
    }
}
