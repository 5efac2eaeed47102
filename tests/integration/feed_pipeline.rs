//! Full synthesis passes over multi-address wallet histories

use tx_history_synth::config::AppConfig;
use tx_history_synth::synthesis::HistorySynthesizer;
use tx_history_synth::tokens::TokenInfoCache;
use tx_history_synth::types::{RawTx, SlpTokenEntry};
use tx_history_synth::wallet::{NoDecryptor, ScriptHexEncoder, WalletScriptSet};

use crate::common::{
    alias_registration, block_at, incoming_payment, input, outgoing_payment, output,
    FOREIGN_SCRIPT, OWNED_SCRIPT, OWNED_SCRIPT_2,
};

fn synthesizer(
) -> HistorySynthesizer<WalletScriptSet, TokenInfoCache, NoDecryptor, ScriptHexEncoder> {
    HistorySynthesizer::new(
        &AppConfig::get_defaults(),
        WalletScriptSet::new([OWNED_SCRIPT, OWNED_SCRIPT_2]),
        TokenInfoCache::default(),
        NoDecryptor,
        ScriptHexEncoder,
    )
}

/// A message tx to the wallet carrying a "\0tab" plaintext payload
fn message_tx(txid: &str, height: Option<i64>, tfs: u64, text: &str) -> RawTx {
    RawTx {
        txid: txid.to_string(),
        version: 2,
        inputs: vec![input(FOREIGN_SCRIPT, 3000)],
        outputs: vec![
            output(
                &format!("6a0400746162{:02x}{}", text.len(), hex::encode(text)),
                0,
            ),
            output(OWNED_SCRIPT, 2200),
        ],
        block: height.map(|h| block_at(h, tfs)),
        time_first_seen: tfs.to_string(),
        size: 260,
        network: "XEC".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_mixed_history_classifies_every_entry() {
    let pages = vec![
        vec![
            incoming_payment("pay1", Some(778610), 1676500000, 42000),
            outgoing_payment("send1", Some(778612), 1676520000, 100000),
        ],
        vec![
            // Legacy path saw the same outgoing tx via its change output
            outgoing_payment("send1", Some(778612), 1676520000, 100000),
            message_tx("msg1", None, 1676540000, "gm"),
            alias_registration("reg1", "foo10", OWNED_SCRIPT, 567, Some(778616), 1676530000),
        ],
    ];

    let feed = synthesizer().synthesize(pages);
    let txids: Vec<&str> = feed.iter().map(|(tx, _)| tx.txid.as_str()).collect();
    assert_eq!(txids, vec!["msg1", "reg1", "send1", "pay1"]);

    let by_txid = |id: &str| &feed.iter().find(|(tx, _)| tx.txid == id).unwrap().1;

    let pay = by_txid("pay1");
    assert!(pay.incoming);
    assert_eq!(pay.xec_amount, "420.00");
    assert_eq!(pay.reply_address, FOREIGN_SCRIPT);

    let send = by_txid("send1");
    assert!(!send.incoming);
    assert_eq!(send.reply_address, FOREIGN_SCRIPT);

    let msg = by_txid("msg1");
    assert!(msg.incoming);
    assert!(msg.is_cashtab_message);
    assert_eq!(msg.op_return_message, "gm");

    let reg = by_txid("reg1");
    assert!(reg.alias_flag);
    assert_eq!(reg.op_return_message, "foo10");
}

#[test]
fn test_alias_registry_from_the_same_pages() {
    let pages = vec![
        vec![alias_registration(
            "e1", "satoshi", OWNED_SCRIPT, 565, Some(770450), 100,
        )],
        vec![
            alias_registration("l1", "satoshi", FOREIGN_SCRIPT, 565, Some(770452), 200),
            incoming_payment("pay1", Some(770451), 150, 1000),
        ],
    ];
    let registry = synthesizer().resolve_aliases(pages);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry["satoshi"].registering_txid, "e1");
    assert_eq!(registry["satoshi"].owner_address, OWNED_SCRIPT);
}

#[test]
fn test_token_send_with_burn_surfaces_in_feed() {
    let token_id = "bef614aac85c0c866f4d39e4d12a96851267d38d1bca5bdd6488bbd42e28b6b1";
    let mut cache = TokenInfoCache::default();
    cache.insert(
        token_id.to_string(),
        tx_history_synth::types::GenesisInfo {
            token_ticker: "WDT".to_string(),
            token_name: "Test Token".to_string(),
            token_document_url: "example.com".to_string(),
            token_document_hash: String::new(),
            decimals: 9,
        },
    );
    let synth = HistorySynthesizer::new(
        &AppConfig::get_defaults(),
        WalletScriptSet::new([OWNED_SCRIPT]),
        cache,
        NoDecryptor,
        ScriptHexEncoder,
    );

    let mut spender = input(OWNED_SCRIPT, 546);
    spender.slp_token = Some(SlpTokenEntry {
        amount: "9876543156".to_string(),
        is_mint_baton: false,
    });
    let mut keep = output(OWNED_SCRIPT, 546);
    keep.slp_token = Some(SlpTokenEntry {
        amount: "9876543144".to_string(),
        is_mint_baton: false,
    });
    let mut send_script = String::from("6a04534c5000");
    send_script += "0101";
    send_script += &format!("04{}", hex::encode(b"SEND"));
    send_script += &format!("20{}", token_id);
    send_script += &format!("08{}", hex::encode(9_876_543_144u64.to_be_bytes()));
    let tx = RawTx {
        txid: "burn1".to_string(),
        version: 2,
        inputs: vec![spender],
        outputs: vec![output(&send_script, 0), keep],
        block: Some(block_at(778616, 1676571435)),
        time_first_seen: "1676571059".to_string(),
        size: 339,
        network: "XEC".to_string(),
        ..Default::default()
    };

    let feed = synth.synthesize(vec![vec![tx]]);
    let parsed = &feed[0].1;
    assert!(parsed.is_etoken_tx);
    assert!(parsed.is_token_burn);
    assert_eq!(parsed.etoken_amount.as_deref(), Some("0.000000012"));
    let meta = parsed.slp_meta.as_ref().unwrap();
    assert_eq!(meta.tx_type, "SEND");
    assert_eq!(meta.token_id, token_id);
}
