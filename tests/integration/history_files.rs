//! CLI commands over dumped history files

use tx_history_synth::cli::commands::read_history_pages;
use tx_history_synth::cli::commands::aliases::AliasesCommand;
use tx_history_synth::cli::commands::decode::DecodeCommand;
use tx_history_synth::cli::commands::feed::FeedCommand;
use tx_history_synth::cli::commands::parse::ParseCommand;
use tx_history_synth::errors::AppError;

use crate::common::{
    alias_registration, incoming_payment, write_history_dump, OWNED_SCRIPT, OWNED_SCRIPT_2,
};

fn sample_pages() -> Vec<Vec<tx_history_synth::types::RawTx>> {
    vec![
        vec![
            incoming_payment("pay1", Some(778610), 1676500000, 42000),
            incoming_payment("mem1", None, 1676540000, 5000),
        ],
        vec![alias_registration(
            "reg1", "foo10", OWNED_SCRIPT, 567, Some(778616), 1676530000,
        )],
    ]
}

#[test]
fn test_read_history_pages_round_trips() {
    let pages = sample_pages();
    let file = write_history_dump(&pages);
    let loaded = read_history_pages(file.path()).unwrap();
    assert_eq!(loaded, pages);
}

#[test]
fn test_read_history_pages_missing_file_is_io_error() {
    let err = read_history_pages(std::path::Path::new("/nonexistent/history.json")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_read_history_pages_bad_json_is_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    use std::io::Write;
    file.write_all(b"{ not json ").unwrap();
    let err = read_history_pages(file.path()).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn test_parse_command_runs_over_dump() {
    let file = write_history_dump(&sample_pages());
    let command = ParseCommand {
        history: file.path().to_path_buf(),
        scripts: format!("{},{}", OWNED_SCRIPT, OWNED_SCRIPT_2),
        display_count: Some(2),
    };
    command.run().unwrap();
}

#[test]
fn test_aliases_command_runs_over_dump() {
    let file = write_history_dump(&sample_pages());
    let command = AliasesCommand {
        history: file.path().to_path_buf(),
    };
    command.run().unwrap();
}

#[test]
fn test_feed_command_runs_over_dump() {
    let file = write_history_dump(&sample_pages());
    let command = FeedCommand {
        history: file.path().to_path_buf(),
    };
    command.run().unwrap();
}

#[test]
fn test_decode_command_accepts_any_script() {
    DecodeCommand {
        script: "6a042e78656305666f6f3130".to_string(),
    }
    .run()
    .unwrap();

    // Malformed scripts decode to the unknown frame, never an error
    DecodeCommand {
        script: "not-hex".to_string(),
    }
    .run()
    .unwrap();
}
