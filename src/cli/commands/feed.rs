use std::path::PathBuf;

use chrono::DateTime;
use clap::Args;

use crate::cli::commands::read_history_pages;
use crate::errors::AppResult;
use crate::synthesis::{merge_histories, sort_feed};
use crate::types::RawTx;

/// Show the merged feed order with confirmation summaries
#[derive(Args)]
pub struct FeedCommand {
    /// History dump: JSON array of per-address arrays of transactions
    #[arg(long)]
    pub history: PathBuf,
}

impl FeedCommand {
    pub fn run(&self) -> AppResult<()> {
        let pages = read_history_pages(&self.history)?;
        let mut merged = merge_histories(pages);
        sort_feed(&mut merged);

        for tx in &merged {
            println!("{}", summary_line(tx));
        }
        Ok(())
    }
}

fn summary_line(tx: &RawTx) -> String {
    let confirmation = match tx.block_height() {
        Some(height) => format!("height {}", height),
        None => "unconfirmed".to_string(),
    };
    format!(
        "{}  {}  first seen {}",
        tx.txid,
        confirmation,
        format_timestamp(tx.time_first_seen_secs())
    )
}

/// Unix seconds as a UTC timestamp; 0 (unknown) stays numeric
fn format_timestamp(secs: u64) -> String {
    if secs == 0 {
        return "unknown".to_string();
    }
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => secs.to_string(),
    }
}
