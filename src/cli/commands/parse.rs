use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::commands::read_history_pages;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::synthesis::HistorySynthesizer;
use crate::tokens::TokenInfoCache;
use crate::wallet::{NoDecryptor, ScriptHexEncoder, WalletScriptSet};

/// Merge, sort and classify a dumped per-address history
#[derive(Args)]
pub struct ParseCommand {
    /// History dump: JSON array of per-address arrays of transactions
    #[arg(long)]
    pub history: PathBuf,

    /// Comma-separated owned output scripts (hex), one per wallet address
    #[arg(long)]
    pub scripts: String,

    /// Number of feed entries to keep (overrides config)
    #[arg(long)]
    pub display_count: Option<usize>,
}

impl ParseCommand {
    pub fn run(&self) -> AppResult<()> {
        let mut config = AppConfig::get_defaults();
        if let Some(count) = self.display_count {
            config.history.display_count = count;
        }

        let scripts: Vec<&str> = self
            .scripts
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        info!(
            scripts = scripts.len(),
            "classifying history for wallet scripts"
        );

        let synthesizer = HistorySynthesizer::new(
            &config,
            WalletScriptSet::new(scripts),
            TokenInfoCache::default(),
            NoDecryptor,
            ScriptHexEncoder,
        );

        let pages = read_history_pages(&self.history)?;
        let feed = synthesizer.synthesize(pages);
        let parsed: Vec<_> = feed.iter().map(|(_, parsed)| parsed).collect();
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        Ok(())
    }
}
