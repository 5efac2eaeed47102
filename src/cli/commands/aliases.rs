use std::path::PathBuf;

use clap::Args;

use crate::cli::commands::read_history_pages;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::synthesis::{merge_histories, resolve_aliases};
use crate::wallet::{LengthScaledFeePolicy, ScriptHexEncoder};

/// Resolve the alias registry from a dumped history
#[derive(Args)]
pub struct AliasesCommand {
    /// History dump: JSON array of per-address arrays of transactions
    #[arg(long)]
    pub history: PathBuf,
}

impl AliasesCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::get_defaults();
        let fees = LengthScaledFeePolicy {
            base_fee_sats: config.alias.base_fee_sats,
            max_length: config.alias.max_length,
        };

        let pages = read_history_pages(&self.history)?;
        let merged = merge_histories(pages);
        let registry = resolve_aliases(
            merged,
            &config.alias.registration_script,
            &fees,
            &ScriptHexEncoder,
        );
        println!("{}", serde_json::to_string_pretty(&registry)?);
        Ok(())
    }
}
