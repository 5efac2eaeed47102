//! Typed data model for the indexer feed and its derived views

pub mod parsed;
pub mod tx;

pub use parsed::{AliasRecord, GenesisInfo, ParsedTx, ResolvedGenesisInfo, SlpMeta};
pub use tx::{parse_amount, BlockMeta, OutPoint, RawTx, SlpBurnEntry, SlpTokenEntry, TxInput, TxOutput};
