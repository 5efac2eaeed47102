//! OP_RETURN sub-protocol decoding
//!
//! One total decode path: hex script -> pushdata stack -> lokad dispatch ->
//! closed `OpReturnFrame` union. Malformed input degrades to `Unknown`.

pub mod op_return;
pub mod script;
pub mod slp;

pub use op_return::{decode_op_return, AliasFrame, OpReturnFrame, ALIAS_MAX_BYTES};
pub use script::{is_op_return_script, op_return_stack};
pub use slp::{SlpFrame, SlpTxType};
