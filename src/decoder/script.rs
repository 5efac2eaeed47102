//! OP_RETURN script reading
//!
//! Splits an OP_RETURN outputScript into its pushdata stack. Declared
//! PUSHDATA lengths are respected so trailing garbage never leaks into a
//! decoded payload; any truncation or non-push opcode fails the whole read
//! and the caller degrades to `Unknown`.

use byteorder::{ByteOrder, LittleEndian};

/// OP_RETURN opcode
pub const OP_RETURN: u8 = 0x6a;

/// OP_PUSHDATA1 / 2 / 4
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;

/// Consume the next push from `bytes` starting at `pos`
///
/// Returns the pushed payload and the position after it, or `None` when the
/// opcode is not a push or the declared length overruns the script.
fn consume_next_push(bytes: &[u8], pos: usize) -> Option<(Vec<u8>, usize)> {
    let op = *bytes.get(pos)?;
    let (data_start, len) = match op {
        // OP_0 pushes an empty byte string
        0x00 => (pos + 1, 0),
        n @ 0x01..=0x4b => (pos + 1, n as usize),
        OP_PUSHDATA1 => {
            let len = *bytes.get(pos + 1)? as usize;
            (pos + 2, len)
        }
        OP_PUSHDATA2 => {
            let raw = bytes.get(pos + 1..pos + 3)?;
            (pos + 3, LittleEndian::read_u16(raw) as usize)
        }
        OP_PUSHDATA4 => {
            let raw = bytes.get(pos + 1..pos + 5)?;
            (pos + 5, LittleEndian::read_u32(raw) as usize)
        }
        // OP_1NEGATE..OP_16 and everything else: not a data push we accept
        _ => return None,
    };

    let data = bytes.get(data_start..data_start + len)?;
    Some((data.to_vec(), data_start + len))
}

/// Split an OP_RETURN script (hex) into its pushdata stack
///
/// Returns `None` unless the script decodes as hex, begins with OP_RETURN
/// and consists solely of well-formed pushes after it. Empty pushes are
/// kept: several payload grammars (SLP genesis document hash) are
/// positional and a dropped empty push would shift every later field.
pub fn op_return_stack(script_hex: &str) -> Option<Vec<Vec<u8>>> {
    let bytes = hex::decode(script_hex).ok()?;
    if bytes.first() != Some(&OP_RETURN) {
        return None;
    }

    let mut stack = Vec::new();
    let mut pos = 1;
    while pos < bytes.len() {
        let (data, next) = consume_next_push(&bytes, pos)?;
        stack.push(data);
        pos = next;
    }
    Some(stack)
}

/// Check whether a script hex is an OP_RETURN script at all
pub fn is_op_return_script(script_hex: &str) -> bool {
    hex::decode(script_hex)
        .map(|bytes| bytes.first() == Some(&OP_RETURN))
        .unwrap_or(false)
}
