//! Amount formatting for XEC and token quantities
//!
//! All scaling is exact integer/string arithmetic - display strings feed
//! user-facing history and burn warnings, so floating point is out.

/// Satoshis per XEC display unit (XEC has 2 decimal places)
pub const SATS_PER_XEC: u64 = 100;

/// Format a satoshi amount as a 2-decimal XEC display string
///
/// # Examples
/// ```
/// use tx_history_synth::utils::amount::sats_to_xec;
///
/// assert_eq!(sats_to_xec(551), "5.51");
/// assert_eq!(sats_to_xec(100_000), "1000.00");
/// assert_eq!(sats_to_xec(7), "0.07");
/// ```
pub fn sats_to_xec(sats: u64) -> String {
    format!("{}.{:02}", sats / SATS_PER_XEC, sats % SATS_PER_XEC)
}

/// Scale a raw integer token amount by `10^-decimals` into a display string
///
/// Trailing fractional zeros are kept only up to the token's declared
/// precision, exactly as the genesis recorded it.
///
/// # Examples
/// ```
/// use tx_history_synth::utils::amount::scale_token_amount;
///
/// assert_eq!(scale_token_amount(7_777_777_777, 7), "777.7777777");
/// assert_eq!(scale_token_amount(12, 9), "0.000000012");
/// assert_eq!(scale_token_amount(42, 0), "42");
/// ```
pub fn scale_token_amount(raw: u128, decimals: u32) -> String {
    if decimals == 0 {
        return raw.to_string();
    }
    // The wire format caps decimals at 9, but injected metadata is not
    // validated; an unrepresentable divisor falls back to the raw amount
    let Some(divisor) = 10u128.checked_pow(decimals) else {
        return raw.to_string();
    };
    let whole = raw / divisor;
    let frac = raw % divisor;
    format!("{}.{:0width$}", whole, frac, width = decimals as usize)
}
