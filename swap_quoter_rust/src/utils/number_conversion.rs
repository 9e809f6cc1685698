use crate::error::{Error, QuoterResult};
use error_stack::ResultExt;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// Converts a decimal numeric identifier into bare lowercase hex.
///
/// No `0x` prefix and no zero padding are applied; `"255"` becomes `"ff"`,
/// `"0"` stays `"0"`. Values up to 2^256-1 are accepted.
pub fn decimal_to_hex(input: &str) -> QuoterResult<String> {
    let value = U256::from_dec_str(input)
        .change_context(Error::InvalidIdentifier)
        .attach_printable(format!("Not a non-negative integer: {input}"))?;

    Ok(format!("{value:x}"))
}

/// Converts slippage basis points into the fractional percentage string the
/// upstream expects: `50` → `"0.005"`, `10000` → `"1"`, `0` → `"0"`.
pub fn slippage_fraction(slippage_bps: u32) -> String {
    (f64::from(slippage_bps) / 10_000.0).to_string()
}
