use error_stack::{ResultExt, report};

use crate::error::{Error, QuoterResult};
use crate::utils::number_conversion::decimal_to_hex;

/// One swap quote invocation. Built fresh from external input, immutable
/// afterwards, discarded once the call completes.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    /// Address of wallet that will spend tokens, bare lowercase hex
    pub sender: String,
    /// Tokens OUT receiver, bare lowercase hex
    pub receiver: String,
    /// Token IN address, bare lowercase hex
    pub token_in: String,
    /// Token OUT address, bare lowercase hex
    pub token_out: String,
    /// Amount IN in minimal divisible units, decimal string
    pub amount: String,
    /// Slippage tolerance in basis points, 0..=10000
    pub slippage_bps: u32,
}

impl SwapRequest {
    /// Builds a request from raw invocation inputs.
    ///
    /// The four identifiers arrive as decimal numeric strings and are
    /// normalized to bare hex; `amount` passes through unchanged; `slippage`
    /// is an integer basis point value.
    pub fn from_args(
        sender: &str,
        receiver: &str,
        token_in: &str,
        token_out: &str,
        amount: &str,
        slippage: &str,
    ) -> QuoterResult<Self> {
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(report!(Error::InvalidIdentifier)
                .attach_printable(format!("Amount is not a decimal unsigned integer: {amount}")));
        }

        let slippage_bps = slippage
            .parse::<u32>()
            .change_context(Error::InvalidIdentifier)
            .attach_printable(format!("Invalid slippage basis points: {slippage}"))?;
        if slippage_bps > 10_000 {
            return Err(report!(Error::InvalidIdentifier)
                .attach_printable(format!("Slippage {slippage_bps} exceeds 10000 basis points")));
        }

        Ok(Self {
            sender: decimal_to_hex(sender).attach_printable("Failed to normalize sender")?,
            receiver: decimal_to_hex(receiver).attach_printable("Failed to normalize receiver")?,
            token_in: decimal_to_hex(token_in).attach_printable("Failed to normalize token_in")?,
            token_out: decimal_to_hex(token_out)
                .attach_printable("Failed to normalize token_out")?,
            amount: amount.to_string(),
            slippage_bps,
        })
    }
}
