use serde::{Deserialize, Serialize};

use crate::routers::swap::SwapRequest;
use crate::utils::number_conversion::slippage_fraction;

/// Wire form of the `/swap` query, field names exactly as the upstream
/// expects them. Addresses stay bare hex here; the `0x` prefix is applied
/// when the query string is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneInchSwapRequest {
    /// contract address of a token to sell
    pub src: String,
    /// contract address of a token to buy
    pub dst: String,
    /// amount of a token to sell, set in minimal divisible units
    pub amount: String,
    /// address of a seller, make sure that this address has approved to spend src
    /// in needed amount
    pub from: String,
    /// recipient address of a purchased token
    pub receiver: String,
    /// price slippage as a fraction of one, e.g. "0.005" for 50 bps.
    /// Kept as a string so the query emits it verbatim
    pub slippage: String,
}

impl From<&SwapRequest> for OneInchSwapRequest {
    fn from(request: &SwapRequest) -> Self {
        Self {
            src: request.token_in.clone(),
            dst: request.token_out.clone(),
            amount: request.amount.clone(),
            from: request.sender.clone(),
            receiver: request.receiver.clone(),
            slippage: slippage_fraction(request.slippage_bps),
        }
    }
}
