use serde::Deserialize;

/// Subset of the `/swap` response this utility consumes; every other field
/// in the upstream body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OneInchSwapResponse {
    pub tx: OneInchTx,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OneInchTx {
    /// Hex encoded transaction calldata, `0x` prefixed by the upstream
    pub data: String,
}
