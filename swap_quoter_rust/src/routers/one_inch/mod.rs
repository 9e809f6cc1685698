pub mod one_inch;
pub mod requests;
pub mod responses;

use std::time::Duration;

use crate::throttle::MAX_REQUEST_JITTER;

// https://portal.1inch.dev/documentation/apis/swap/classic-swap/introduction
pub const BASE_1INCH_API_URL: &str = "https://api.1inch.dev/swap/v5.2";

/// The one network this utility quotes on (Ethereum mainnet).
pub const ETHEREUM_CHAIN_ID: u32 = 1;

/// Upstream endpoint parameters for the quote client.
///
/// `Default` matches the production deployment; tests substitute their own
/// `base_url` and a zero jitter window.
#[derive(Debug, Clone)]
pub struct OneInchConfig {
    pub base_url: String,
    pub chain_id: u32,
    /// Upper bound of the random delay inserted before each request
    pub max_jitter: Duration,
}

impl Default for OneInchConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_1INCH_API_URL.to_string(),
            chain_id: ETHEREUM_CHAIN_ID,
            max_jitter: MAX_REQUEST_JITTER,
        }
    }
}
