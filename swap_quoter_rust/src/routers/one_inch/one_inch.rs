use error_stack::ResultExt as _;
use quote_models::error::Error as ModelsError;
use quote_models::network::http::{handle_reqwest_response, value_to_sorted_querystring};
use rand::Rng;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::{
    credentials::CredentialPool,
    error::{Error, QuoterResult},
    routers::{
        one_inch::{OneInchConfig, requests::OneInchSwapRequest, responses::OneInchSwapResponse},
        swap::SwapRequest,
    },
    throttle::jitter_sleep,
};

/// Requests a ready-to-submit swap transaction from 1inch.
///
/// Issues exactly one `GET {base}/{chain}/swap` call authenticated with
/// `api_key`. An upstream failure status is surfaced as-is; there is no
/// retry and no backoff.
pub async fn one_inch_swap(
    client: &Client,
    api_key: &str,
    config: &OneInchConfig,
    request: OneInchSwapRequest,
) -> QuoterResult<OneInchSwapResponse> {
    let query = json!({
        "src": format!("0x{}", request.src),
        "dst": format!("0x{}", request.dst),
        "amount": request.amount,
        "from": format!("0x{}", request.from),
        "receiver": format!("0x{}", request.receiver),
        "slippage": request.slippage,
        "disableEstimate": true,
        "allowPartialFill": false,
    });

    let query_string = value_to_sorted_querystring(&query).change_context(Error::ParseError)?;

    let base_url = &config.base_url;
    let chain = config.chain_id;

    let url = format!("{base_url}/{chain}/swap?{query_string}");
    debug!("Requesting 1inch swap: {url}");

    let response = client
        .get(&url)
        .bearer_auth(api_key)
        .header("accept", "application/json")
        .send()
        .await
        .change_context(Error::ReqwestError)
        .attach_printable("Error in 1inch request")?;

    let swap_response: OneInchSwapResponse = match handle_reqwest_response(response).await {
        Ok(swap_response) => swap_response,
        Err(err) => {
            let context = match err.current_context() {
                ModelsError::ResponseStatus { status, body } => {
                    Error::UpstreamError(format!("1inch returned status {status}: {body}"))
                }
                _ => Error::MalformedResponse,
            };
            return Err(err.change_context(context));
        }
    };

    Ok(swap_response)
}

/// Runs one full quote invocation: jitter delay, credential pick, swap call,
/// calldata extraction.
///
/// The delay and the request never overlap; the delay always completes
/// first. Errors abort immediately. A caller that wants another attempt
/// invokes again and re-rolls both the delay and the credential.
pub async fn get_swap_tx<R: Rng>(
    client: &Client,
    config: &OneInchConfig,
    credentials: &CredentialPool,
    request: SwapRequest,
    rng: &mut R,
) -> QuoterResult<String> {
    jitter_sleep(rng, config.max_jitter).await;

    let api_key = credentials.pick(rng);
    let swap_request = OneInchSwapRequest::from(&request);

    let swap_response = one_inch_swap(client, api_key, config, swap_request).await?;

    Ok(swap_response.tx.data)
}
