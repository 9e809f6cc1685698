use std::process;

use quote_models::log::init_tracing;
use reqwest::Client;
use swap_quoter_rust::{
    credentials::{CredentialPool, ONEINCH_API_KEYS_ENV},
    error::ReportDisplayExt,
    routers::{
        one_inch::{OneInchConfig, one_inch::get_swap_tx},
        swap::SwapRequest,
    },
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("get_swap_tx error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    dotenv::dotenv().ok();
    init_tracing(false);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [sender, receiver, token_in, token_out, amount, slippage] = args.as_slice() else {
        return Err(
            "usage: get_swap_tx <sender> <receiver> <token_in> <token_out> <amount> <slippage_bps>"
                .to_string(),
        );
    };

    let credentials = CredentialPool::from_env(ONEINCH_API_KEYS_ENV)
        .map_err(|err| format!("Failed to load credentials: {}", err.format()))?;

    let request = SwapRequest::from_args(sender, receiver, token_in, token_out, amount, slippage)
        .map_err(|err| format!("Failed to build swap request: {}", err.format()))?;

    let client = Client::new();
    let mut rng = rand::thread_rng();

    let tx_data = get_swap_tx(
        &client,
        &OneInchConfig::default(),
        &credentials,
        request,
        &mut rng,
    )
    .await
    .map_err(|err| format!("Failed to fetch swap transaction: {}", err.format()))?;

    // The payload is the sole stdout output; everything else goes to stderr
    println!("{tx_data}");

    Ok(())
}
