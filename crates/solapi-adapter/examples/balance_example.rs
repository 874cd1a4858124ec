/*
[INPUT]:  SOLAPI_* environment variables
[OUTPUT]: Account balance printed to stdout
[POS]:    Examples - minimal signed GET
[UPDATE]: When client construction or cash endpoints change
*/

use solapi_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: check account balance
///
/// Reads credentials from SOLAPI_API_KEY / SOLAPI_API_SECRET.
/// Run with RUST_LOG=solapi_adapter=debug to see each signed request.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = match SolapiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("Endpoint: {}", client.config().base_url());

    match client.get_balance().await {
        Ok(balance) => {
            println!("Balance: {}", balance.balance);
            println!("Point:   {}", balance.point);
        }
        Err(e) => eprintln!("Balance query failed: {}", e),
    }
}
