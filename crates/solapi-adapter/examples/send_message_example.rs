/*
[INPUT]:  SOLAPI_* environment variables, recipient/sender from CLI args
[OUTPUT]: Send receipt and the latest history page for the recipient
[POS]:    Examples - message send + history query
[UPDATE]: When message endpoints change
*/

use solapi_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: send an SMS and look it up in history
///
/// Usage: send_message_example <to> <from> [text]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(to), Some(from)) = (args.next(), args.next()) else {
        eprintln!("usage: send_message_example <to> <from> [text]");
        return;
    };
    let text = args
        .next()
        .unwrap_or_else(|| "hello from solapi-adapter".to_string());

    let client = match SolapiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let outgoing = OutgoingMessage::new(&to, &from, text);
    let receipt = match client.send_message(outgoing).await {
        Ok(r) => r,
        Err(SolapiError::Api {
            code,
            message,
            status,
        }) => {
            eprintln!("Rejected by API ({status}): {code} {message}");
            return;
        }
        Err(e) => {
            eprintln!("Send failed: {}", e);
            return;
        }
    };
    println!("✓ queued message {} in group {}", receipt.message_id, receipt.group_id);

    let query = MessageListQuery {
        message_id: Some(receipt.message_id.clone()),
        ..MessageListQuery::default()
    };
    match client.get_message_list(&query).await {
        Ok(page) => {
            for (id, message) in &page.message_list {
                println!("  {id}: status={:?}", message.status_code);
            }
        }
        Err(e) => eprintln!("History query failed: {}", e),
    }
}
