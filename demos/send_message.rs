use std::io;

use termii::{Channel, PhoneNumber, SendMessage, TermiiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // TERMII_API_KEY and TERMII_SENDER_ID are read by the client.
    let client = TermiiClient::from_env()?;

    let phone_raw = std::env::var("TERMII_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_PHONE environment variable is required (e.g. +2347880234567)",
        )
    })?;
    let text = std::env::var("TERMII_TEXT").unwrap_or_else(|_| "Hello from Rust".to_owned());

    let to = PhoneNumber::parse(None, phone_raw)?;
    let request = SendMessage::new(to, text).channel(Channel::Generic);
    let response = client.send_message(request).await?;

    println!(
        "message_id: {}, message: {}, balance: {}, user: {}",
        response.message_id, response.message, response.balance, response.user
    );

    Ok(())
}
