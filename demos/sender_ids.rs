use termii::{RegisterSenderId, TermiiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TermiiClient::from_env()?;

    // With TERMII_USECASE and TERMII_COMPANY set, request the configured sender id first.
    if let (Ok(usecase), Ok(company)) = (
        std::env::var("TERMII_USECASE"),
        std::env::var("TERMII_COMPANY"),
    ) {
        let response = client
            .register_sender_id(RegisterSenderId::new(usecase, company))
            .await?;
        println!("code: {}, message: {}", response.code, response.message);
    }

    let page = client.fetch_sender_ids().await?;
    println!(
        "page {} of {} ({} total)",
        page.current_page, page.last_page, page.total
    );
    for entry in page.data {
        println!("{}: {}", entry.sender_id, entry.status);
    }

    Ok(())
}
