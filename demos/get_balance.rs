use termii::TermiiClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TermiiClient::from_env()?;
    let response = client.get_balance().await?;

    println!(
        "user: {}, balance: {} {}",
        response.user, response.balance, response.currency
    );

    Ok(())
}
