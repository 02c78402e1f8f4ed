use std::io;

use termii::{Channel, PhoneNumber, PinType, SendToken, TermiiClient, VerifyToken};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TermiiClient::from_env()?;

    // Second step: TERMII_PIN_ID and TERMII_PIN verify a PIN issued by an earlier run.
    if let (Ok(pin_id), Ok(pin)) = (std::env::var("TERMII_PIN_ID"), std::env::var("TERMII_PIN")) {
        let response = client.verify_token(VerifyToken::new(pin_id, pin)).await?;
        println!(
            "pin_id: {}, verified: {}, msisdn: {}",
            response.pin_id, response.verified, response.msisdn
        );
        return Ok(());
    }

    let phone_raw = std::env::var("TERMII_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TERMII_PHONE environment variable is required when TERMII_PIN_ID is not set",
        )
    })?;

    let request = SendToken {
        message_type: PinType::Numeric,
        to: PhoneNumber::parse(None, phone_raw)?.into(),
        channel: Channel::Generic,
        pin_attempts: 3,
        pin_time_to_live: 5,
        pin_length: 6,
        pin_placeholder: "< 1234 >".to_owned(),
        message_text: "Your verification code is < 1234 >".to_owned(),
        pin_type: PinType::Numeric,
        ..SendToken::default()
    };
    let response = client.send_token(request).await?;

    println!(
        "pin_id: {}, to: {}, sms_status: {}",
        response.pin_id, response.to, response.sms_status
    );

    Ok(())
}
