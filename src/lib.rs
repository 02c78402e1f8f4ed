//! Typed Rust client for the Termii messaging API.
//!
//! The crate is split into a domain layer of strong types and plain request/response
//! records, a transport layer for endpoint and wire-format details, and a small client
//! layer that executes one JSON-over-HTTP exchange per call.
//!
//! ```rust,no_run
//! use termii::{ApiKey, Config, SendMessage, SenderId, TermiiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), termii::TermiiError> {
//!     let config = Config::new(ApiKey::new("...")?).with_sender_id(SenderId::new("Acme")?);
//!     let client = TermiiClient::new(config)?;
//!     let response = client
//!         .send_message(SendMessage::new("2347880234567", "hello"))
//!         .await?;
//!     println!("{} (balance {})", response.message, response.balance);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Config, ConfigError, RequestError, TermiiClient, TermiiClientBuilder, TermiiError,
};
pub use domain::{
    Amount, ApiKey, BalanceResponse, BaseUrl, Channel, DeviceTemplate, DeviceTemplateResponse,
    GenerateToken, GenerateTokenResponse, HistoryEntry, Media, NumberMessage,
    NumberMessageResponse, NumberStatus, NumberStatusResponse, PhoneNumber, PinType,
    RegisterSenderId, RegisterSenderIdResponse, SendMessage, SendMessageResponse, SendToken,
    SendTokenResponse, SenderId, SenderIdPage, ValidationError, VerifyNumber,
    VerifyNumberResponse, VerifyToken, VerifyTokenResponse,
};
