use super::codec::{fill_sender, inject_api_key};
use super::endpoint::{Endpoint, HttpMethod, KeyPlacement};
use crate::domain::{ApiKey, RegisterSenderId, SenderId, ValidationError};

pub const FETCH_SENDER_IDS: Endpoint = Endpoint {
    operation: "fetch sender ids",
    method: HttpMethod::Get,
    path: "api/sender-id",
    key: KeyPlacement::Query,
};

pub const REGISTER_SENDER_ID: Endpoint = Endpoint {
    operation: "register sender id",
    method: HttpMethod::Post,
    path: "api/sender-id/request",
    key: KeyPlacement::Body,
};

pub fn prepare_register_sender_id(
    mut request: RegisterSenderId,
    api_key: &ApiKey,
    default_sender: Option<&SenderId>,
) -> Result<RegisterSenderId, ValidationError> {
    inject_api_key(&mut request.api_key, api_key);
    fill_sender(&mut request.sender_id, default_sender, "sender_id")?;
    Ok(request)
}
