use super::codec::{fill_sender, inject_api_key};
use super::endpoint::{Endpoint, HttpMethod, KeyPlacement};
use crate::domain::{
    ApiKey, DeviceTemplate, NumberMessage, SendMessage, SenderId, ValidationError,
};

pub const SEND_MESSAGE: Endpoint = Endpoint {
    operation: "send message",
    method: HttpMethod::Post,
    path: "api/sms/send",
    key: KeyPlacement::Body,
};

pub const SEND_NUMBER_MESSAGE: Endpoint = Endpoint {
    operation: "send number message",
    method: HttpMethod::Post,
    path: "api/sms/number/send",
    key: KeyPlacement::Body,
};

pub const SEND_DEVICE_TEMPLATE: Endpoint = Endpoint {
    operation: "send device template",
    method: HttpMethod::Post,
    path: "api/send/template",
    key: KeyPlacement::Body,
};

pub fn prepare_send_message(
    mut request: SendMessage,
    api_key: &ApiKey,
    default_sender: Option<&SenderId>,
) -> Result<SendMessage, ValidationError> {
    inject_api_key(&mut request.api_key, api_key);
    fill_sender(&mut request.from, default_sender, SenderId::FIELD)?;
    if request.kind.is_empty() {
        SendMessage::PLAIN.clone_into(&mut request.kind);
    }
    Ok(request)
}

pub fn prepare_number_message(mut request: NumberMessage, api_key: &ApiKey) -> NumberMessage {
    inject_api_key(&mut request.api_key, api_key);
    request
}

pub fn prepare_device_template(mut request: DeviceTemplate, api_key: &ApiKey) -> DeviceTemplate {
    inject_api_key(&mut request.api_key, api_key);
    request
}
