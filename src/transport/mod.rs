//! Transport layer: endpoint table, URL construction and wire-format details.

mod codec;
mod endpoint;
mod insight;
mod messaging;
mod sender_id;
mod token;

pub use codec::{TransportError, decode_json_response, encode_json_body};
pub use endpoint::{Endpoint, HttpMethod, KeyPlacement, redacted_url};
pub use insight::{
    GET_BALANCE, HISTORY, NUMBER_STATUS, VERIFY_NUMBER, prepare_number_status,
    prepare_verify_number,
};
pub use messaging::{
    SEND_DEVICE_TEMPLATE, SEND_MESSAGE, SEND_NUMBER_MESSAGE, prepare_device_template,
    prepare_number_message, prepare_send_message,
};
pub use sender_id::{FETCH_SENDER_IDS, REGISTER_SENDER_ID, prepare_register_sender_id};
pub use token::{
    GENERATE_TOKEN, SEND_TOKEN, VERIFY_TOKEN, prepare_generate_token, prepare_send_token,
    prepare_verify_token,
};
