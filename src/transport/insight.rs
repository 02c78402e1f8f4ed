use super::codec::inject_api_key;
use super::endpoint::{Endpoint, HttpMethod, KeyPlacement};
use crate::domain::{ApiKey, NumberStatus, VerifyNumber};

pub const GET_BALANCE: Endpoint = Endpoint {
    operation: "get balance",
    method: HttpMethod::Get,
    path: "api/get-balance",
    key: KeyPlacement::Query,
};

// The two lookups below are GETs that still carry a JSON body.
pub const VERIFY_NUMBER: Endpoint = Endpoint {
    operation: "verify number",
    method: HttpMethod::Get,
    path: "api/check/dnd",
    key: KeyPlacement::Body,
};

pub const NUMBER_STATUS: Endpoint = Endpoint {
    operation: "get number status",
    method: HttpMethod::Get,
    path: "api/insight/number/query",
    key: KeyPlacement::Body,
};

pub const HISTORY: Endpoint = Endpoint {
    operation: "get history",
    method: HttpMethod::Get,
    path: "api/sms/inbox",
    key: KeyPlacement::Query,
};

pub fn prepare_verify_number(mut request: VerifyNumber, api_key: &ApiKey) -> VerifyNumber {
    inject_api_key(&mut request.api_key, api_key);
    request
}

pub fn prepare_number_status(mut request: NumberStatus, api_key: &ApiKey) -> NumberStatus {
    inject_api_key(&mut request.api_key, api_key);
    request
}
