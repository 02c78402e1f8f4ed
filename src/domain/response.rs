use serde::{Deserialize, Serialize};

use crate::domain::value::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub message_id: String,
    pub message: String,
    pub balance: Amount,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberMessageResponse {
    pub code: String,
    pub message_id: String,
    pub message: String,
    pub balance: Amount,
    pub user: String,
}

/// One element of the `api/send/template` response list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTemplateResponse {
    pub code: String,
    pub message_id: String,
    pub message: String,
    pub balance: Amount,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTokenResponse {
    #[serde(rename = "pinId")]
    pub pin_id: String,
    pub to: String,
    #[serde(rename = "smsStatus")]
    pub sms_status: String,
}

/// Result of `api/sms/otp/verify`.
///
/// `verified` is passed through untouched: the gateway answers `true`, `"True"` or a reason
/// such as `"Expired"` depending on the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    #[serde(rename = "pinId")]
    pub pin_id: String,
    pub verified: serde_json::Value,
    pub msisdn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTokenResponse {
    pub status: String,
    pub data: GeneratedToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedToken {
    pub pin_id: String,
    pub otp: String,
    pub phone_number: String,
    pub phone_number_other: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub user: String,
    pub balance: Amount,
    pub currency: String,
}

/// DND registry lookup for one number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyNumberResponse {
    pub number: String,
    pub status: String,
    pub network: String,
    pub network_code: String,
    pub dnd_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberStatusResponse {
    pub result: Vec<NumberInsight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInsight {
    pub route_detail: RouteDetail,
    pub country_detail: CountryDetail,
    pub operator_detail: OperatorDetail,
    pub status: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDetail {
    pub number: String,
    /// `1` when the number has been ported to another network.
    pub ported: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetail {
    pub country_code: String,
    pub mobile_country_code: String,
    pub iso: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDetail {
    pub operator_code: String,
    pub operator_name: String,
    pub mobile_number_code: String,
    pub mobile_routing_code: String,
    pub carrier_identification_code: String,
    pub line_type: String,
}

/// One message of the account inbox (`api/sms/inbox`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub sender: String,
    pub receiver: String,
    pub message: String,
    pub amount: Amount,
    pub reroute: i64,
    pub status: String,
    pub sms_type: String,
    pub send_by: String,
    #[serde(default)]
    pub media_url: Option<String>,
    pub message_id: String,
    #[serde(default)]
    pub notify_url: serde_json::Value,
    #[serde(default)]
    pub notify_id: serde_json::Value,
    pub created_at: String,
}

/// Page of registered sender ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderIdPage {
    pub current_page: u32,
    pub data: Vec<SenderIdEntry>,
    pub first_page_url: String,
    #[serde(default)]
    pub from: Option<u32>,
    pub last_page: u32,
    pub last_page_url: String,
    #[serde(default)]
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    #[serde(default)]
    pub prev_page_url: serde_json::Value,
    #[serde(default)]
    pub to: Option<u32>,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderIdEntry {
    pub sender_id: String,
    /// `pending`, `unblock`, `block`, ...
    pub status: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub usecase: serde_json::Value,
    #[serde(default)]
    pub country: serde_json::Value,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSenderIdResponse {
    pub code: String,
    pub message: String,
}
