use serde::{Deserialize, Serialize};

use crate::domain::value::{Channel, PinType};

// `api_key` is overwritten by the client before every call; callers leave it empty.

/// `POST api/sms/send`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SendMessage {
    pub to: String,
    /// Sender id; filled from the configured default when empty.
    pub from: String,
    pub sms: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub channel: Channel,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}

impl SendMessage {
    pub const PLAIN: &'static str = "plain";

    pub fn new(to: impl Into<String>, sms: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            sms: sms.into(),
            kind: Self::PLAIN.to_owned(),
            ..Default::default()
        }
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.from = sender.into();
        self
    }

    /// Attach media; only delivered on the WhatsApp channel.
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Media {
    pub url: String,
    pub caption: String,
}

/// `POST api/sms/number/send`: sends from an auto-generated Termii number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberMessage {
    pub api_key: String,
    pub to: String,
    pub sms: String,
}

impl NumberMessage {
    pub fn new(to: impl Into<String>, sms: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            sms: sms.into(),
            ..Default::default()
        }
    }
}

/// `POST api/send/template`: renders a device template.
///
/// `data` holds the template placeholders and is sent as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceTemplate {
    pub phone_number: String,
    pub device_id: String,
    pub template_id: String,
    pub api_key: String,
    pub data: serde_json::Value,
}

impl DeviceTemplate {
    pub fn new(
        phone_number: impl Into<String>,
        device_id: impl Into<String>,
        template_id: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            device_id: device_id.into(),
            template_id: template_id.into(),
            api_key: String::new(),
            data,
        }
    }
}

/// `POST api/sms/otp/send`.
///
/// `message_text` must contain `pin_placeholder`, which Termii replaces with the PIN.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SendToken {
    pub api_key: String,
    pub message_type: PinType,
    pub to: String,
    /// Sender id; filled from the configured default when empty.
    pub from: String,
    pub channel: Channel,
    pub pin_attempts: u32,
    /// Minutes.
    pub pin_time_to_live: u32,
    pub pin_length: u32,
    pub pin_placeholder: String,
    pub message_text: String,
    pub pin_type: PinType,
}

/// `POST api/sms/otp/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyToken {
    pub api_key: String,
    pub pin_id: String,
    pub pin: String,
}

impl VerifyToken {
    pub fn new(pin_id: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            pin_id: pin_id.into(),
            pin: pin.into(),
        }
    }
}

/// `POST api/sms/otp/generate`: returns the PIN to the caller instead of delivering it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateToken {
    pub api_key: String,
    pub pin_type: PinType,
    pub phone_number: String,
    pub pin_attempts: u32,
    pub pin_time_to_live: u32,
    pub pin_length: u32,
}

/// `GET api/check/dnd`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifyNumber {
    pub api_key: String,
    pub phone_number: String,
}

impl VerifyNumber {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            phone_number: phone_number.into(),
        }
    }
}

/// `GET api/insight/number/query`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberStatus {
    pub api_key: String,
    pub phone_number: String,
    /// ISO 3166-1 alpha-2, e.g. `NG`.
    pub country_code: String,
}

impl NumberStatus {
    pub fn new(phone_number: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            api_key: String::new(),
            phone_number: phone_number.into(),
            country_code: country_code.into(),
        }
    }
}

/// `POST api/sender-id/request`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterSenderId {
    pub api_key: String,
    /// Filled from the configured default when empty.
    pub sender_id: String,
    pub usecase: String,
    pub company: String,
}

impl RegisterSenderId {
    pub fn new(usecase: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            usecase: usecase.into(),
            company: company.into(),
            ..Default::default()
        }
    }
}
