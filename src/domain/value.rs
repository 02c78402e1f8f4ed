use std::fmt;

use phonenumber::country;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Termii `api_key` token.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used by Termii (`api_key`), both in bodies and query strings.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Registered sender id (`from`), e.g. `Acme`.
///
/// Invariant: non-empty after trimming. The value must be approved on your Termii account.
pub struct SenderId(String);

impl SenderId {
    /// Field name used by the messaging endpoints (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Absolute base URL every endpoint path is resolved against.
///
/// Invariant: `http`/`https` URL whose path ends in `/`, so that joining a relative
/// path keeps any prefix (`https://proxy.local/termii` + `api/sms/send` resolves to
/// `https://proxy.local/termii/api/sms/send`).
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Production Termii host.
    pub const DEFAULT: &'static str = "https://api.ng.termii.com";

    /// Parse and normalize a base URL.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let input = value.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: "base_url" });
        }

        let mut url = Url::parse(input).map_err(|err| ValidationError::InvalidBaseUrl {
            input: input.to_owned(),
            reason: err.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidBaseUrl {
                input: input.to_owned(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    /// Resolve a relative endpoint path against this base.
    pub fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        self.0.join(path.trim_start_matches('/'))
    }

    /// Borrow the normalized URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self::new(Self::DEFAULT).expect("default base url is valid")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Validated phone number in the form Termii expects: international digits without the
/// leading `+` (`2348012345678`).
///
/// Request constructors take `impl Into<String>`, so a `PhoneNumber` can be passed wherever a
/// recipient or `phone_number` is expected.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Field name used by the lookup and token endpoints (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse a local or international number.
    ///
    /// `default_region` resolves numbers written without a country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            input: input.to_owned(),
        };
        let parsed = phonenumber::parse(default_region, input).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&parsed) {
            return Err(invalid());
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    pub fn msisdn(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Money-like value (wallet balance, message cost).
///
/// Termii has returned these both as JSON integers and as JSON floats. The numeric token is
/// preserved as received (`500` stays `"500"`, `10.50` stays `"10.50"`); a numeric JSON
/// string is accepted too and normalized to a number on serialization.
pub struct Amount(String);

impl Amount {
    /// Create an amount from a numeric token such as `"500"` or `"12.75"`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if serde_json::from_str::<serde_json::Number>(trimmed).is_err() {
            return Err(ValidationError::InvalidAmount { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The numeric token as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The amount as a float.
    pub fn as_f64(&self) -> f64 {
        // Validated at construction.
        self.0.parse().unwrap_or_default()
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Self::new(parsed).map_err(D::Error::custom)
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected amount to be a JSON number or numeric string",
            )),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = serde_json::value::RawValue::from_string(self.0.clone())
            .map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Delivery route for messages and tokens.
pub enum Channel {
    /// Promotional route; not delivered to DND numbers.
    #[default]
    #[serde(rename = "generic")]
    Generic,
    /// Transactional route; delivered regardless of DND status.
    #[serde(rename = "dnd")]
    Dnd,
    #[serde(rename = "whatsapp", alias = "WhatsApp")]
    WhatsApp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
/// Character set of a generated PIN.
pub enum PinType {
    #[default]
    Numeric,
    Alphanumeric,
}
