//! Client configuration: credentials, base URL and the default sender.

use envconfig::Envconfig;

use crate::domain::{ApiKey, BaseUrl, SenderId, ValidationError};

pub const API_KEY_VAR: &str = "TERMII_API_KEY";
pub const BASE_URL_VAR: &str = "TERMII_URL";
pub const SENDER_ID_VAR: &str = "TERMII_SENDER_ID";
pub const DEBUG_LOGS_VAR: &str = "DEBUG_LOGS";

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`Config::from_env`].
pub enum ConfigError {
    /// The environment could not be read into settings (e.g. `TERMII_API_KEY` unset).
    #[error("unable to read environment: {0}")]
    Env(#[from] envconfig::Error),

    /// A required variable is set but blank.
    #[error("environment variable {name} is empty")]
    MissingVar { name: &'static str },

    #[error("environment variable {name} is invalid: {source}")]
    InvalidVar {
        name: &'static str,
        #[source]
        source: ValidationError,
    },
}

/// Raw environment settings, validated into a [`Config`].
#[derive(Envconfig)]
struct EnvSettings {
    #[envconfig(from = "TERMII_API_KEY")]
    api_key: String,

    #[envconfig(from = "TERMII_URL")]
    base_url: Option<String>,

    #[envconfig(from = "TERMII_SENDER_ID")]
    sender_id: Option<String>,

    /// Only `true` enables response-body logging.
    #[envconfig(from = "DEBUG_LOGS", default = "false")]
    debug_logs: String,
}

#[derive(Debug, Clone)]
/// Settings copied into every outgoing request.
///
/// Immutable once handed to a [`TermiiClient`](crate::TermiiClient).
pub struct Config {
    api_key: ApiKey,
    base_url: BaseUrl,
    sender_id: Option<SenderId>,
    debug_logs: bool,
}

impl Config {
    /// Configuration for the production host with no default sender.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: BaseUrl::default(),
            sender_id: None,
            debug_logs: false,
        }
    }

    /// Read `TERMII_API_KEY`, `TERMII_URL`, `TERMII_SENDER_ID` and `DEBUG_LOGS`.
    ///
    /// Only the API key is required. `DEBUG_LOGS=true` turns on response-body logging.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_settings(EnvSettings::init_from_env()?)
    }

    fn from_settings(settings: EnvSettings) -> Result<Self, ConfigError> {
        let present = |value: Option<String>| value.filter(|value| !value.trim().is_empty());

        let api_key = present(Some(settings.api_key))
            .ok_or(ConfigError::MissingVar { name: API_KEY_VAR })?;
        let api_key = ApiKey::new(api_key).map_err(|source| ConfigError::InvalidVar {
            name: API_KEY_VAR,
            source,
        })?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = present(settings.base_url) {
            config.base_url = BaseUrl::new(base_url).map_err(|source| ConfigError::InvalidVar {
                name: BASE_URL_VAR,
                source,
            })?;
        }

        if let Some(sender_id) = present(settings.sender_id) {
            let sender_id = SenderId::new(sender_id).map_err(|source| ConfigError::InvalidVar {
                name: SENDER_ID_VAR,
                source,
            })?;
            config.sender_id = Some(sender_id);
        }

        config.debug_logs = settings.debug_logs.trim() == "true";
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sender used by endpoints whose request leaves the sender empty.
    pub fn with_sender_id(mut self, sender_id: SenderId) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    /// Log raw response bodies at `debug` level.
    pub fn with_debug_logs(mut self, enabled: bool) -> Self {
        self.debug_logs = enabled;
        self
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn sender_id(&self) -> Option<&SenderId> {
        self.sender_id.as_ref()
    }

    pub fn debug_logs(&self) -> bool {
        self.debug_logs
    }
}
