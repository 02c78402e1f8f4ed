//! Client layer: configuration, request execution and error translation.

mod config;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

pub use config::{
    API_KEY_VAR, BASE_URL_VAR, Config, ConfigError, DEBUG_LOGS_VAR, SENDER_ID_VAR,
};

use crate::domain::{
    BalanceResponse, DeviceTemplate, DeviceTemplateResponse, GenerateToken,
    GenerateTokenResponse, HistoryEntry, NumberMessage, NumberMessageResponse, NumberStatus,
    NumberStatusResponse, RegisterSenderId, RegisterSenderIdResponse, SendMessage,
    SendMessageResponse, SendToken, SendTokenResponse, SenderIdPage, ValidationError,
    VerifyNumber, VerifyNumberResponse, VerifyToken, VerifyTokenResponse,
};
use crate::transport::{self, Endpoint, HttpMethod, TransportError};

/// Statuses treated as success; everything else is [`RequestError::HttpStatus`].
pub const ACCEPTED_STATUSES: [u16; 3] = [200, 201, 204];

/// Transport timeout applied unless the builder overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const NO_BODY: Option<&()> = None;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    body: Option<String>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };
            let mut builder = self
                .client
                .request(method, request.url)
                .header(reqwest::header::CONTENT_TYPE, "application/json");
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            // reqwest errors carry the request URL, which may hold the API key.
            let response = builder.send().await.map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Failure of a single request/response exchange.
///
/// Nothing is retried; every variant is reported to the caller as-is.
pub enum RequestError {
    /// The endpoint path could not be resolved against the base URL.
    #[error("unable to build request url: {0}")]
    Url(#[from] url::ParseError),

    /// The request record could not be serialized to JSON.
    #[error("unable to marshal request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("failed to execute request: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Status outside [`ACCEPTED_STATUSES`]. `url` has the API key masked.
    #[error(
        "invalid status code received, expected 200/201/204, got {status}, url={url}, with response body={body}"
    )]
    HttpStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body is not valid JSON for the expected record.
    #[error("unable to unmarshal response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl From<TransportError> for RequestError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::Encode(err) => Self::Serialize(err),
            TransportError::Decode(err) => Self::Decode(err),
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TermiiClient`].
pub enum TermiiError {
    /// The exchange with the gateway failed; `operation` names the endpoint call.
    #[error("error in making request to {operation}: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: RequestError,
    },

    /// A request was rejected before any I/O (e.g. no sender id available).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Settings could not be loaded from the environment.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The underlying HTTP client could not be constructed.
    #[error("unable to build HTTP client: {0}")]
    Build(#[source] Box<dyn StdError + Send + Sync>),
}

impl TermiiError {
    /// Status code of an unexpected-status failure.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Request {
                source: RequestError::HttpStatus { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }

    /// Name of the failed operation, for request failures.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Request { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TermiiClient`].
///
/// Use this when you need to customize the timeout or user-agent.
pub struct TermiiClientBuilder {
    config: Config,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TermiiClientBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<TermiiClient, TermiiError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TermiiError::Build(Box::new(err)))?;

        Ok(TermiiClient {
            config: Arc::new(self.config),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Termii client.
///
/// One method per endpoint. Each injects the configured API key (and, where the endpoint
/// has an originator field, the default sender id), performs one HTTP exchange and decodes
/// the JSON response. The client holds no per-call state and can be cloned and shared freely.
pub struct TermiiClient {
    config: Arc<Config>,
    http: Arc<dyn HttpTransport>,
}

impl TermiiClient {
    /// Create a client with the default transport settings.
    pub fn new(config: Config) -> Result<Self, TermiiError> {
        TermiiClientBuilder::new(config).build()
    }

    /// Create a client from `TERMII_*` environment variables (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self, TermiiError> {
        Self::new(Config::from_env()?)
    }

    pub fn builder(config: Config) -> TermiiClientBuilder {
        TermiiClientBuilder::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a message through the messaging channel (`POST api/sms/send`).
    ///
    /// An empty `from` is replaced with the configured sender id; if none is configured
    /// [`TermiiError::Validation`] is returned without contacting the gateway.
    pub async fn send_message(
        &self,
        request: SendMessage,
    ) -> Result<SendMessageResponse, TermiiError> {
        let request = transport::prepare_send_message(
            request,
            self.config.api_key(),
            self.config.sender_id(),
        )?;
        self.call(&transport::SEND_MESSAGE, Some(&request)).await
    }

    /// Send a message from an auto-generated number (`POST api/sms/number/send`).
    pub async fn send_number_message(
        &self,
        request: NumberMessage,
    ) -> Result<NumberMessageResponse, TermiiError> {
        let request = transport::prepare_number_message(request, self.config.api_key());
        self.call(&transport::SEND_NUMBER_MESSAGE, Some(&request)).await
    }

    /// Send a device template message (`POST api/send/template`).
    pub async fn send_device_template(
        &self,
        request: DeviceTemplate,
    ) -> Result<Vec<DeviceTemplateResponse>, TermiiError> {
        let request = transport::prepare_device_template(request, self.config.api_key());
        self.call(&transport::SEND_DEVICE_TEMPLATE, Some(&request)).await
    }

    /// Deliver a one-time PIN to a recipient (`POST api/sms/otp/send`).
    pub async fn send_token(&self, request: SendToken) -> Result<SendTokenResponse, TermiiError> {
        let request =
            transport::prepare_send_token(request, self.config.api_key(), self.config.sender_id())?;
        self.call(&transport::SEND_TOKEN, Some(&request)).await
    }

    /// Check a PIN previously issued by [`send_token`](Self::send_token) (`POST api/sms/otp/verify`).
    pub async fn verify_token(
        &self,
        request: VerifyToken,
    ) -> Result<VerifyTokenResponse, TermiiError> {
        let request = transport::prepare_verify_token(request, self.config.api_key());
        self.call(&transport::VERIFY_TOKEN, Some(&request)).await
    }

    /// Generate an in-app PIN returned to the caller (`POST api/sms/otp/generate`).
    pub async fn generate_token(
        &self,
        request: GenerateToken,
    ) -> Result<GenerateTokenResponse, TermiiError> {
        let request = transport::prepare_generate_token(request, self.config.api_key());
        self.call(&transport::GENERATE_TOKEN, Some(&request)).await
    }

    /// Wallet balance and currency (`GET api/get-balance`).
    pub async fn get_balance(&self) -> Result<BalanceResponse, TermiiError> {
        self.call(&transport::GET_BALANCE, NO_BODY).await
    }

    /// DND registry lookup for a number (`GET api/check/dnd`).
    pub async fn verify_number(
        &self,
        request: VerifyNumber,
    ) -> Result<VerifyNumberResponse, TermiiError> {
        let request = transport::prepare_verify_number(request, self.config.api_key());
        self.call(&transport::VERIFY_NUMBER, Some(&request)).await
    }

    /// Network and porting status of a number (`GET api/insight/number/query`).
    pub async fn number_status(
        &self,
        request: NumberStatus,
    ) -> Result<NumberStatusResponse, TermiiError> {
        let request = transport::prepare_number_status(request, self.config.api_key());
        self.call(&transport::NUMBER_STATUS, Some(&request)).await
    }

    /// Messages sent from the account (`GET api/sms/inbox`).
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, TermiiError> {
        self.call(&transport::HISTORY, NO_BODY).await
    }

    /// Registered sender ids and their approval status (`GET api/sender-id`).
    pub async fn fetch_sender_ids(&self) -> Result<SenderIdPage, TermiiError> {
        self.call(&transport::FETCH_SENDER_IDS, NO_BODY).await
    }

    /// Request a new sender id (`POST api/sender-id/request`).
    ///
    /// An empty `sender_id` is replaced with the configured sender id.
    pub async fn register_sender_id(
        &self,
        request: RegisterSenderId,
    ) -> Result<RegisterSenderIdResponse, TermiiError> {
        let request = transport::prepare_register_sender_id(
            request,
            self.config.api_key(),
            self.config.sender_id(),
        )?;
        self.call(&transport::REGISTER_SENDER_ID, Some(&request)).await
    }

    async fn call<Req, Resp>(
        &self,
        endpoint: &Endpoint,
        body: Option<&Req>,
    ) -> Result<Resp, TermiiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.execute(endpoint, body)
            .await
            .map_err(|source| TermiiError::Request {
                operation: endpoint.operation,
                source,
            })
    }

    async fn execute<Req, Resp>(
        &self,
        endpoint: &Endpoint,
        body: Option<&Req>,
    ) -> Result<Resp, RequestError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = endpoint.url(self.config.base_url(), self.config.api_key())?;
        let body = body.map(transport::encode_json_body).transpose()?;

        tracing::debug!(
            operation = endpoint.operation,
            method = %endpoint.method,
            path = endpoint.path,
            "sending request"
        );

        let redacted = transport::redacted_url(&url);
        let response = self
            .http
            .send(HttpRequest {
                method: endpoint.method,
                url,
                body,
            })
            .await
            .map_err(RequestError::Transport)?;

        tracing::debug!(
            operation = endpoint.operation,
            status = response.status,
            "received response"
        );
        log_response_body(self.config.debug_logs(), &response.body);

        if !ACCEPTED_STATUSES.contains(&response.status) {
            return Err(RequestError::HttpStatus {
                status: response.status,
                url: redacted,
                body: response.body,
            });
        }

        Ok(transport::decode_json_response(&response.body)?)
    }
}

/// Logs the raw response body when the debug hook is enabled.
fn log_response_body(enabled: bool, body: &str) {
    if enabled {
        tracing::debug!(body = %body, "got response");
    }
}
