//! Every endpoint exercised over real HTTP against a local stub server.
//!
//! The stub records the method, path-and-query, content type and body of the last request
//! and answers with a canned fixture. Each test asserts the outgoing request matches the
//! documented endpoint and fixture exactly, and that the decoded response equals the fixture.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use serde::de::DeserializeOwned;
use serde_json::Value;
use termii::{
    ApiKey, BalanceResponse, BaseUrl, Config, DeviceTemplate, DeviceTemplateResponse,
    GenerateToken, GenerateTokenResponse, HistoryEntry, NumberMessage, NumberMessageResponse,
    NumberStatus, NumberStatusResponse, RegisterSenderId, RegisterSenderIdResponse, RequestError,
    SendMessage, SendMessageResponse, SendToken, SendTokenResponse, SenderId, SenderIdPage,
    TermiiClient, TermiiError, VerifyNumber, VerifyNumberResponse, VerifyToken,
    VerifyTokenResponse,
};

const API_KEY: &str = "test-API";
const SENDER_ID: &str = "Acme";

#[derive(Debug, Clone)]
struct Captured {
    method: Method,
    uri: String,
    content_type: Option<String>,
    body: Bytes,
}

impl Captured {
    fn json_body(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    response: String,
    captured: Arc<Mutex<Option<Captured>>>,
}

struct Harness {
    client: TermiiClient,
    captured: Arc<Mutex<Option<Captured>>>,
}

impl Harness {
    fn captured(&self) -> Captured {
        self.captured
            .lock()
            .unwrap()
            .clone()
            .expect("stub received no request")
    }
}

async fn handle(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let uri = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_default();

    *stub.captured.lock().unwrap() = Some(Captured {
        method,
        uri,
        content_type,
        body,
    });
    (stub.status, stub.response.clone())
}

async fn serve(status: StatusCode, response: &str) -> Harness {
    let captured = Arc::new(Mutex::new(None));
    let stub = Stub {
        status,
        response: response.to_owned(),
        captured: captured.clone(),
    };
    let app = Router::new().fallback(handle).with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = Config::new(ApiKey::new(API_KEY).unwrap())
        .with_base_url(BaseUrl::new(format!("http://{addr}")).unwrap())
        .with_sender_id(SenderId::new(SENDER_ID).unwrap());

    Harness {
        client: TermiiClient::new(config).unwrap(),
        captured,
    }
}

fn fixture<T: DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).expect("fixture does not match record")
}

fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn assert_request(captured: &Captured, method: Method, uri: &str) {
    assert_eq!(captured.method, method);
    assert_eq!(captured.uri, uri);
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn send_message() {
    let request_fixture = include_str!("fixtures/send_message_request.json");
    let response_fixture = include_str!("fixtures/send_message_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let mut request: SendMessage = fixture(request_fixture);
    request.api_key = "caller-key".to_owned();
    request.from = String::new();
    let response = harness.client.send_message(request).await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/sms/send");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<SendMessageResponse>(response_fixture));
}

#[tokio::test]
async fn send_number_message_with_integer_and_float_balance() {
    let request_fixture = include_str!("fixtures/number_message_request.json");
    for response_fixture in [
        include_str!("fixtures/number_message_response.json"),
        include_str!("fixtures/number_message_response_float.json"),
    ] {
        let harness = serve(StatusCode::OK, response_fixture).await;

        let response = harness
            .client
            .send_number_message(fixture::<NumberMessage>(request_fixture))
            .await
            .unwrap();

        let captured = harness.captured();
        assert_request(&captured, Method::POST, "/api/sms/number/send");
        assert_eq!(captured.json_body(), json(request_fixture));
        assert_eq!(response, fixture::<NumberMessageResponse>(response_fixture));
    }
}

#[tokio::test]
async fn send_device_template() {
    let request_fixture = include_str!("fixtures/device_template_request.json");
    let response_fixture = include_str!("fixtures/device_template_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let mut request: DeviceTemplate = fixture(request_fixture);
    request.api_key = String::new();
    let response = harness.client.send_device_template(request).await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/send/template");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(
        response,
        fixture::<Vec<DeviceTemplateResponse>>(response_fixture)
    );
}

#[tokio::test]
async fn send_token() {
    let request_fixture = include_str!("fixtures/send_token_request.json");
    let response_fixture = include_str!("fixtures/send_token_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let mut request: SendToken = fixture(request_fixture);
    request.from = String::new();
    let response = harness.client.send_token(request).await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/sms/otp/send");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<SendTokenResponse>(response_fixture));
}

#[tokio::test]
async fn verify_token() {
    let request_fixture = include_str!("fixtures/verify_token_request.json");
    let response_fixture = include_str!("fixtures/verify_token_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness
        .client
        .verify_token(fixture::<VerifyToken>(request_fixture))
        .await
        .unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/sms/otp/verify");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<VerifyTokenResponse>(response_fixture));
}

#[tokio::test]
async fn generate_token() {
    let request_fixture = include_str!("fixtures/generate_token_request.json");
    let response_fixture = include_str!("fixtures/generate_token_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness
        .client
        .generate_token(fixture::<GenerateToken>(request_fixture))
        .await
        .unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/sms/otp/generate");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<GenerateTokenResponse>(response_fixture));
}

#[tokio::test]
async fn get_balance() {
    let response_fixture = include_str!("fixtures/get_balance_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness.client.get_balance().await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::GET, "/api/get-balance?api_key=test-API");
    assert!(captured.body.is_empty());
    assert_eq!(response, fixture::<BalanceResponse>(response_fixture));
    assert_eq!(response.balance.as_f64(), 500.0);
}

#[tokio::test]
async fn verify_number() {
    let request_fixture = include_str!("fixtures/verify_number_request.json");
    let response_fixture = include_str!("fixtures/verify_number_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness
        .client
        .verify_number(fixture::<VerifyNumber>(request_fixture))
        .await
        .unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::GET, "/api/check/dnd");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<VerifyNumberResponse>(response_fixture));
}

#[tokio::test]
async fn number_status() {
    let request_fixture = include_str!("fixtures/number_status_request.json");
    let response_fixture = include_str!("fixtures/number_status_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness
        .client
        .number_status(fixture::<NumberStatus>(request_fixture))
        .await
        .unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::GET, "/api/insight/number/query");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(response, fixture::<NumberStatusResponse>(response_fixture));
}

#[tokio::test]
async fn history() {
    let response_fixture = include_str!("fixtures/history_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness.client.history().await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::GET, "/api/sms/inbox?api_key=test-API");
    assert!(captured.body.is_empty());
    assert_eq!(response, fixture::<Vec<HistoryEntry>>(response_fixture));
    assert!(response[0].notify_url.is_null());
    assert_eq!(response[1].notify_id, serde_json::json!(42));
}

#[tokio::test]
async fn fetch_sender_ids() {
    let response_fixture = include_str!("fixtures/sender_ids_response.json");
    let harness = serve(StatusCode::OK, response_fixture).await;

    let response = harness.client.fetch_sender_ids().await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::GET, "/api/sender-id?api_key=test-API");
    assert_eq!(response, fixture::<SenderIdPage>(response_fixture));
    assert_eq!(response.data.len(), 2);
}

#[tokio::test]
async fn register_sender_id() {
    let request_fixture = include_str!("fixtures/register_sender_id_request.json");
    let response_fixture = include_str!("fixtures/register_sender_id_response.json");
    let harness = serve(StatusCode::CREATED, response_fixture).await;

    let mut request: RegisterSenderId = fixture(request_fixture);
    request.sender_id = String::new();
    let response = harness.client.register_sender_id(request).await.unwrap();

    let captured = harness.captured();
    assert_request(&captured, Method::POST, "/api/sender-id/request");
    assert_eq!(captured.json_body(), json(request_fixture));
    assert_eq!(
        response,
        fixture::<RegisterSenderIdResponse>(response_fixture)
    );
}

#[tokio::test]
async fn server_error_is_reported_with_status_and_body() {
    let harness = serve(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").await;

    let err = harness.client.get_balance().await.unwrap_err();
    assert_eq!(err.http_status(), Some(500));
    match err {
        TermiiError::Request {
            operation,
            source: RequestError::HttpStatus { status, url, body },
        } => {
            assert_eq!(operation, "get balance");
            assert_eq!(status, 500);
            assert!(url.ends_with("/api/get-balance?api_key=***"), "{url}");
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_response_is_a_decode_error() {
    let harness = serve(StatusCode::OK, r#"{"user": "u", "balance": "#).await;

    let err = harness.client.get_balance().await.unwrap_err();
    assert!(matches!(
        err,
        TermiiError::Request {
            source: RequestError::Decode(_),
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::new(ApiKey::new(API_KEY).unwrap())
        .with_base_url(BaseUrl::new(format!("http://{addr}")).unwrap());
    let client = TermiiClient::new(config).unwrap();

    let err = client.get_balance().await.unwrap_err();
    let mut rendered = format!("{err} {err:?}");
    let mut source = std::error::Error::source(&err);
    while let Some(inner) = source {
        rendered.push_str(&format!(" {inner}"));
        source = std::error::Error::source(inner);
    }
    assert!(!rendered.contains(API_KEY), "api key in error: {rendered}");
    assert!(matches!(
        err,
        TermiiError::Request {
            source: RequestError::Transport(_),
            ..
        }
    ));
}
