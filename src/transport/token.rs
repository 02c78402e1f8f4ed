use super::codec::{fill_sender, inject_api_key};
use super::endpoint::{Endpoint, HttpMethod, KeyPlacement};
use crate::domain::{ApiKey, GenerateToken, SendToken, SenderId, ValidationError, VerifyToken};

pub const SEND_TOKEN: Endpoint = Endpoint {
    operation: "send token",
    method: HttpMethod::Post,
    path: "api/sms/otp/send",
    key: KeyPlacement::Body,
};

pub const VERIFY_TOKEN: Endpoint = Endpoint {
    operation: "verify token",
    method: HttpMethod::Post,
    path: "api/sms/otp/verify",
    key: KeyPlacement::Body,
};

pub const GENERATE_TOKEN: Endpoint = Endpoint {
    operation: "generate token",
    method: HttpMethod::Post,
    path: "api/sms/otp/generate",
    key: KeyPlacement::Body,
};

pub fn prepare_send_token(
    mut request: SendToken,
    api_key: &ApiKey,
    default_sender: Option<&SenderId>,
) -> Result<SendToken, ValidationError> {
    inject_api_key(&mut request.api_key, api_key);
    fill_sender(&mut request.from, default_sender, SenderId::FIELD)?;
    Ok(request)
}

pub fn prepare_verify_token(mut request: VerifyToken, api_key: &ApiKey) -> VerifyToken {
    inject_api_key(&mut request.api_key, api_key);
    request
}

pub fn prepare_generate_token(mut request: GenerateToken, api_key: &ApiKey) -> GenerateToken {
    inject_api_key(&mut request.api_key, api_key);
    request
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::{
        Channel, GenerateTokenResponse, PinType, SendTokenResponse, VerifyTokenResponse,
    };
    use crate::transport::{decode_json_response, encode_json_body};

    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-API").unwrap()
    }

    fn send_token() -> SendToken {
        SendToken {
            message_type: PinType::Numeric,
            to: "2348109077743".to_owned(),
            channel: Channel::Dnd,
            pin_attempts: 10,
            pin_time_to_live: 5,
            pin_length: 6,
            pin_placeholder: "< 1234 >".to_owned(),
            message_text: "Your pin is < 1234 >".to_owned(),
            pin_type: PinType::Numeric,
            ..Default::default()
        }
    }

    #[test]
    fn send_token_body_matches_wire_shape() {
        let sender = SenderId::new("Acme").unwrap();
        let request = prepare_send_token(send_token(), &key(), Some(&sender)).unwrap();
        let body: serde_json::Value =
            serde_json::from_str(&encode_json_body(&request).unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "api_key": "test-API",
                "message_type": "NUMERIC",
                "to": "2348109077743",
                "from": "Acme",
                "channel": "dnd",
                "pin_attempts": 10,
                "pin_time_to_live": 5,
                "pin_length": 6,
                "pin_placeholder": "< 1234 >",
                "message_text": "Your pin is < 1234 >",
                "pin_type": "NUMERIC"
            })
        );
    }

    #[test]
    fn send_token_requires_a_sender() {
        let err = prepare_send_token(send_token(), &key(), None).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "from" });
    }

    #[test]
    fn verify_and_generate_overwrite_key() {
        let mut verify = VerifyToken::new("c8dcd048-5e7f-4347-8c89-4470c3af0b", "195558");
        verify.api_key = "stale".to_owned();
        assert_eq!(prepare_verify_token(verify, &key()).api_key, "test-API");

        let generate = GenerateToken {
            pin_type: PinType::Alphanumeric,
            phone_number: "2348109077743".to_owned(),
            pin_attempts: 3,
            pin_time_to_live: 0,
            pin_length: 4,
            ..Default::default()
        };
        assert_eq!(prepare_generate_token(generate, &key()).api_key, "test-API");
    }

    #[test]
    fn decode_token_responses() {
        let sent: SendTokenResponse = decode_json_response(
            r#"{"pinId":"29ae67c2-c8e1-4165-8a51-8d3d7c298081","to":"2348109077743","smsStatus":"Message Sent"}"#,
        )
        .unwrap();
        assert_eq!(sent.pin_id, "29ae67c2-c8e1-4165-8a51-8d3d7c298081");
        assert_eq!(sent.sms_status, "Message Sent");

        let verified: VerifyTokenResponse = decode_json_response(
            r#"{"pinId":"c8dcd048","verified":"True","msisdn":"2348109077743"}"#,
        )
        .unwrap();
        assert_eq!(verified.verified, json!("True"));

        let generated: GenerateTokenResponse = decode_json_response(
            r#"
            {
              "status": "success",
              "data": {
                "pin_id": "a1c2f3e0",
                "otp": "522726",
                "phone_number": "2348109077743",
                "phone_number_other": "2348109077743"
              }
            }
            "#,
        )
        .unwrap();
        assert_eq!(generated.data.otp, "522726");
    }
}
