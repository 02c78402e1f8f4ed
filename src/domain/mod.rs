//! Domain layer: strong types with validation and the request/response records (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    DeviceTemplate, GenerateToken, Media, NumberMessage, NumberStatus, RegisterSenderId,
    SendMessage, SendToken, VerifyNumber, VerifyToken,
};
pub use response::{
    BalanceResponse, CountryDetail, DeviceTemplateResponse, GenerateTokenResponse,
    GeneratedToken, HistoryEntry, NumberInsight, NumberMessageResponse, NumberStatusResponse,
    OperatorDetail, RegisterSenderIdResponse, RouteDetail, SendMessageResponse,
    SendTokenResponse, SenderIdEntry, SenderIdPage, VerifyNumberResponse, VerifyTokenResponse,
};
pub use validation::ValidationError;
pub use value::{Amount, ApiKey, BaseUrl, Channel, PhoneNumber, PinType, SenderId};
