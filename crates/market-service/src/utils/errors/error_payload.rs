use serde::Serialize;
use utoipa::ToSchema;

/// JSON body returned for every failed request. Upstream provider detail
/// never leaks into it; callers get the message, status code, and a
/// stable error type identifier.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorPayload {
    pub message: String,
    /// HTTP status code, duplicated in the body
    pub code: u16,
    pub r#type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
