//! HTTP error responses.
//!
//! Each endpoint answers failures with a one-key JSON object whose key
//! depends on the failure: per-field `errors` for create validation, `Error`
//! for create decoding and storage failures, `error` for everything else the
//! persons endpoints reject, and `message` for unmatched routes.

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ErrorBody {
    /// `{"errors":{"<field>":"<message>"}}`
    #[serde(rename = "errors")]
    Fields(BTreeMap<&'static str, &'static str>),
    /// `{"Error":"<message>"}`
    #[serde(rename = "Error")]
    Format(String),
    /// `{"error":"<message>"}`
    #[serde(rename = "error")]
    Detail(String),
    /// `{"message":"<message>"}`
    #[serde(rename = "message")]
    Message(String),
}

impl ErrorBody {
    fn text(&self) -> String {
        match self {
            Self::Fields(fields) => fields
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("; "),
            Self::Format(message) | Self::Detail(message) | Self::Message(message) => {
                message.clone()
            }
        }
    }
}

/// An HTTP status paired with its JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// Pair a status with a body.
    #[must_use]
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// `400 {"errors":{...}}`.
    #[must_use]
    pub fn invalid_fields(fields: BTreeMap<&'static str, &'static str>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::Fields(fields))
    }

    /// `400 {"error":"<message>"}`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorBody::Detail(message.into()))
    }

    /// `404 {"error":"<message>"}`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ErrorBody::Detail(message.into()))
    }

    /// `500 {"error":"<message>"}`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::Detail(message.into()),
        )
    }

    /// Map a domain error, substituting fixed client-facing messages.
    #[must_use]
    pub fn from_domain(err: &Error, not_found: &str, internal: &str) -> Self {
        match err.code() {
            ErrorCode::NotFound => Self::not_found(not_found),
            _ => {
                error!(
                    error = %err,
                    trace_id = ?err.trace_id().map(|id| id.to_string()),
                    "request failed"
                );
                Self::internal(internal)
            }
        }
    }

    /// Response status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response body.
    #[must_use]
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status.as_u16(), self.body.text())
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use insta::assert_json_snapshot;
    use rstest::rstest;

    #[rstest]
    fn field_errors_nest_under_errors_key() {
        let body = ErrorBody::Fields(BTreeMap::from([
            ("name", "Name is required."),
            ("age", "Age is required."),
        ]));
        assert_json_snapshot!(body, @r#"
        {
          "errors": {
            "age": "Age is required.",
            "name": "Name is required."
          }
        }
        "#);
    }

    #[rstest]
    #[case(ErrorBody::Format("Invalid request format".to_owned()), "Error")]
    #[case(ErrorBody::Detail("Person not found".to_owned()), "error")]
    #[case(ErrorBody::Message("Resource not found".to_owned()), "message")]
    fn message_bodies_use_their_key(#[case] body: ErrorBody, #[case] key: &str) {
        let value = serde_json::to_value(&body).expect("serialise");
        let object = value.as_object().expect("object body");
        assert_eq!(object.len(), 1);
        assert!(object.contains_key(key));
    }

    #[rstest]
    #[case(Error::not_found("person not found"), StatusCode::NOT_FOUND, "Person not found")]
    #[case(Error::internal("connection refused"), StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")]
    fn domain_errors_map_to_fixed_messages(
        #[case] err: Error,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let api = ApiError::from_domain(&err, "Person not found", "Internal server error");
        assert_eq!(api.status(), status);
        assert_eq!(api.body(), &ErrorBody::Detail(message.to_owned()));
    }

    #[actix_web::test]
    async fn response_carries_status_and_json() {
        let response = ApiError::not_found("Person not found").error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.expect("body");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_json_snapshot!(value, @r#"
        {
          "error": "Person not found"
        }
        "#);
    }

    #[rstest]
    fn display_includes_status() {
        let err = ApiError::bad_request("Invalid Person ID");
        assert_eq!(err.to_string(), "400: Invalid Person ID");
    }
}
