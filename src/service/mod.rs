//! Transport-independent request layer: validation, status mapping and JSON bodies.
//!
//! Each handler takes already-decoded request input (a JSON payload, a literal
//! string, query parameter pairs) and returns an [`ApiResponse`]. Any HTTP
//! framework or the `strs` CLI can sit on top.

pub mod handlers;

pub use handlers::StringService;

use serde_json::{json, Value};

/// Response status of a request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Created,
    NoContent,
    BadRequest,
    NotFound,
    Conflict,
    UnprocessableEntity,
    InternalError,
}

impl StatusCode {
    /// The numeric HTTP status this maps to.
    pub fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::InternalError => 500,
        }
    }

    /// Whether this is a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok | Self::Created | Self::NoContent)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A handler's result: a status and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// A response with no body (204).
    pub fn no_content() -> Self {
        Self {
            status: StatusCode::NoContent,
            body: None,
        }
    }

    /// An error response with body `{"error": message}`.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// The `error` message of an error body, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.body.as_ref()?.get("error")?.as_str()
    }
}
