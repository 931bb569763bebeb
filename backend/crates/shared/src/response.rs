//! API Response Envelope
//!
//! Every non-204 response body uses the same shape:
//! `{success, message, data, statusCode}`. `data` is `null` on error paths.

use serde::Serialize;

use crate::error::kind::ErrorKind;

/// Uniform response envelope.
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let body = ApiResponse::ok(vec![1, 2, 3]);
/// assert!(body.success);
/// assert_eq!(body.status_code, 200);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    /// 200 OK with data.
    pub fn ok(data: T) -> Self {
        Self::ok_with(data, "Operation successful")
    }

    /// 200 OK with data and a custom message.
    pub fn ok_with(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            status_code: 200,
        }
    }

    /// 201 Created with the created resource.
    pub fn created(data: T) -> Self {
        Self {
            success: true,
            message: "Resource created successfully".to_string(),
            data: Some(data),
            status_code: 201,
        }
    }

    /// Error envelope for the given kind. `data` is always absent.
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            status_code: kind.status_code(),
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
