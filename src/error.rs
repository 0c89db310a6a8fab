use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use boxline_contact::ContactError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Invalid request body")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Contact(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Contact(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Contact(ContactError::Delivery(e)) => {
                tracing::debug!("Contact delivery failed: {e:#}");
            }
            ApiError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
            }
            ApiError::Contact(_) => {}
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
