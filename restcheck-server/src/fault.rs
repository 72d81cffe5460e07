use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use restcheck_lib::ErrorDesc;
use thiserror::Error;

/// Failure categories a resource handler can signal instead of returning a value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("invalid argument")]
    InvalidArgument,
    #[error("unsupported operation")]
    Unsupported,
}

// The two fixtures translate the same fault categories differently: the
// round-trip fixture answers an unsupported operation with 501 and sends no
// body, the controller stub answers with 500 and attaches an ErrorDesc body
// to invalid-argument responses.

pub struct RoundTripFault(pub Fault);

impl IntoResponse for RoundTripFault {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Fault::InvalidArgument => StatusCode::BAD_REQUEST,
            Fault::Unsupported => StatusCode::NOT_IMPLEMENTED,
        };
        status.into_response()
    }
}

pub struct StubFault(pub Fault);

impl IntoResponse for StubFault {
    fn into_response(self) -> Response {
        match self.0 {
            Fault::InvalidArgument => {
                (StatusCode::BAD_REQUEST, Json(ErrorDesc::default())).into_response()
            }
            Fault::Unsupported => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
