/// Response envelope shared by every endpoint
use axum::{
    response::{IntoResponse, Response as HttpResponse},
    Json,
};
use serde::Serialize;

pub const CODE_SUCCESS: i32 = 0;
/// Request requires a logged-in user
pub const CODE_CHECK_LOGIN: i32 = 401;
pub const CODE_NO_PERMISSION: i32 = 403;
pub const CODE_NOT_FOUND: i32 = 404;
pub const CODE_PARAM_ERR: i32 = 40001;
pub const CODE_DB_ERROR: i32 = 50001;
pub const CODE_INTERNAL_SETTING: i32 = 50005;

pub const MSG_NOT_LOGGED_IN: &str = "not logged in";

/// Status-coded container around a payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response<T = ()> {
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Response<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: CODE_SUCCESS,
            data: Some(data),
            msg: String::new(),
            error: None,
        }
    }
}

impl Response<()> {
    pub fn err(code: i32, msg: impl Into<String>, error: Option<String>) -> Self {
        Self {
            code,
            data: None,
            msg: msg.into(),
            error,
        }
    }
}

/// Fixed payload for requests without a session
pub fn check_login() -> Response {
    Response::err(CODE_CHECK_LOGIN, MSG_NOT_LOGGED_IN, None)
}

/// Application status travels in the body; transport status stays 200
impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> HttpResponse {
        Json(self).into_response()
    }
}
