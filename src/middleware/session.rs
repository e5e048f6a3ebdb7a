use axum::{extract::FromRequestParts, http::HeaderName};

use crate::error::AppError;

pub const SESSION_HEADER: HeaderName = HeaderName::from_static("x-session-id");
pub const ANONYMOUS: &str = "anonymous";
const MAX_LEN: usize = 64;

/// Storage namespace of one shopper, standing in for a browser profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session(String);

impl Session {
    pub fn new(id: impl Into<String>) -> Result<Self, AppError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.len() <= MAX_LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        if !valid {
            return Err(AppError::BadRequest("Invalid session id".into()));
        }
        Ok(Self(id))
    }

    pub fn anonymous() -> Self {
        Self(ANONYMOUS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;
    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(&SESSION_HEADER) else {
            return Ok(Session::anonymous());
        };

        let id = header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid session header".into()))?;

        Session::new(id.trim())
    }
}
