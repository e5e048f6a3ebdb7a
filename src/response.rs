use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<i64>,
}

impl Meta {
    pub fn total(total: usize) -> Self {
        Self {
            total: Some(total as i64),
        }
    }

    pub fn empty() -> Self {
        Self { total: None }
    }
}

/// Severity of the transient notice shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub level: NoticeLevel,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self::with_level(NoticeLevel::Success, message, data, meta)
    }

    pub fn info(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self::with_level(NoticeLevel::Info, message, data, meta)
    }

    pub fn with_level(
        level: NoticeLevel,
        message: impl Into<String>,
        data: T,
        meta: Option<Meta>,
    ) -> Self {
        Self {
            message: message.into(),
            level,
            data: Some(data),
            meta,
        }
    }
}
