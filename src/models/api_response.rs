use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JSON envelope used by every non-plain-text reply, error bodies included.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[schema(nullable = false)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: Option<T>, error: Option<String>) -> Self {
        Self {
            success: error.is_none(),
            data,
            error,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
