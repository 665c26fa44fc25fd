use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform body shape shared by every endpoint: a success flag plus whichever
/// of message, count, and data the operation produces. Fields that do not
/// apply are omitted from the serialized body entirely, never sent as null.
/// The error slot only appears on server faults and carries either the
/// failure detail (development) or an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying a single record
    pub fn record(data: T) -> Self {
        Self {
            success: true,
            message: None,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    /// Success envelope carrying an operation message and the affected record
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            count: None,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Success envelope for listings; count mirrors the collection length
    pub fn collection(items: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            count: Some(items.len()),
            data: Some(items),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Failure envelope: just the flag and an explanatory message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: None,
        }
    }

    /// Failure envelope for server faults, with the detail slot populated
    pub fn failure_with_detail(message: impl Into<String>, detail: Value) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            count: None,
            data: None,
            error: Some(detail),
        }
    }
}
