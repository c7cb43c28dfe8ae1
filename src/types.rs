//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Upload Types** - Server-owned inspection records
//! - **Session Types** - The authenticated user
//! - **API Types** - Request/response payloads
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Upload Types
// =============================================================================

/// A user-submitted blade image tracked by the backend.
///
/// The client never mutates these records; the whole list is replaced on
/// every successful fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    /// Server-assigned record id
    pub id: u64,
    /// Stored filename, also the key for the original image route
    pub filename: String,
    /// Server timestamp of the upload
    pub upload_date: String,
    /// Completed analyses; absent in the payload until the first one exists
    #[serde(default)]
    pub analyses: Vec<Analysis>,
}

impl Upload {
    /// A non-empty `analyses` list is the one signal that flips an upload
    /// from actionable to terminal.
    pub fn is_analyzed(&self) -> bool {
        !self.analyses.is_empty()
    }

    /// Path of the first usable analysis artifact, if any.
    pub fn first_result_path(&self) -> Option<&str> {
        self.analyses
            .iter()
            .filter_map(|analysis| analysis.result_path.as_deref())
            .find(|path| !path.is_empty())
    }
}

/// Backend-produced result artifact for an [`Upload`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Relative path of the rendered output image; nullable server-side
    /// while the artifact is being written
    #[serde(default)]
    pub result_path: Option<String>,
}

/// Media-type guard for the upload flow: only images may be selected.
pub fn accepts_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

// =============================================================================
// Session Types
// =============================================================================

/// The client's record of the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub id: u64,
}

// =============================================================================
// API Types
// =============================================================================

/// Payload for `POST /api/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from `POST /api/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: u64,
}

/// Payload for `POST /api/register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Fallback notification text when the server gives no error detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Frontend application errors.
///
/// Every variant is caught at the UI call site and surfaced as a toast;
/// nothing here is fatal to the session.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A 2xx body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// A browser API refused to cooperate (FormData, storage, ...).
    #[error("Browser error: {0}")]
    Browser(String),
}

impl AppError {
    /// Text for the user-facing notification: the server-provided message
    /// when there is one, otherwise the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_deserialization() {
        let json = r#"[
            {
                "id": 7,
                "filename": "blade_042.png",
                "upload_date": "2025-07-30T14:12:03",
                "analyses": [
                    {"result_path": "blade_042_annotated.png"}
                ]
            },
            {
                "id": 8,
                "filename": "blade_043.png",
                "upload_date": "2025-07-30T14:20:41"
            }
        ]"#;

        let uploads: Vec<Upload> = serde_json::from_str(json).unwrap();
        assert_eq!(uploads.len(), 2);
        assert!(uploads[0].is_analyzed());
        assert_eq!(
            uploads[0].first_result_path(),
            Some("blade_042_annotated.png")
        );
        assert!(!uploads[1].is_analyzed());
        assert_eq!(uploads[1].first_result_path(), None);
    }

    #[test]
    fn test_null_result_path_is_not_usable() {
        let json = r#"{
            "id": 9,
            "filename": "blade_044.png",
            "upload_date": "2025-07-31T09:00:00",
            "analyses": [{"result_path": null}, {"result_path": "out.png"}]
        }"#;

        let upload: Upload = serde_json::from_str(json).unwrap();
        // Still terminal for the analyze action, even without an artifact yet
        assert!(upload.is_analyzed());
        assert_eq!(upload.first_result_path(), Some("out.png"));
    }

    #[test]
    fn test_media_type_guard() {
        assert!(accepts_media_type("image/png"));
        assert!(accepts_media_type("image/jpeg"));
        assert!(!accepts_media_type("video/mp4"));
        assert!(!accepts_media_type("application/pdf"));
        assert!(!accepts_media_type(""));
    }

    #[test]
    fn test_user_message_prefers_server_detail() {
        let err = AppError::Api {
            status: 500,
            message: "model unavailable".to_string(),
        };
        assert_eq!(err.user_message(), "model unavailable");

        let blank = AppError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(blank.user_message(), GENERIC_ERROR_MESSAGE);

        let network = AppError::Network("timeout".to_string());
        assert_eq!(network.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
