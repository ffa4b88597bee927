//! Error types for the caption workflow.
//!
//! One enum per boundary:
//!
//! - [`ApiError`] - HTTP contract failures (server status, transport, decoding)
//! - [`ValidationError`] - Client-side checks that never touch the network
//! - [`WorkflowError`] - Failures surfaced by a workflow run
//! - [`AuthError`] - Failures surfaced by the login/register forms
//!
//! The `Display` output of every variant is the message shown to the user.

use thiserror::Error;

use crate::config::MAX_FILE_SIZE_MB;

// =============================================================================
// API Errors
// =============================================================================

/// Errors from the HTTP collaborator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx status. `message` is the server's `error` string or a
    /// stage-specific fallback.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        upgrade_required: bool,
    },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the contract.
    #[error("Network error: malformed response ({0})")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a raw error body, falling back to
    /// `fallback` when the body carries no `error` string.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let parsed = serde_json::from_str::<crate::types::ErrorBody>(body).ok();
        let upgrade_required = parsed.as_ref().map(|b| b.upgrade_required).unwrap_or(false);
        let message = parsed
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        ApiError::Server {
            status,
            message,
            upgrade_required,
        }
    }

    /// True when the server refused because the free quota is used up.
    pub fn upgrade_required(&self) -> bool {
        matches!(self, ApiError::Server { upgrade_required: true, .. })
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Client-side validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid file type. Please upload MP4, MOV, AVI, MKV, or WebM.")]
    UnsupportedMediaType(String),

    #[error("File too large. Maximum size is {}MB.", MAX_FILE_SIZE_MB)]
    FileTooLarge { size: u64 },

    #[error("Please select at least one caption style")]
    NoStyleSelected,

    #[error("Please select a video file first")]
    NoFileSelected,

    #[error("Unknown caption style: {0}")]
    UnknownStyle(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

// =============================================================================
// Workflow Errors
// =============================================================================

/// Errors from one workflow run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Upload stage failed; processing never started.
    #[error("{0}")]
    Upload(ApiError),

    /// Process stage failed after a successful upload.
    #[error("{0}")]
    Process(ApiError),

    /// A run is already in flight.
    #[error("A video is already being processed")]
    AlreadyRunning,

    /// Results are showing; the selection is frozen until reset.
    #[error("Start a new video to change the selection")]
    Locked,
}

impl WorkflowError {
    /// The underlying API error, when the failure came from the network.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            WorkflowError::Upload(e) | WorkflowError::Process(e) => Some(e),
            _ => None,
        }
    }
}

// =============================================================================
// Auth Errors
// =============================================================================

/// Errors from the login/register forms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Rejected(String),

    #[error("Network error. Please try again.")]
    Network,

    #[error("Please wait for the current request to finish")]
    Busy,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for HTTP collaborator calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Result type for auth form operations.
pub type AuthResult<T> = Result<T, AuthError>;
