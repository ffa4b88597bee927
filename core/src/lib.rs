//! # AutoCaption - client workflow
//!
//! The part of the AutoCaption client that decides what happens when: pick
//! a video, choose caption styles and a language, upload, process, show
//! the generated captions and offer the subtitle downloads.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ select_file │────▶│   /upload   │────▶│  /process   │────▶│   results   │
//! │ (validate)  │     │ (multipart) │     │   (JSON)    │     │ /download/* │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Caption generation itself happens on the server; this crate only sees
//! the HTTP contract.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::cell::RefCell;
//! use autocaption::{run_workflow, HttpApi, VideoFile, WorkflowController};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let api = HttpApi::new("http://localhost:5000");
//!     let cell = RefCell::new(WorkflowController::new());
//!     let video = VideoFile::new("clip.mp4", "video/mp4", 1_048_576, "clip.mp4".into());
//!     cell.borrow_mut().select_file(video).unwrap();
//!     if run_workflow(&api, &cell).await.is_ok() {
//!         cell.borrow_mut().reveal_results();
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per boundary
//! - [`config`] - Limits, defaults and endpoint paths
//! - [`catalog`] - Caption styles and languages
//! - [`types`] - File handle and HTTP bodies
//! - [`validation`] - File checks and size formatting
//! - [`api`] - Transport traits (and the `reqwest` client with `native`)
//! - [`workflow`] - The upload/process controller
//! - [`auth`] - Login and registration forms

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Catalogs and checks
pub mod catalog;
pub mod validation;

// Transport
pub mod api;

// Controllers
pub mod workflow;
pub mod auth;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    ApiError, ApiResult, AuthError, AuthResult, ValidationError, WorkflowError, WorkflowResult,
};

pub use catalog::{find_language, language_name, CaptionStyle, Language, LANGUAGES};

pub use types::{
    AuthResponse, Caption, LoginRequest, ProcessRequest, ProcessResponse, RegisterRequest,
    StyleResult, UploadResponse, Usage, UserStatus, VideoFile, VideosRemaining,
};

pub use validation::{format_file_size, validate_video};

pub use api::{AuthApi, CaptionApi};

#[cfg(feature = "native")]
pub use api::HttpApi;

pub use workflow::{
    refresh_usage, run_workflow, start_over, Phase, PreviewLine, Progress, RunPlan, Sections,
    StateCell, StylePreview, WorkflowController, WorkflowState,
};

pub use auth::{submit_login, submit_register, AuthForm, AuthKind, RegisterInput};
