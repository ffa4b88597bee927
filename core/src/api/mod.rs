//! HTTP collaborator seam.
//!
//! The workflow never talks to the network directly; it goes through
//! [`CaptionApi`], which each platform implements (browser `fetch`,
//! `reqwest`, or a scripted double in tests).
//!
//! | Method | Path                  | Used by                      |
//! |--------|-----------------------|------------------------------|
//! | POST   | `/upload`             | [`CaptionApi::upload`]       |
//! | POST   | `/process`            | [`CaptionApi::process`]      |
//! | DELETE | `/cleanup/{filename}` | [`CaptionApi::cleanup`]      |
//! | GET    | `/auth/user/status`   | [`CaptionApi::user_status`]  |
//! | POST   | `/auth/login`         | [`AuthApi::login`]           |
//! | POST   | `/auth/register`      | [`AuthApi::register`]        |
//! | GET    | `/download/{id}`      | navigated to, never fetched  |

#[cfg(feature = "native")]
pub mod http;

#[cfg(feature = "native")]
pub use http::HttpApi;

use crate::error::ApiResult;
use crate::types::{
    AuthResponse, LoginRequest, ProcessRequest, ProcessResponse, RegisterRequest, UploadResponse,
    UserStatus, VideoFile,
};

/// Calls made by the upload/process workflow.
///
/// Futures are not required to be `Send`: the workflow runs on one
/// cooperative thread.
#[allow(async_fn_in_trait)]
pub trait CaptionApi {
    /// Platform file handle carried inside [`VideoFile`].
    type File: Clone;

    /// `POST /upload` with the video under [`crate::config::UPLOAD_FIELD_NAME`].
    async fn upload(&self, file: &VideoFile<Self::File>) -> ApiResult<UploadResponse>;

    /// `POST /process`.
    async fn process(&self, request: &ProcessRequest) -> ApiResult<ProcessResponse>;

    /// `DELETE /cleanup/{filename}`.
    async fn cleanup(&self, filename: &str) -> ApiResult<()>;

    /// `GET /auth/user/status`.
    async fn user_status(&self) -> ApiResult<UserStatus>;

    /// Navigation target for a subtitle file.
    fn download_url(&self, subtitle_file: &str) -> String;
}

/// Calls made by the login/register forms.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse>;

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse>;
}
