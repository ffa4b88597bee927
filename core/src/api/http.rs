//! Native transport over `reqwest`.
//!
//! Video handles are paths on disk; the bytes are read when the upload
//! starts.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AuthApi, CaptionApi};
use crate::config::{
    download_url, CLEANUP_PATH, LOGIN_FALLBACK, LOGIN_PATH, PROCESS_FALLBACK, PROCESS_PATH,
    REGISTER_FALLBACK, REGISTER_PATH, UPLOAD_FALLBACK, UPLOAD_FIELD_NAME, UPLOAD_PATH,
    USER_STATUS_PATH,
};
use crate::error::{ApiError, ApiResult};
use crate::types::{
    AuthResponse, LoginRequest, ProcessRequest, ProcessResponse, RegisterRequest, UploadResponse,
    UserStatus, VideoFile,
};

/// Caption server client for native targets.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// `base_url` without trailing slash, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse a configured client (cookies, timeouts, proxies).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response, fallback).await
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Turn a response into `T`, or into the server's error message.
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        log::debug!("Server returned {}: {}", status, body);
        return Err(ApiError::from_error_body(status.as_u16(), &body, fallback));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl CaptionApi for HttpApi {
    type File = PathBuf;

    async fn upload(&self, file: &VideoFile<PathBuf>) -> ApiResult<UploadResponse> {
        let bytes = tokio::fs::read(&file.handle)
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read {}: {}", file.handle.display(), e)))?;

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(transport_error)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .client
            .post(self.url(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response, UPLOAD_FALLBACK).await
    }

    async fn process(&self, request: &ProcessRequest) -> ApiResult<ProcessResponse> {
        self.post_json(PROCESS_PATH, request, PROCESS_FALLBACK).await
    }

    async fn cleanup(&self, filename: &str) -> ApiResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("{}/{}", CLEANUP_PATH, filename)))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_error_body(status.as_u16(), &body, "Cleanup failed"))
    }

    async fn user_status(&self) -> ApiResult<UserStatus> {
        let response = self
            .client
            .get(self.url(USER_STATUS_PATH))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response, "Could not load account status").await
    }

    fn download_url(&self, subtitle_file: &str) -> String {
        download_url(&self.base_url, subtitle_file)
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_json(LOGIN_PATH, request, LOGIN_FALLBACK).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_json(REGISTER_PATH, request, REGISTER_FALLBACK).await
    }
}
