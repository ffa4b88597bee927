//! HTTP service for the caption server, over the browser `fetch` API.

use autocaption::config::{
    download_url, CLEANUP_PATH, PROCESS_FALLBACK, PROCESS_PATH, UPLOAD_FALLBACK, UPLOAD_FIELD_NAME,
    UPLOAD_PATH, USER_STATUS_PATH,
};
use autocaption::{
    ApiError, ApiResult, CaptionApi, ProcessRequest, ProcessResponse, UploadResponse, UserStatus,
    VideoFile,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

/// Caption server client for the browser.
#[derive(Clone, Debug)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub(crate) fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Parse a success body, or turn an error status into the server message.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !response.ok() {
        log::debug!("Server returned {}: {}", status, body);
        return Err(ApiError::from_error_body(status, &body, fallback));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

impl CaptionApi for BrowserApi {
    type File = File;

    async fn upload(&self, file: &VideoFile<File>) -> ApiResult<UploadResponse> {
        let form_data = FormData::new()
            .map_err(|e| ApiError::Network(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD_NAME, &file.handle, &file.name)
            .map_err(|e| ApiError::Network(format!("Failed to append file: {:?}", e)))?;

        let response = Request::post(&self.url(UPLOAD_PATH))
            .body(form_data)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response, UPLOAD_FALLBACK).await
    }

    async fn process(&self, request: &ProcessRequest) -> ApiResult<ProcessResponse> {
        let response = Request::post(&self.url(PROCESS_PATH))
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response, PROCESS_FALLBACK).await
    }

    async fn cleanup(&self, filename: &str) -> ApiResult<()> {
        let encoded = String::from(js_sys::encode_uri_component(filename));
        let response = Request::delete(&self.url(&format!("{}/{}", CLEANUP_PATH, encoded)))
            .send()
            .await
            .map_err(transport_error)?;

        if response.ok() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_error_body(response.status(), &body, "Cleanup failed"))
    }

    async fn user_status(&self) -> ApiResult<UserStatus> {
        let response = Request::get(&self.url(USER_STATUS_PATH))
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response, "Could not load account status").await
    }

    fn download_url(&self, subtitle_file: &str) -> String {
        let encoded = String::from(js_sys::encode_uri_component(subtitle_file));
        download_url(&self.base_url, &encoded)
    }
}

/// Full-page navigation; used for downloads and post-login redirects.
pub fn navigate_to(url: &str) {
    if let Err(e) = leptos::window().location().set_href(url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}
