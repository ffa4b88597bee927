//! Login and registration requests.

use autocaption::config::{LOGIN_FALLBACK, LOGIN_PATH, REGISTER_FALLBACK, REGISTER_PATH};
use autocaption::{ApiResult, AuthApi, AuthResponse, LoginRequest, RegisterRequest};
use gloo_net::http::Request;

use super::caption::{read_json, transport_error, BrowserApi};

impl BrowserApi {
    async fn post_auth<B: serde::Serialize>(&self, path: &str, body: &B, fallback: &str) -> ApiResult<AuthResponse> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        read_json(response, fallback).await
    }
}

impl AuthApi for BrowserApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_auth(LOGIN_PATH, request, LOGIN_FALLBACK).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_auth(REGISTER_PATH, request, REGISTER_FALLBACK).await
    }
}
