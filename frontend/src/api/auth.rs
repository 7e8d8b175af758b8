use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, ChangePasswordRequest, CurrentUser, LoginRequest, SuccessCode},
};

impl ApiClient {
    /// Credential check is done by the server; the session cookie comes back with the response.
    pub async fn login(&self, request: &LoginRequest) -> Result<CurrentUser, ApiError> {
        self.send_json::<_, CurrentUser>(Method::POST, "/auth/login", request, SuccessCode::Read)
            .await?
            .ok_or_else(|| ApiError::decode("login returned no user"))
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_json::<_, Value>(
            Method::POST,
            "/auth/logout",
            &serde_json::json!({}),
            SuccessCode::Read,
        )
        .await
        .map(|_| ())
    }

    pub async fn fetch_current_user(&self) -> Result<CurrentUser, ApiError> {
        self.get("/auth/me", &[]).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.send_json::<_, Value>(Method::PUT, "/auth/password", request, SuccessCode::Read)
            .await
            .map(|_| ())
    }
}
