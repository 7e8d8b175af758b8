use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    api::types::{ApiError, Envelope, SuccessCode},
    config,
    state::session::SessionStore,
    utils::browser,
};

/// Requests to these paths report 401 as a rejection instead of an expired session.
const AUTH_EXEMPT_PATHS: &[&str] = &["/auth/login"];

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<SessionStore>,
}

pub(crate) struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: None,
        }
    }

    /// Attaches the session that is cleared when the server reports 401/403.
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn handle_auth_expired(&self, status: u16) {
        log::info!("session rejected by server (HTTP {}), signing out", status);
        if let Some(session) = &self.session {
            session.logout();
        }
        browser::redirect_to_login();
    }

    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<RawResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header("X-Request-Id", Uuid::new_v4().to_string());
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;

        let raw = self.execute(request).await.map_err(|err| {
            log::warn!("{} {} failed: {}", method, path, err);
            err
        })?;

        if is_auth_failure(raw.status) && !AUTH_EXEMPT_PATHS.contains(&path) {
            self.handle_auth_expired(raw.status);
            return Err(ApiError::AuthExpired { status: raw.status });
        }
        Ok(raw)
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn execute(&self, request: reqwest::Request) -> Result<RawResponse, ApiError> {
        if let Some(responder) = mock::find(request.url().as_str()) {
            let response = responder.respond(&request)?;
            return Ok(RawResponse {
                status: response.status,
                body: response.body,
            });
        }
        self.execute_http(request).await
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn execute(&self, request: reqwest::Request) -> Result<RawResponse, ApiError> {
        self.execute_http(request).await
    }

    async fn execute_http(&self, request: reqwest::Request) -> Result<RawResponse, ApiError> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    /// Sends a request and unwraps the envelope, checking the envelope code against `expected`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
        expected: SuccessCode,
    ) -> Result<Option<T>, ApiError> {
        let raw = self.send(method.clone(), path, query, body).await?;
        let result = parse_envelope::<T>(&raw)?.into_result(expected);
        if let Err(err) = &result {
            log::warn!("{} {} rejected: {}", method, path, err);
        }
        result
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<T>(Method::GET, path, query, None, SuccessCode::Read)
            .await?
            .ok_or_else(|| ApiError::decode(format!("{} returned no data", path)))
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ApiError> {
        Ok(self
            .request::<Vec<T>>(Method::GET, path, query, None, SuccessCode::Read)
            .await?
            .unwrap_or_default())
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expected: SuccessCode,
    ) -> Result<Option<T>, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Could not encode request: {}", e)))?;
        self.request(method, path, &[], Some(body), expected).await
    }

    /// Fetches a binary body. Failures may still carry a JSON envelope with a message.
    pub(crate) async fn download(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<u8>, ApiError> {
        let raw = self.send(Method::GET, path, query, None).await?;
        if (200..300).contains(&raw.status) {
            return Ok(raw.body);
        }
        let message = serde_json::from_slice::<Envelope<Value>>(&raw.body)
            .ok()
            .and_then(|env| env.message);
        Err(ApiError::rejected(i64::from(raw.status), message))
    }
}

fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

fn parse_envelope<T: DeserializeOwned>(raw: &RawResponse) -> Result<Envelope<T>, ApiError> {
    match serde_json::from_slice::<Envelope<T>>(&raw.body) {
        Ok(envelope) => Ok(envelope),
        Err(err) if (200..300).contains(&raw.status) => Err(ApiError::decode(err.to_string())),
        // Non-2xx without a readable envelope: report the HTTP status, keep any message.
        Err(_) => {
            let message = serde_json::from_slice::<Envelope<Value>>(&raw.body)
                .ok()
                .and_then(|env| env.message);
            Err(ApiError::rejected(i64::from(raw.status), message))
        }
    }
}

pub(crate) fn encode_segment(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment, percent_encoding::NON_ALPHANUMERIC).to_string()
}
