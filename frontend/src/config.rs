use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub default_page_size: Option<usize>,
    #[serde(default)]
    pub toast_timeout_ms: Option<u32>,
}

impl RuntimeConfig {
    pub fn api_base_url(&self) -> String {
        self.api_base_url
            .clone()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn page_size(&self) -> usize {
        self.default_page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn toast_timeout_ms(&self) -> u32 {
        self.toast_timeout_ms.unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
    }

    /// Fills unset fields from `other`. Values already present win.
    fn merge(mut self, other: RuntimeConfig) -> Self {
        if self.api_base_url.is_none() {
            self.api_base_url = other.api_base_url;
        }
        if self.default_page_size.is_none() {
            self.default_page_size = other.default_page_size;
        }
        if self.toast_timeout_ms.is_none() {
            self.toast_timeout_ms = other.toast_timeout_ms;
        }
        self
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__HRMS_ENV (env.js) takes precedence over window.__HRMS_CONFIG.
    match (read_global("__HRMS_ENV"), read_global("__HRMS_CONFIG")) {
        (Some(env), Some(cfg)) => Some(env.merge(cfg)),
        (env, cfg) => env.or(cfg),
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::get(url).await.ok()?;
    if !resp.status().is_success() {
        log::warn!("config.json returned {}", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> Option<String> {
    None
}

/// Resolves the runtime config once; later calls return the cached value.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut resolved = snapshot_from_globals().unwrap_or_default();
    if resolved.api_base_url.is_none() {
        if let Some(from_file) = fetch_runtime_config().await {
            resolved = resolved.merge(from_file);
        }
    }
    store_resolved(resolved)
}

/// First writer wins; a later resolution is logged and dropped.
fn store_resolved(resolved: RuntimeConfig) -> RuntimeConfig {
    if RUNTIME_CONFIG.set(resolved).is_err() {
        log::debug!("runtime config already initialized, keeping the first value");
    }
    runtime()
}

/// Current config, or defaults while `init` has not finished.
pub fn runtime() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    init().await.api_base_url()
}
