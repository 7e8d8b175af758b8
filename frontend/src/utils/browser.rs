//! Thin wrappers over `window.location`. On non-wasm targets (host tests) there is no
//! browser, so navigation is a logged no-op and the current path is unknown.

pub const LOGIN_PATH: &str = "/login";

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn navigate(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    match web_sys::window() {
        Some(window) => {
            if window.location().set_href(path).is_err() {
                log::error!("failed to navigate to {}", path);
            }
        }
        None => log::error!("no window, cannot navigate to {}", path),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate(path: &str) {
    log::debug!("navigate({}) ignored outside the browser", path);
}

pub fn redirect_to_login() {
    navigate(LOGIN_PATH);
}
