mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, runtime config, then the app shell.
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting HRMS frontend");

    leptos::spawn_local(async {
        let config = config::init().await;
        log::info!("runtime config ready, API at {}", config.api_base_url());
    });

    router::mount_app();
}
