use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::ChangePasswordPanel;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! { <ChangePasswordPanel /> }
}
