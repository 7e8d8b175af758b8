use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::AdminLeavePanel;

#[component]
pub fn AdminLeavePage() -> impl IntoView {
    view! { <AdminLeavePanel /> }
}
