use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <AdminDashboardPanel /> }
}
