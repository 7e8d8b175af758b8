use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::EmployeeDashboardPanel;

#[component]
pub fn EmployeeDashboardPage() -> impl IntoView {
    view! { <EmployeeDashboardPanel /> }
}
