use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::AdminEmployeesPanel;

#[component]
pub fn AdminEmployeesPage() -> impl IntoView {
    view! { <AdminEmployeesPanel /> }
}
