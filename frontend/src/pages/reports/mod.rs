use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::ReportsPanel;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! { <ReportsPanel /> }
}
