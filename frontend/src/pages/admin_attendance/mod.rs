use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::AdminAttendancePanel;

#[component]
pub fn AdminAttendancePage() -> impl IntoView {
    view! { <AdminAttendancePanel /> }
}
