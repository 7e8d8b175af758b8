use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::MyLeavePanel;

#[component]
pub fn MyLeavePage() -> impl IntoView {
    view! { <MyLeavePanel /> }
}
