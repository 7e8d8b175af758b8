use super::view_model::use_admin_dashboard_view_model;
use crate::components::{error::InlineErrorMessage, layout::PageTitle};
use leptos::*;

#[component]
fn CountCard(#[prop(into)] label: String, value: Signal<usize>, #[prop(into)] href: String) -> impl IntoView {
    view! {
        <a href=href class="block rounded-lg border border-border bg-surface-elevated p-5 shadow-sm hover:shadow">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{move || value.get()}</p>
        </a>
    }
}

#[component]
pub fn AdminDashboardPanel() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let counts = vm.counts();
    let loading = vm.loading();

    view! {
        <PageTitle title="Admin dashboard">
            <button
                type="button"
                class="text-sm text-link hover:text-link-hover disabled:opacity-50"
                disabled=move || loading.get()
                on:click=move |_| {
                    vm.employees.reload();
                    vm.leave.reload();
                }
            >
                "Refresh"
            </button>
        </PageTitle>
        <InlineErrorMessage error=vm.employees.error() fallback="Could not load employees." />
        <InlineErrorMessage error=vm.leave.error() fallback="Could not load leave requests." />
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
            <CountCard label="Employees" value=Signal::derive(move || counts.get().employees) href="/admin/employees" />
            <CountCard label="Administrators" value=Signal::derive(move || counts.get().admins) href="/admin/employees" />
            <CountCard label="Pending leave" value=Signal::derive(move || counts.get().pending_leave) href="/admin/leave-requests" />
            <CountCard label="Approved leave" value=Signal::derive(move || counts.get().approved_leave) href="/admin/leave-requests" />
        </div>
    }
}
