use super::view_model::use_admin_attendance_view_model;
use crate::components::{
    attendance_table::AttendanceTable,
    common::SearchInput,
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageTitle},
    pagination::Pagination,
};
use leptos::*;

#[component]
pub fn AdminAttendancePanel() -> impl IntoView {
    let vm = use_admin_attendance_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let resource = vm.records.state();

    view! {
        <PageTitle title="Attendance">
            <button
                type="button"
                class="text-sm text-link hover:text-link-hover"
                on:click=move |_| vm.records.reload()
            >
                "Refresh"
            </button>
        </PageTitle>
        <div class="flex justify-end mb-3">
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search employee or date"
            />
        </div>
        <InlineErrorMessage error=vm.records.error() fallback="Could not load attendance records." />
        <Show
            when=move || !resource.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <AttendanceTable rows=rows show_employee=true />
            <Pagination table=table page=page />
        </Show>
    }
}
