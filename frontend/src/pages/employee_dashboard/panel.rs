use super::{
    repository::ClockAction,
    view_model::{use_employee_dashboard_view_model, ClockState},
};
use crate::components::{
    attendance_table::AttendanceTable,
    common::{Button, ButtonVariant, SearchInput},
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageTitle},
    pagination::Pagination,
};
use leptos::*;

#[component]
pub fn EmployeeDashboardPanel() -> impl IntoView {
    let vm = use_employee_dashboard_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let state = vm.clock_state();
    let clock_pending = vm.clock_action.pending();
    let resource = vm.records.state();

    view! {
        <PageTitle title="My attendance">
            <Button
                on:click=move |_| vm.clock_action.dispatch(ClockAction::CheckIn)
                disabled=Signal::derive(move || state.get() != ClockState::NotCheckedIn)
                loading=clock_pending
            >
                "Check in"
            </Button>
            <Button
                variant=ButtonVariant::Secondary
                on:click=move |_| vm.clock_action.dispatch(ClockAction::CheckOut)
                disabled=Signal::derive(move || state.get() != ClockState::CheckedIn)
                loading=clock_pending
            >
                "Check out"
            </Button>
        </PageTitle>
        <div class="flex justify-end mb-3">
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search by date"
            />
        </div>
        <InlineErrorMessage error=vm.records.error() fallback="Could not load your attendance records." />
        <Show
            when=move || !resource.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <AttendanceTable rows=rows />
            <Pagination table=table page=page />
        </Show>
    }
}
