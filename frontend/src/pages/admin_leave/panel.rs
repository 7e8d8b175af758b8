use super::view_model::use_admin_leave_view_model;
use crate::{
    api::LeaveStatus,
    components::{
        common::SearchInput,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageTitle},
        leave_table::LeaveTable,
        pagination::Pagination,
    },
};
use leptos::*;

#[component]
fn StatusFilter(value: Signal<Option<LeaveStatus>>, on_change: Callback<Option<LeaveStatus>>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            "Status"
            <select
                class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-2"
                on:change=move |ev| on_change.call(LeaveStatus::from_param(&event_target_value(&ev)))
            >
                <option value="" selected=move || value.get().is_none()>"All"</option>
                {LeaveStatus::FILTERABLE
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option value=status.as_param() selected=move || value.get() == Some(status)>
                                {status.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn AdminLeavePanel() -> impl IntoView {
    let vm = use_admin_leave_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let resource = vm.requests.state();
    let decide_action = vm.decide_action;

    view! {
        <PageTitle title="Leave requests" />
        <div class="flex flex-wrap justify-end gap-3 mb-3">
            <StatusFilter
                value=vm.status_filter.into()
                on_change=Callback::new(move |status| vm.set_status_filter(status))
            />
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search employee, type or reason"
            />
        </div>
        <InlineErrorMessage error=vm.requests.error() fallback="Could not load leave requests." />
        <Show
            when=move || !resource.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <LeaveTable
                rows=rows
                on_decide=Callback::new(move |decision| decide_action.dispatch(decision))
                busy=decide_action.pending()
            />
            <Pagination table=table page=page />
        </Show>
    }
}
