use super::view_model::{use_reports_view_model, RangeInput, ReportTotals};
use crate::{
    api::AttendanceReportRow,
    components::{
        common::{Button, ButtonVariant, SearchInput},
        empty_state::{EmptyRow, NO_RECORDS},
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageTitle},
        pagination::Pagination,
    },
    utils::time::format_hours,
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text";

#[component]
fn RangeForm(
    range: RwSignal<RangeInput>,
    on_run: Callback<RangeInput>,
    on_export: Callback<RangeInput>,
    #[prop(into)] running: Signal<bool>,
    #[prop(into)] exporting: Signal<bool>,
) -> impl IntoView {
    view! {
        <form
            class="flex flex-wrap items-end gap-4 mb-6"
            on:submit=move |ev| {
                ev.prevent_default();
                on_run.call(range.get_untracked());
            }
        >
            <label class="block text-sm text-fg">
                "From"
                <input
                    type="date"
                    class=INPUT_CLASS
                    prop:value=move || range.with(|r| r.from.clone())
                    on:input=move |ev| range.update(|r| r.from = event_target_value(&ev))
                />
            </label>
            <label class="block text-sm text-fg">
                "To"
                <input
                    type="date"
                    class=INPUT_CLASS
                    prop:value=move || range.with(|r| r.to.clone())
                    on:input=move |ev| range.update(|r| r.to = event_target_value(&ev))
                />
            </label>
            <Button loading=running attr:type="submit">"Run report"</Button>
            <Button
                variant=ButtonVariant::Secondary
                loading=exporting
                attr:type="button"
                on:click=move |_| on_export.call(range.get_untracked())
            >
                "Export CSV"
            </Button>
        </form>
    }
}

#[component]
fn ReportTable(rows: Signal<Vec<AttendanceReportRow>>, totals: Signal<ReportTotals>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted text-left text-fg-muted">
                    <tr>
                        <th class="px-4 py-2">"Employee"</th>
                        <th class="px-4 py-2 text-right">"Days present"</th>
                        <th class="px-4 py-2 text-right">"Days on leave"</th>
                        <th class="px-4 py-2 text-right">"Hours"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border bg-surface-elevated text-fg">
                    <Show
                        when=move || rows.with(|r| !r.is_empty())
                        fallback=|| view! { <EmptyRow colspan=4 message=NO_RECORDS /> }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| row.employee_id.clone()
                            children=|row| {
                                view! {
                                    <tr>
                                        <td class="px-4 py-2">{row.employee_name}</td>
                                        <td class="px-4 py-2 text-right">{row.days_present}</td>
                                        <td class="px-4 py-2 text-right">{row.days_on_leave}</td>
                                        <td class="px-4 py-2 text-right">{format_hours(Some(row.total_hours))}</td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
                <tfoot class="bg-surface-muted font-semibold text-fg">
                    <tr>
                        <td class="px-4 py-2">"Total"</td>
                        <td class="px-4 py-2 text-right">{move || totals.get().days_present}</td>
                        <td class="px-4 py-2 text-right">{move || totals.get().days_on_leave}</td>
                        <td class="px-4 py-2 text-right">{move || format_hours(Some(totals.get().total_hours))}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let vm = use_reports_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let state = vm.report.state();
    let run_action = vm.run_action;
    let export_action = vm.export_action;

    view! {
        <PageTitle title="Attendance report" />
        <RangeForm
            range=vm.range
            on_run=Callback::new(move |input| run_action.dispatch(input))
            on_export=Callback::new(move |input| export_action.dispatch(input))
            running=vm.report.loading()
            exporting=export_action.pending()
        />
        <div class="flex justify-end mb-3">
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search employee"
            />
        </div>
        <InlineErrorMessage error=vm.report.error() fallback="Could not load the report." />
        <Show
            when=move || !state.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <ReportTable rows=rows totals=vm.totals() />
            <Pagination table=table page=page />
        </Show>
    }
}
