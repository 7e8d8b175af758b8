use super::view_model::{use_my_leave_view_model, LeaveFormInput, LEAVE_TYPES};
use crate::components::{
    common::{Button, ButtonVariant, SearchInput},
    error::InlineErrorMessage,
    layout::{LoadingSpinner, PageTitle},
    leave_table::LeaveTable,
    pagination::Pagination,
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text";

#[component]
fn LeaveForm(
    form: RwSignal<LeaveFormInput>,
    on_submit: Callback<LeaveFormInput>,
    on_cancel: Callback<()>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    view! {
        <form
            class="grid gap-4 sm:grid-cols-2 mb-6 p-4 rounded-lg border border-border bg-surface-elevated"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(form.get_untracked());
            }
        >
            <label class="block text-sm text-fg">
                "Type"
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| form.update(|f| f.leave_type = event_target_value(&ev))
                >
                    {LEAVE_TYPES
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option value=value selected=move || form.with(|f| f.leave_type == value)>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="block text-sm text-fg sm:col-span-2">
                "Reason"
                <textarea
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.reason.clone())
                    on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="block text-sm text-fg">
                "From"
                <input
                    type="date"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.start_date.clone())
                    on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                />
            </label>
            <label class="block text-sm text-fg">
                "To"
                <input
                    type="date"
                    class=INPUT_CLASS
                    prop:value=move || form.with(|f| f.end_date.clone())
                    on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                />
            </label>
            <div class="flex justify-end gap-2 sm:col-span-2">
                <Button variant=ButtonVariant::Secondary on:click=move |_| on_cancel.call(()) attr:type="button">
                    "Cancel"
                </Button>
                <Button loading=pending attr:type="submit">"Submit"</Button>
            </div>
        </form>
    }
}

#[component]
pub fn MyLeavePanel() -> impl IntoView {
    let vm = use_my_leave_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let resource = vm.requests.state();
    let form_open = vm.form_open;
    let submit_action = vm.submit_action;

    view! {
        <PageTitle title="My leave requests">
            <Button on:click=move |_| form_open.set(true) disabled=Signal::derive(move || form_open.get())>
                "New request"
            </Button>
        </PageTitle>
        <Show when=move || form_open.get()>
            <LeaveForm
                form=vm.form
                on_submit=Callback::new(move |input| submit_action.dispatch(input))
                on_cancel=Callback::new(move |_| form_open.set(false))
                pending=submit_action.pending()
            />
        </Show>
        <div class="flex justify-end mb-3">
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search type, status or reason"
            />
        </div>
        <InlineErrorMessage error=vm.requests.error() fallback="Could not load your leave requests." />
        <Show
            when=move || !resource.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <LeaveTable rows=rows />
            <Pagination table=table page=page />
        </Show>
    }
}
