use super::view_model::{use_admin_employees_view_model, AdminEmployeesViewModel, EmployeeFormInput};
use crate::{
    api::{Employee, Role},
    components::{
        common::{Button, ButtonVariant, SearchInput},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyRow,
        error::InlineErrorMessage,
        layout::{LoadingSpinner, PageTitle},
        pagination::Pagination,
    },
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text";

#[component]
fn TextField(
    #[prop(into)] label: String,
    form: RwSignal<EmployeeFormInput>,
    get: fn(&EmployeeFormInput) -> &String,
    set: fn(&mut EmployeeFormInput, String),
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <label class="block text-sm text-fg">
            {label}
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                disabled=move || disabled.get()
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn EmployeeForm(vm: AdminEmployeesViewModel) -> impl IntoView {
    let form = vm.form;
    let editing = vm.editing;
    let is_edit = Signal::derive(move || editing.with(Option::is_some));
    let pending = vm.save_action.pending();

    view! {
        <form
            class="grid gap-4 sm:grid-cols-2 mb-6 p-4 rounded-lg border border-border bg-surface-elevated"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.save_action.dispatch((editing.get_untracked(), form.get_untracked()));
            }
        >
            <h3 class="sm:col-span-2 text-lg font-semibold text-fg">
                {move || if is_edit.get() { "Edit employee" } else { "New employee" }}
            </h3>
            <TextField label="First name" form=form get=|f| &f.first_name set=|f, v| f.first_name = v />
            <TextField label="Last name" form=form get=|f| &f.last_name set=|f, v| f.last_name = v />
            <TextField label="Email" form=form input_type="email" disabled=is_edit get=|f| &f.email set=|f, v| f.email = v />
            <Show when=move || !is_edit.get()>
                <TextField label="Initial password" form=form input_type="password" get=|f| &f.password set=|f, v| f.password = v />
            </Show>
            <TextField label="Department" form=form get=|f| &f.department set=|f, v| f.department = v />
            <TextField label="Position" form=form get=|f| &f.position set=|f, v| f.position = v />
            <label class="block text-sm text-fg">
                "Role"
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| form.update(|f| f.role = Role::parse(&event_target_value(&ev)))
                >
                    {[Role::Employee, Role::Admin]
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_str() selected=move || form.with(|f| f.role == role)>
                                    {role.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <div class="flex justify-end gap-2 sm:col-span-2">
                <Button variant=ButtonVariant::Secondary attr:type="button" on:click=move |_| vm.close_form()>
                    "Cancel"
                </Button>
                <Button loading=pending attr:type="submit">"Save"</Button>
            </div>
        </form>
    }
}

#[component]
fn EmployeeRows(vm: AdminEmployeesViewModel, rows: Signal<Vec<Employee>>) -> impl IntoView {
    move || {
        let rows = rows.get();
        if rows.is_empty() {
            return view! { <EmptyRow colspan=5 /> }.into_view();
        }
        rows.into_iter()
            .map(|employee| {
                let for_edit = employee.clone();
                let for_delete = employee.clone();
                view! {
                    <tr>
                        <td class="px-4 py-2">{employee.full_name()}</td>
                        <td class="px-4 py-2">{employee.email.clone()}</td>
                        <td class="px-4 py-2">{employee.department.clone().unwrap_or_default()}</td>
                        <td class="px-4 py-2">{employee.role.label()}</td>
                        <td class="px-4 py-2 space-x-3 text-right">
                            <button type="button" class="text-link hover:text-link-hover" on:click=move |_| vm.open_edit(&for_edit)>
                                "Edit"
                            </button>
                            <button
                                type="button"
                                class="text-status-error-text hover:underline"
                                on:click=move |_| vm.pending_delete.set(Some(for_delete.clone()))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    }
}

#[component]
pub fn AdminEmployeesPanel() -> impl IntoView {
    let vm = use_admin_employees_view_model();
    let table = vm.table;
    let page = table.visible(vm.rows());
    let rows = Signal::derive(move || page.get().items);
    let resource = vm.employees.state();
    let pending_delete = vm.pending_delete;

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|e| format!("Delete {}? This cannot be undone.", e.full_name()))
            .unwrap_or_default()
    });
    let confirm_delete = Callback::new(move |_| {
        if let Some(employee) = pending_delete.get_untracked() {
            vm.delete_action.dispatch(employee.id);
        }
    });

    view! {
        <PageTitle title="Employees">
            <Button on:click=move |_| vm.open_create()>"New employee"</Button>
        </PageTitle>
        <Show when=move || vm.form_open.get()>
            <EmployeeForm vm=vm />
        </Show>
        <div class="flex justify-end mb-3">
            <SearchInput
                value=table.query()
                on_input=Callback::new(move |q| table.set_query(q))
                placeholder="Search name, email or department"
            />
        </div>
        <InlineErrorMessage error=vm.employees.error() fallback="Could not load employees." />
        <Show
            when=move || !resource.with(|s| s.is_initial_load())
            fallback=|| view! { <LoadingSpinner /> }
        >
            <div class="overflow-x-auto rounded-lg border border-border">
                <table class="min-w-full divide-y divide-border text-sm">
                    <thead class="bg-surface-muted text-left text-fg-muted">
                        <tr>
                            <th class="px-4 py-2">"Name"</th>
                            <th class="px-4 py-2">"Email"</th>
                            <th class="px-4 py-2">"Department"</th>
                            <th class="px-4 py-2">"Role"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <EmployeeRows vm=vm rows=rows />
                    </tbody>
                </table>
            </div>
            <Pagination table=table page=page />
        </Show>
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete employee"
            message=delete_message
            on_confirm=confirm_delete
            on_cancel=Callback::new(move |_| pending_delete.set(None))
            confirm_label="Delete"
            confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
            destructive=true
        />
    }
}
