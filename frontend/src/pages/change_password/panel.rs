use super::view_model::{use_change_password_view_model, PasswordFormInput};
use crate::{
    api::MIN_PASSWORD_LEN,
    components::{common::Button, layout::PageTitle},
};
use leptos::*;

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text";

#[component]
fn PasswordField(
    label: &'static str,
    autocomplete: &'static str,
    form: RwSignal<PasswordFormInput>,
    get: fn(&PasswordFormInput) -> String,
    set: fn(&mut PasswordFormInput, String),
) -> impl IntoView {
    view! {
        <label class="block text-sm text-fg">
            {label}
            <input
                type="password"
                class=INPUT_CLASS
                autocomplete=autocomplete
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn ChangePasswordPanel() -> impl IntoView {
    let vm = use_change_password_view_model();
    let form = vm.form;
    let submit_action = vm.submit_action;

    view! {
        <PageTitle title="Change password" />
        <form
            class="max-w-md space-y-4 p-4 rounded-lg border border-border bg-surface-elevated"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_action.dispatch(form.get_untracked());
            }
        >
            <PasswordField
                label="Current password"
                autocomplete="current-password"
                form=form
                get=|f| f.current_password.clone()
                set=|f, v| f.current_password = v
            />
            <PasswordField
                label="New password"
                autocomplete="new-password"
                form=form
                get=|f| f.new_password.clone()
                set=|f, v| f.new_password = v
            />
            <PasswordField
                label="Confirm new password"
                autocomplete="new-password"
                form=form
                get=|f| f.confirm_password.clone()
                set=|f, v| f.confirm_password = v
            />
            <p class="text-xs text-fg-muted">
                {format!("At least {} characters.", MIN_PASSWORD_LEN)}
            </p>
            <div class="flex justify-end">
                <Button loading=submit_action.pending() attr:type="submit">"Update password"</Button>
            </div>
        </form>
    }
}
