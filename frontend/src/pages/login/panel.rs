use super::view_model::use_login_view_model;
use crate::components::{common::Button, error::InlineErrorMessage};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let email = vm.email;
    let password = vm.password;
    let submit_action = vm.submit_action;
    let pending = submit_action.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        submit_action.dispatch((email.get_untracked(), password.get_untracked()));
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in"</h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <div>
                        <label for="email" class="block text-sm font-medium text-fg">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="username"
                            class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            class="mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-form-control-text"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <InlineErrorMessage error=vm.error.into() fallback="Sign in failed. Please try again." />
                    <Button class="w-full" loading=pending attr:type="submit">
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
