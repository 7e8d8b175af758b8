use crate::{
    components::guard::landing_route,
    state::{role::use_role_resolver, session::use_session},
    utils::browser::LOGIN_PATH,
};
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let authenticated = use_session().authenticated();
    let role = use_role_resolver().role();
    let home = move || {
        if authenticated.get() {
            landing_route(role.get())
        } else {
            LOGIN_PATH
        }
    };

    view! {
        <div class="max-w-md mx-auto mt-24 text-center space-y-4">
            <p class="text-5xl font-bold text-fg-muted">"404"</p>
            <h2 class="text-lg font-semibold text-fg">"Page not found"</h2>
            <a href=home class="inline-block text-sm text-link hover:text-link-hover">
                "Go back home"
            </a>
        </div>
    }
}
