use crate::{
    api::{ApiClient, Role},
    components::toast::ToastHost,
    state::{role::use_role_resolver, session::use_session},
    utils::browser::{self, LOGIN_PATH},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const fn link(href: &'static str, label: &'static str) -> NavLink {
    NavLink { href, label }
}

const ADMIN_LINKS: &[NavLink] = &[
    link("/admin/dashboard", "Dashboard"),
    link("/admin/employees", "Employees"),
    link("/admin/leave-requests", "Leave requests"),
    link("/admin/attendance", "Attendance"),
    link("/admin/reports", "Reports"),
    link("/change-password", "Change password"),
];

const EMPLOYEE_LINKS: &[NavLink] = &[
    link("/employee/dashboard", "Dashboard"),
    link("/employee/leave-requests", "Leave requests"),
    link("/change-password", "Change password"),
];

/// Menu entries for `role`. Nothing is offered until the role is known.
pub fn nav_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Admin => ADMIN_LINKS,
        Role::Employee => EMPLOYEE_LINKS,
        Role::Unresolved => &[],
    }
}

/// Top bar of every signed-in page: role menu, signed-in email and logout.
#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let resolver = use_role_resolver();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let resolution = resolver.resolution();
    let role = resolver.role();
    let (menu_open, set_menu_open) = create_signal(false);

    // The server call is best effort; the local session is cleared either way.
    let logout_action = create_action(move |_: &()| {
        let api = api.clone();
        async move {
            if let Err(err) = api.logout().await {
                log::warn!("logout request failed: {}", err);
            }
        }
    });
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            session.logout();
            resolver.clear();
            browser::navigate(LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };

    let links = move || {
        nav_links(role.get())
            .iter()
            .map(|entry| {
                view! {
                    <a
                        href=entry.href
                        class="block lg:inline-block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {entry.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"HRMS"</h1>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-2">{links}</nav>
                        <span class="hidden sm:inline text-xs text-fg-muted">
                            {move || {
                                resolution
                                    .with(|r| r.email().map(|email| format!("{} ({})", email, r.role().label())))
                            }}
                        </span>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Log out"
                        </button>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">"Toggle menu"</span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="lg:hidden border-t border-border px-4 py-3 space-y-2">
                        {links}
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn PageTitle(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center justify-between gap-3 mb-6">
            <h2 class="text-2xl font-bold text-fg">{title}</h2>
            <div class="flex items-center gap-2">{children.map(|c| c())}</div>
        </div>
    }
}
