use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::{
        role::{use_role_resolver, RoleResolution},
        session::use_session,
    },
    utils::browser::{self, LOGIN_PATH},
};
use leptos::*;

pub const ADMIN_LANDING: &str = "/admin/dashboard";
pub const EMPLOYEE_LANDING: &str = "/employee/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Pending,
    Redirect(&'static str),
    /// The redirect would land on the page being guarded.
    Denied,
}

pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_LANDING,
        Role::Employee | Role::Unresolved => EMPLOYEE_LANDING,
    }
}

fn redirect_unless_here(target: &'static str, current_path: Option<&str>) -> GuardDecision {
    if current_path == Some(target) {
        GuardDecision::Denied
    } else {
        GuardDecision::Redirect(target)
    }
}

pub fn session_decision(authenticated: bool, current_path: Option<&str>) -> GuardDecision {
    if authenticated {
        GuardDecision::Render
    } else {
        redirect_unless_here(LOGIN_PATH, current_path)
    }
}

/// Never denies while the role is still being fetched. An empty allow-list denies everyone,
/// and `Unresolved` is never authorized even if listed.
pub fn role_decision(
    resolution: &RoleResolution,
    allowed_roles: &[Role],
    current_path: Option<&str>,
) -> GuardDecision {
    let role = match resolution {
        RoleResolution::Pending => return GuardDecision::Pending,
        RoleResolution::Resolved(user) => user.role,
        RoleResolution::Failed(_) | RoleResolution::SignedOut => Role::Unresolved,
    };
    if role != Role::Unresolved && allowed_roles.contains(&role) {
        GuardDecision::Render
    } else {
        redirect_unless_here(landing_route(role), current_path)
    }
}

fn follow(decision: GuardDecision) {
    if let GuardDecision::Redirect(target) = decision {
        log::info!("guard redirecting to {}", target);
        browser::navigate(target);
    }
}

#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let authenticated = session.authenticated();
    let current_path = browser::current_path();
    let decision = create_memo(move |_| session_decision(authenticated.get(), current_path.as_deref()));
    create_effect(move |_| follow(decision.get()));
    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RoleGuard(#[prop(into)] allowed_roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let resolver = use_role_resolver();
    let resolution = resolver.resolution();
    let current_path = browser::current_path();
    let decision = create_memo(move |_| {
        resolution.with(|r| role_decision(r, &allowed_roles, current_path.as_deref()))
    });
    create_effect(move |_| follow(decision.get()));

    move || match decision.get() {
        GuardDecision::Render => children().into_view(),
        GuardDecision::Pending => view! { <LoadingSpinner /> }.into_view(),
        GuardDecision::Denied => view! {
            <AccessDenied on_retry=Callback::new(move |_| resolver.load()) />
        }
        .into_view(),
        GuardDecision::Redirect(_) => ().into_view(),
    }
}

#[component]
fn AccessDenied(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 text-center space-y-4">
            <h2 class="text-lg font-semibold text-fg">"You do not have access to this page"</h2>
            <p class="text-sm text-fg-muted">
                "Your role could not be confirmed. Try again, or sign out and back in."
            </p>
            <button
                type="button"
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=move |_| on_retry.call(())
            >
                "Retry"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, CurrentUser};

    fn resolved(role: Role) -> RoleResolution {
        RoleResolution::Resolved(CurrentUser {
            role,
            email: "someone@example.com".into(),
        })
    }

    #[test]
    fn session_guard_redirects_signed_out_users_to_login() {
        assert_eq!(session_decision(true, None), GuardDecision::Render);
        assert_eq!(
            session_decision(false, Some("/employee/dashboard")),
            GuardDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn pending_role_neither_renders_nor_denies() {
        for allowed in [vec![], vec![Role::Admin], vec![Role::Admin, Role::Employee]] {
            assert_eq!(
                role_decision(&RoleResolution::Pending, &allowed, None),
                GuardDecision::Pending
            );
        }
    }

    #[test]
    fn empty_allow_list_always_denies() {
        for role in [Role::Admin, Role::Employee, Role::Unresolved] {
            assert_ne!(
                role_decision(&resolved(role), &[], None),
                GuardDecision::Render
            );
        }
    }

    #[test]
    fn roles_outside_allow_list_go_to_their_landing_route() {
        assert_eq!(
            role_decision(&resolved(Role::Employee), &[Role::Admin], None),
            GuardDecision::Redirect(EMPLOYEE_LANDING)
        );
        assert_eq!(
            role_decision(&resolved(Role::Admin), &[Role::Employee], None),
            GuardDecision::Redirect(ADMIN_LANDING)
        );
        assert_eq!(
            role_decision(&resolved(Role::Admin), &[Role::Admin, Role::Employee], None),
            GuardDecision::Render
        );
    }

    #[test]
    fn unresolved_role_is_never_authorized() {
        let allowed = [Role::Admin, Role::Employee, Role::Unresolved];
        assert_eq!(
            role_decision(&resolved(Role::Unresolved), &allowed, None),
            GuardDecision::Redirect(EMPLOYEE_LANDING)
        );
    }

    #[test]
    fn failed_lookup_ends_unauthorized() {
        let failed = RoleResolution::Failed(ApiError::network("offline"));
        assert_eq!(
            role_decision(&failed, &[Role::Admin], None),
            GuardDecision::Redirect(EMPLOYEE_LANDING)
        );
    }

    #[test]
    fn signed_out_resolution_redirects_instead_of_waiting() {
        assert_eq!(
            role_decision(&RoleResolution::SignedOut, &[Role::Admin], None),
            GuardDecision::Redirect(EMPLOYEE_LANDING)
        );
    }

    #[test]
    fn redirect_to_the_current_page_becomes_denied() {
        let failed = RoleResolution::Failed(ApiError::network("offline"));
        assert_eq!(
            role_decision(&failed, &[Role::Employee], Some(EMPLOYEE_LANDING)),
            GuardDecision::Denied
        );
        assert_eq!(
            session_decision(false, Some(LOGIN_PATH)),
            GuardDecision::Denied
        );
    }

    #[test]
    fn landing_routes_by_role() {
        assert_eq!(landing_route(Role::Admin), ADMIN_LANDING);
        assert_eq!(landing_route(Role::Employee), EMPLOYEE_LANDING);
        assert_eq!(landing_route(Role::Unresolved), EMPLOYEE_LANDING);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::helpers::{
        admin_user, employee_user, provide_resolution, provide_session,
    };
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn session_guard_renders_children_when_signed_in() {
        let html = render_to_string(move || {
            provide_session(true);
            view! {
                <SessionGuard>
                    {|| view! { <div>"protected-content"</div> }}
                </SessionGuard>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn session_guard_hides_children_after_logout() {
        let html = render_to_string(move || {
            let session = provide_session(true);
            session.logout();
            view! {
                <SessionGuard>
                    {|| view! { <div>"protected-content"</div> }}
                </SessionGuard>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn role_guard_shows_spinner_while_pending() {
        let html = render_to_string(move || {
            provide_resolution(RoleResolution::Pending);
            view! {
                <RoleGuard allowed_roles=vec![Role::Admin]>
                    {|| view! { <div>"admin-only"</div> }}
                </RoleGuard>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("admin-only"));
    }

    #[test]
    fn role_guard_renders_children_for_allowed_role() {
        let html = render_to_string(move || {
            provide_resolution(RoleResolution::Resolved(admin_user()));
            view! {
                <RoleGuard allowed_roles=vec![Role::Admin]>
                    {|| view! { <div>"admin-only"</div> }}
                </RoleGuard>
            }
        });
        assert!(html.contains("admin-only"));
    }

    #[test]
    fn role_guard_hides_children_for_other_roles() {
        let html = render_to_string(move || {
            provide_resolution(RoleResolution::Resolved(employee_user()));
            view! {
                <RoleGuard allowed_roles=vec![Role::Admin]>
                    {|| view! { <div>"admin-only"</div> }}
                </RoleGuard>
            }
        });
        assert!(!html.contains("admin-only"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn role_guard_with_failed_lookup_does_not_hang() {
        let html = render_to_string(move || {
            provide_resolution(RoleResolution::Failed(ApiError::network("offline")));
            view! {
                <RoleGuard allowed_roles=vec![Role::Employee]>
                    {|| view! { <div>"employee-only"</div> }}
                </RoleGuard>
            }
        });
        assert!(!html.contains("employee-only"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn access_denied_offers_retry() {
        let html = render_to_string(move || view! { <AccessDenied on_retry=Callback::new(|_| {}) /> });
        assert!(html.contains("Retry"));
    }
}
