use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::{
        guard::{landing_route, RoleGuard, SessionGuard},
        layout::{Layout, LoadingSpinner},
    },
    pages::{
        AdminAttendancePage, AdminDashboardPage, AdminEmployeesPage, AdminLeavePage,
        ChangePasswordPage, EmployeeDashboardPage, LoginPage, MyLeavePage, NotFoundPage,
        ReportsPage,
    },
    state::{
        role::{use_role_resolver, RoleResolution, RoleResolver},
        session::{use_session, SessionStore},
        toast::ToastStore,
    },
    utils::browser::{self, LOGIN_PATH},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/employee/dashboard",
    "/employee/leave-requests",
    "/admin/dashboard",
    "/admin/employees",
    "/admin/leave-requests",
    "/admin/attendance",
    "/admin/reports",
    "/change-password",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/employee/dashboard",
    "/employee/leave-requests",
    "/admin/dashboard",
    "/admin/employees",
    "/admin/leave-requests",
    "/admin/attendance",
    "/admin/reports",
    "/change-password",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[Role::Admin, Role::Employee];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Shared stores for the whole app. The role is only fetched for a session that
/// survived a reload; a fresh login fetches it itself.
fn provide_app_state() {
    let session = SessionStore::browser();
    provide_context(session);
    let api = ApiClient::new().with_session(session);
    provide_context(api.clone());
    let resolver = RoleResolver::new(api);
    provide_context(resolver);
    if session.is_authenticated() {
        resolver.load();
    }
    provide_context(ToastStore::new());
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_app_state();
    view! {
        <Title text="HRMS" />
        <Router>
            <Routes>
                <Route path="/" view=RootRedirect/>
                <Route path="/login" view=LoginPage/>
                <Route path="/employee/dashboard" view=ProtectedEmployeeDashboard/>
                <Route path="/employee/leave-requests" view=ProtectedMyLeave/>
                <Route path="/admin/dashboard" view=ProtectedAdminDashboard/>
                <Route path="/admin/employees" view=ProtectedAdminEmployees/>
                <Route path="/admin/leave-requests" view=ProtectedAdminLeave/>
                <Route path="/admin/attendance" view=ProtectedAdminAttendance/>
                <Route path="/admin/reports" view=ProtectedReports/>
                <Route path="/change-password" view=ProtectedChangePassword/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Where `/` sends the visitor, or `None` while the role is still loading.
pub fn root_target(authenticated: bool, resolution: &RoleResolution) -> Option<&'static str> {
    if !authenticated {
        return Some(LOGIN_PATH);
    }
    match resolution {
        RoleResolution::Pending => None,
        RoleResolution::Resolved(_) | RoleResolution::Failed(_) | RoleResolution::SignedOut => {
            Some(landing_route(resolution.role()))
        }
    }
}

#[component]
fn RootRedirect() -> impl IntoView {
    let authenticated = use_session().authenticated();
    let resolution = use_role_resolver().resolution();
    let target = create_memo(move |_| resolution.with(|r| root_target(authenticated.get(), r)));
    create_effect(move |_| {
        if let Some(path) = target.get() {
            browser::navigate(path);
        }
    });
    view! { <LoadingSpinner /> }
}

#[component]
fn Protected(allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let children = store_value(children);
    view! {
        <SessionGuard>
            <Layout>
                <RoleGuard allowed_roles=allowed_roles.to_vec()>
                    {move || children.with_value(|c| c())}
                </RoleGuard>
            </Layout>
        </SessionGuard>
    }
}

#[component]
fn ProtectedEmployeeDashboard() -> impl IntoView {
    view! { <Protected allowed_roles=EMPLOYEE_ONLY><EmployeeDashboardPage/></Protected> }
}

#[component]
fn ProtectedMyLeave() -> impl IntoView {
    view! { <Protected allowed_roles=EMPLOYEE_ONLY><MyLeavePage/></Protected> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <Protected allowed_roles=ADMIN_ONLY><AdminDashboardPage/></Protected> }
}

#[component]
fn ProtectedAdminEmployees() -> impl IntoView {
    view! { <Protected allowed_roles=ADMIN_ONLY><AdminEmployeesPage/></Protected> }
}

#[component]
fn ProtectedAdminLeave() -> impl IntoView {
    view! { <Protected allowed_roles=ADMIN_ONLY><AdminLeavePage/></Protected> }
}

#[component]
fn ProtectedAdminAttendance() -> impl IntoView {
    view! { <Protected allowed_roles=ADMIN_ONLY><AdminAttendancePage/></Protected> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <Protected allowed_roles=ADMIN_ONLY><ReportsPage/></Protected> }
}

#[component]
fn ProtectedChangePassword() -> impl IntoView {
    view! { <Protected allowed_roles=ANY_ROLE><ChangePasswordPage/></Protected> }
}
