#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, CurrentUser, Role};
    use crate::state::{
        role::{RoleResolution, RoleResolver},
        session::SessionStore,
        toast::ToastStore,
    };
    use crate::utils::storage::MemoryStorage;
    use leptos::*;
    use std::rc::Rc;

    pub fn admin_user() -> CurrentUser {
        CurrentUser {
            role: Role::Admin,
            email: "admin@example.com".into(),
        }
    }

    pub fn employee_user() -> CurrentUser {
        CurrentUser {
            role: Role::Employee,
            email: "employee@example.com".into(),
        }
    }

    /// Session backed by memory, signed in or not, provided as context.
    pub fn provide_session(authenticated: bool) -> SessionStore {
        let session = SessionStore::new(Rc::new(MemoryStorage::default()));
        if authenticated {
            session.login();
        }
        provide_context(session);
        session
    }

    /// Resolver fixed at `resolution`; it never talks to the network unless refreshed.
    pub fn provide_resolution(resolution: RoleResolution) -> RoleResolver {
        let resolver = RoleResolver::new(ApiClient::new_with_base_url("http://unused.test/api"));
        resolver.overwrite_for_test(resolution);
        provide_context(resolver);
        resolver
    }

    pub fn provide_toasts() -> ToastStore {
        let toasts = ToastStore::new();
        provide_context(toasts);
        toasts
    }
}
