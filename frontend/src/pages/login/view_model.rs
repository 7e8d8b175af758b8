use super::repository::LoginRepository;
use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role},
    components::guard::landing_route,
    state::{
        role::{use_role_resolver, RoleResolution, RoleResolver},
        session::{use_session, SessionStore},
    },
    utils::browser,
};
use leptos::*;
use std::rc::Rc;

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Signs in, marks the session and re-resolves the role. Returns the role to land on.
pub async fn sign_in(
    repo: &LoginRepository,
    session: SessionStore,
    resolver: RoleResolver,
    request: LoginRequest,
) -> Result<Role, ApiError> {
    let user = repo.login(&request).await?;
    session.login();
    resolver.refresh().await;
    let role = match resolver.resolution().try_get_untracked() {
        Some(RoleResolution::Resolved(current)) => current.role,
        _ => user.role,
    };
    Ok(role)
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub submit_action: Action<(String, String), Result<Role, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let session = use_session();
    let resolver = use_role_resolver();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None);

    let submit_action = create_action(move |(email, password): &(String, String)| {
        let repo = repository.clone();
        let request = validate_credentials(email, password);
        async move { sign_in(&repo, session, resolver, request?).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(role) => {
                    error.set(None);
                    password.set(String::new());
                    browser::navigate(landing_route(role));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        submit_action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_before_any_request() {
        assert!(matches!(
            validate_credentials("  ", "secret"),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_credentials("a@example.com", ""),
            Err(ApiError::Validation(_))
        ));
        let request = validate_credentials(" a@example.com ", "secret").unwrap();
        assert_eq!(request.email, "a@example.com");
    }
}
