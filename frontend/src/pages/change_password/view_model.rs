use super::repository::PasswordRepository;
use crate::{
    api::{ApiClient, ApiError, ChangePasswordRequest, MIN_PASSWORD_LEN},
    state::toast::{use_toasts, ToastStore},
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordFormInput {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub fn validate_password_change(input: &PasswordFormInput) -> Result<ChangePasswordRequest, ApiError> {
    if input.current_password.is_empty() {
        return Err(ApiError::validation("Current password is required"));
    }
    if input.new_password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if input.new_password != input.confirm_password {
        return Err(ApiError::validation("New passwords do not match"));
    }
    if input.new_password == input.current_password {
        return Err(ApiError::validation(
            "New password must differ from the current one",
        ));
    }
    Ok(ChangePasswordRequest {
        current_password: input.current_password.clone(),
        new_password: input.new_password.clone(),
    })
}

pub async fn change_password(
    repo: PasswordRepository,
    toasts: ToastStore,
    input: PasswordFormInput,
) -> Result<(), ApiError> {
    let result = async {
        let request = validate_password_change(&input)?;
        repo.change(request).await
    }
    .await;
    match &result {
        Ok(()) => {
            toasts.push_success("Password changed");
        }
        Err(err) => {
            toasts.push_error(err, "Could not change the password");
        }
    }
    result
}

#[derive(Clone, Copy)]
pub struct ChangePasswordViewModel {
    pub form: RwSignal<PasswordFormInput>,
    pub submit_action: Action<PasswordFormInput, Result<(), ApiError>>,
}

pub fn use_change_password_view_model() -> ChangePasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PasswordRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();
    let form = create_rw_signal(PasswordFormInput::default());

    let submit_action = create_action(move |input: &PasswordFormInput| {
        change_password(repository.clone(), toasts, input.clone())
    });

    // Fields are only cleared once the server accepted the change.
    create_effect(move |_| {
        if let Some(Ok(())) = submit_action.value().get() {
            form.set(PasswordFormInput::default());
        }
    });

    ChangePasswordViewModel {
        form,
        submit_action,
    }
}
