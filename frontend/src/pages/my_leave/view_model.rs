use super::repository::MyLeaveRepository;
use crate::{
    api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest},
    state::{
        resource::RemoteResource,
        table::TableState,
        toast::{use_toasts, ToastStore},
    },
    utils::time::parse_date_input,
};
use leptos::*;
use std::rc::Rc;

pub const LEAVE_TYPES: &[(&str, &str)] = &[
    ("ANNUAL", "Annual"),
    ("SICK", "Sick"),
    ("UNPAID", "Unpaid"),
    ("OTHER", "Other"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveFormInput {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

pub fn validate_leave_form(input: &LeaveFormInput) -> Result<CreateLeaveRequest, ApiError> {
    let leave_type = input.leave_type.trim();
    if leave_type.is_empty() {
        return Err(ApiError::validation("Choose a leave type"));
    }
    let start_date = parse_date_input(&input.start_date)
        .ok_or_else(|| ApiError::validation("Start date is required"))?;
    let end_date = parse_date_input(&input.end_date)
        .ok_or_else(|| ApiError::validation("End date is required"))?;
    if end_date < start_date {
        return Err(ApiError::validation("End date cannot be before start date"));
    }
    let reason = input.reason.trim();
    if reason.is_empty() {
        return Err(ApiError::validation("Reason is required"));
    }
    Ok(CreateLeaveRequest {
        leave_type: leave_type.to_string(),
        start_date,
        end_date,
        reason: reason.to_string(),
    })
}

pub type LeaveResource = RemoteResource<(), Vec<LeaveRequest>>;

pub fn leave_resource(repo: MyLeaveRepository) -> LeaveResource {
    RemoteResource::new(move |_: ()| {
        let repo = repo.clone();
        async move { repo.list().await }
    })
}

/// Validates, submits and reloads. Validation failures never reach the server.
pub async fn submit_leave(
    repo: MyLeaveRepository,
    requests: LeaveResource,
    toasts: ToastStore,
    input: LeaveFormInput,
) -> Result<(), ApiError> {
    let payload = match validate_leave_form(&input) {
        Ok(payload) => payload,
        Err(err) => {
            toasts.push_error(&err, "Check the form and try again");
            return Err(err);
        }
    };
    let result = requests.mutate(repo.create(payload)).await;
    match &result {
        Ok(()) => {
            toasts.push_success("Leave request submitted");
        }
        Err(err) => {
            toasts.push_error(err, "Could not submit the leave request");
        }
    }
    result
}

#[derive(Clone, Copy)]
pub struct MyLeaveViewModel {
    pub form: RwSignal<LeaveFormInput>,
    pub form_open: RwSignal<bool>,
    pub requests: LeaveResource,
    pub table: TableState,
    pub submit_action: Action<LeaveFormInput, Result<(), ApiError>>,
}

impl MyLeaveViewModel {
    pub fn rows(&self) -> Signal<Vec<LeaveRequest>> {
        let data = self.requests.data();
        Signal::derive(move || data.get().unwrap_or_default())
    }
}

pub fn use_my_leave_view_model() -> MyLeaveViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = MyLeaveRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let requests = leave_resource(repository.clone());
    requests.load(());

    let form = create_rw_signal(LeaveFormInput {
        leave_type: LEAVE_TYPES[0].0.to_string(),
        ..LeaveFormInput::default()
    });
    let form_open = create_rw_signal(false);

    let submit_action = create_action(move |input: &LeaveFormInput| {
        submit_leave(repository.clone(), requests, toasts, input.clone())
    });

    // The form closes only after a successful submit.
    create_effect(move |_| {
        if let Some(Ok(())) = submit_action.value().get() {
            form.update(|f| {
                f.start_date.clear();
                f.end_date.clear();
                f.reason.clear();
            });
            form_open.set(false);
        }
    });

    MyLeaveViewModel {
        form,
        form_open,
        requests,
        table: TableState::with_default_page_size(),
        submit_action,
    }
}
