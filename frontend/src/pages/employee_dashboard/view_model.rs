use super::repository::{AttendanceRepository, ClockAction};
use crate::{
    api::{ApiClient, ApiError, AttendanceRecord},
    state::{
        resource::RemoteResource,
        table::TableState,
        toast::{use_toasts, ToastStore},
    },
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    NotCheckedIn,
    CheckedIn,
    Done,
}

/// Where the user stands today, from their own records.
pub fn clock_state(records: &[AttendanceRecord], today: NaiveDate) -> ClockState {
    match records.iter().find(|record| record.date == today) {
        Some(record) if record.check_out.is_some() => ClockState::Done,
        Some(record) if record.check_in.is_some() => ClockState::CheckedIn,
        _ => ClockState::NotCheckedIn,
    }
}

pub type RecordsResource = RemoteResource<(), Vec<AttendanceRecord>>;

pub fn records_resource(repo: AttendanceRepository) -> RecordsResource {
    RemoteResource::new(move |_: ()| {
        let repo = repo.clone();
        async move { repo.my_records().await }
    })
}

/// Runs the clock action, reloads the records and reports the outcome as a toast.
pub async fn run_clock_action(
    repo: AttendanceRepository,
    records: RecordsResource,
    toasts: ToastStore,
    action: ClockAction,
) -> Result<(), ApiError> {
    let result = records.mutate(repo.clock(action)).await;
    match &result {
        Ok(()) => {
            toasts.push_success(action.success_message());
        }
        Err(err) => {
            toasts.push_error(err, action.failure_message());
        }
    }
    result
}

#[derive(Clone, Copy)]
pub struct EmployeeDashboardViewModel {
    pub records: RecordsResource,
    pub table: TableState,
    pub clock_action: Action<ClockAction, Result<(), ApiError>>,
}

impl EmployeeDashboardViewModel {
    pub fn clock_state(&self) -> Signal<ClockState> {
        let data = self.records.data();
        let today = crate::utils::time::today();
        Signal::derive(move || data.with(|d| clock_state(d.as_deref().unwrap_or_default(), today)))
    }

    pub fn rows(&self) -> Signal<Vec<AttendanceRecord>> {
        let data = self.records.data();
        Signal::derive(move || data.get().unwrap_or_default())
    }
}

pub fn use_employee_dashboard_view_model() -> EmployeeDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let records = records_resource(repository.clone());
    records.load(());

    let clock_action = create_action(move |action: &ClockAction| {
        run_clock_action(repository.clone(), records, toasts, *action)
    });

    EmployeeDashboardViewModel {
        records,
        table: TableState::with_default_page_size(),
        clock_action,
    }
}
