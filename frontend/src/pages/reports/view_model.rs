use super::repository::ReportsRepository;
use crate::{
    api::{ApiClient, ApiError, AttendanceReportRow, ReportRange},
    state::{
        resource::RemoteResource,
        table::TableState,
        toast::{use_toasts, ToastStore},
    },
    utils::{
        download::{report_filename, trigger_blob_download, CSV_MIME},
        time::{format_date, parse_date_input, today},
    },
};
use chrono::{Datelike, NaiveDate};
use leptos::*;
use std::rc::Rc;

/// Raw values of the two `<input type="date">` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInput {
    pub from: String,
    pub to: String,
}

impl RangeInput {
    /// First day of `today`'s month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self {
            from: format_date(first),
            to: format_date(today),
        }
    }
}

pub fn validate_range(input: &RangeInput) -> Result<ReportRange, ApiError> {
    let from = parse_date_input(&input.from)
        .ok_or_else(|| ApiError::validation("Start date is required"))?;
    let to =
        parse_date_input(&input.to).ok_or_else(|| ApiError::validation("End date is required"))?;
    if from > to {
        return Err(ApiError::validation("Start date must not be after end date"));
    }
    Ok(ReportRange { from, to })
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    pub days_present: u32,
    pub days_on_leave: u32,
    pub total_hours: f64,
}

pub fn report_totals(rows: &[AttendanceReportRow]) -> ReportTotals {
    rows.iter().fold(ReportTotals::default(), |acc, row| ReportTotals {
        days_present: acc.days_present + row.days_present,
        days_on_leave: acc.days_on_leave + row.days_on_leave,
        total_hours: acc.total_hours + row.total_hours,
    })
}

pub type ReportResource = RemoteResource<ReportRange, Vec<AttendanceReportRow>>;

pub fn report_resource(repo: ReportsRepository) -> ReportResource {
    RemoteResource::new(move |range: ReportRange| {
        let repo = repo.clone();
        async move { repo.summary(range).await }
    })
}

/// Validates the range and loads the summary. An invalid range sends nothing.
pub async fn run_report(
    report: ReportResource,
    toasts: ToastStore,
    input: RangeInput,
) -> Result<ReportRange, ApiError> {
    match validate_range(&input) {
        Ok(range) => {
            report.fetch(range).await;
            Ok(range)
        }
        Err(err) => {
            toasts.push_error(&err, "Check the date range");
            Err(err)
        }
    }
}

/// Downloads the CSV for the range and hands it to `save` with its file name.
pub async fn export_report<S>(
    repo: ReportsRepository,
    toasts: ToastStore,
    input: RangeInput,
    save: S,
) -> Result<(), ApiError>
where
    S: FnOnce(&str, &[u8]) -> Result<(), String>,
{
    let result = async {
        let range = validate_range(&input)?;
        let bytes = repo.export_csv(range).await?;
        save(&report_filename(range.from, range.to), &bytes).map_err(ApiError::network)
    }
    .await;
    match &result {
        Ok(()) => {
            toasts.push_success("Report downloaded");
        }
        Err(err) => {
            log::warn!("report export failed: {}", err);
            toasts.push_error(err, "Could not export the report");
        }
    }
    result
}

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub range: RwSignal<RangeInput>,
    pub report: ReportResource,
    pub table: TableState,
    pub run_action: Action<RangeInput, Result<ReportRange, ApiError>>,
    pub export_action: Action<RangeInput, Result<(), ApiError>>,
}

impl ReportsViewModel {
    pub fn rows(&self) -> Signal<Vec<AttendanceReportRow>> {
        let data = self.report.data();
        Signal::derive(move || data.get().unwrap_or_default())
    }

    pub fn totals(&self) -> Signal<ReportTotals> {
        let data = self.report.data();
        Signal::derive(move || data.with(|rows| report_totals(rows.as_deref().unwrap_or_default())))
    }
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReportsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let range = create_rw_signal(RangeInput::month_to_date(today()));
    let report = report_resource(repository.clone());
    if let Ok(initial) = validate_range(&range.get_untracked()) {
        report.load(initial);
    }

    let run_action =
        create_action(move |input: &RangeInput| run_report(report, toasts, input.clone()));
    let export_action = create_action(move |input: &RangeInput| {
        export_report(repository.clone(), toasts, input.clone(), save_csv)
    });

    ReportsViewModel {
        range,
        report,
        table: TableState::with_default_page_size(),
        run_action,
        export_action,
    }
}

fn save_csv(filename: &str, bytes: &[u8]) -> Result<(), String> {
    trigger_blob_download(filename, bytes, CSV_MIME)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime_async;
    use serde_json::json;
    use std::cell::RefCell;

    fn repository(server: &MockServer) -> ReportsRepository {
        ReportsRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn may() -> RangeInput {
        RangeInput {
            from: "2024-05-01".into(),
            to: "2024-05-31".into(),
        }
    }

    #[tokio::test]
    async fn valid_range_loads_summary_rows() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/attendance");
            then.status(200).json_body(envelope(
                200,
                json!([
                    { "employee_id": "e1", "employee_name": "Jane Doe", "days_present": 20, "days_on_leave": 1, "total_hours": 160.0 }
                ]),
            ));
        });

        with_runtime_async(|| async move {
            let report = report_resource(repository(&server));
            let range = run_report(report, ToastStore::new(), may()).await.unwrap();
            assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
            let rows = report.data().get_untracked().unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].days_present, 20);
        })
        .await;
    }

    #[tokio::test]
    async fn backwards_range_sends_no_request() {
        let server = MockServer::start_async().await;

        with_runtime_async(|| async move {
            let report = report_resource(repository(&server));
            let toasts = ToastStore::new();
            let backwards = RangeInput {
                from: "2024-06-01".into(),
                to: "2024-05-01".into(),
            };
            assert!(run_report(report, toasts, backwards.clone()).await.is_err());
            assert!(export_report(repository(&server), toasts, backwards, |_, _| Ok(()))
                .await
                .is_err());
            assert!(server.calls().is_empty());
            assert_eq!(toasts.toasts().get_untracked()[0].kind, ToastKind::Error);
        })
        .await;
    }

    #[tokio::test]
    async fn export_saves_csv_under_range_file_name() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/attendance/export");
            then.status(200).body("employee,days\nJane Doe,20\n");
        });

        with_runtime_async(|| async move {
            let saved: RefCell<Option<(String, Vec<u8>)>> = RefCell::new(None);
            let toasts = ToastStore::new();
            export_report(repository(&server), toasts, may(), |name, bytes| {
                *saved.borrow_mut() = Some((name.to_string(), bytes.to_vec()));
                Ok(())
            })
            .await
            .unwrap();

            let (name, bytes) = saved.borrow_mut().take().unwrap();
            assert_eq!(name, "attendance-report_2024-05-01_2024-05-31.csv");
            assert!(bytes.starts_with(b"employee,days"));
            assert_eq!(toasts.toasts().get_untracked()[0].kind, ToastKind::Success);
        })
        .await;
    }

    #[tokio::test]
    async fn failed_save_is_reported() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/reports/attendance/export");
            then.status(200).body("employee,days\n");
        });

        with_runtime_async(|| async move {
            let toasts = ToastStore::new();
            let result = export_report(repository(&server), toasts, may(), |_, _| {
                Err("No document".to_string())
            })
            .await;
            assert!(matches!(result, Err(ApiError::Network(_))));
            assert_eq!(toasts.toasts().get_untracked()[0].kind, ToastKind::Error);
        })
        .await;
    }
}
