use super::repository::LeaveApprovalRepository;
use crate::{
    api::{ApiClient, ApiError, LeaveRequest, LeaveStatus},
    state::{
        resource::RemoteResource,
        table::TableState,
        toast::{use_toasts, ToastStore},
    },
};
use leptos::*;
use std::rc::Rc;

pub fn filter_by_status(rows: &[LeaveRequest], status: Option<LeaveStatus>) -> Vec<LeaveRequest> {
    rows.iter()
        .filter(|row| status.map_or(true, |wanted| row.status == wanted))
        .cloned()
        .collect()
}

pub type ApprovalResource = RemoteResource<(), Vec<LeaveRequest>>;

pub fn approval_resource(repo: LeaveApprovalRepository) -> ApprovalResource {
    RemoteResource::new(move |_: ()| {
        let repo = repo.clone();
        async move { repo.list().await }
    })
}

/// Sends the decision. The row is patched only once the server has acknowledged it,
/// and the list is reloaded whatever the outcome.
pub async fn decide(
    repo: LeaveApprovalRepository,
    requests: ApprovalResource,
    toasts: ToastStore,
    id: String,
    status: LeaveStatus,
) -> Result<(), ApiError> {
    let outcome = requests
        .mutate(async {
            repo.set_status(&id, status).await?;
            requests.patch(|rows| {
                if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                    row.status = status;
                }
            });
            Ok(())
        })
        .await;
    match &outcome {
        Ok(()) => {
            toasts.push_success(format!("Leave request {}", status.label().to_lowercase()));
        }
        Err(err) => {
            toasts.push_error(err, "Could not update the leave request");
        }
    }
    outcome
}

#[derive(Clone, Copy)]
pub struct AdminLeaveViewModel {
    pub requests: ApprovalResource,
    pub status_filter: RwSignal<Option<LeaveStatus>>,
    pub table: TableState,
    pub decide_action: Action<(String, LeaveStatus), Result<(), ApiError>>,
}

impl AdminLeaveViewModel {
    /// Rows after the status filter; search and paging apply on top.
    pub fn rows(&self) -> Signal<Vec<LeaveRequest>> {
        let data = self.requests.state();
        let status = self.status_filter;
        Signal::derive(move || {
            data.with(|s| filter_by_status(s.data.as_deref().unwrap_or_default(), status.get()))
        })
    }

    pub fn set_status_filter(&self, status: Option<LeaveStatus>) {
        self.status_filter.set(status);
        self.table.set_page(1);
    }
}

pub fn use_admin_leave_view_model() -> AdminLeaveViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LeaveApprovalRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let requests = approval_resource(repository.clone());
    requests.load(());

    let decide_action = create_action(move |(id, status): &(String, LeaveStatus)| {
        decide(repository.clone(), requests, toasts, id.clone(), *status)
    });

    AdminLeaveViewModel {
        requests,
        status_filter: create_rw_signal(None),
        table: TableState::with_default_page_size(),
        decide_action,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::{with_runtime, with_runtime_async};
    use serde_json::{json, Value};

    fn row(status: &str) -> Value {
        json!({
            "id": "l1",
            "employee_name": "Jane Doe",
            "leave_type": "ANNUAL",
            "start_date": "2024-06-03",
            "end_date": "2024-06-04",
            "status": status
        })
    }

    fn repository(server: &MockServer) -> LeaveApprovalRepository {
        LeaveApprovalRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    fn status_of(requests: ApprovalResource) -> Option<LeaveStatus> {
        requests
            .data()
            .get_untracked()
            .and_then(|rows| rows.first().map(|r| r.status))
    }

    #[tokio::test]
    async fn rejected_update_leaves_status_unchanged() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(200).json_body(envelope(200, json!([row("PENDING")])));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/leave-requests/l1/status");
            then.status(200)
                .json_body(rejection(409, "Request was already processed"));
        });

        with_runtime_async(|| async move {
            let repo = repository(&server);
            let requests = approval_resource(repo.clone());
            let toasts = ToastStore::new();
            requests.fetch(()).await;

            let result = decide(repo, requests, toasts, "l1".into(), LeaveStatus::Approved).await;

            assert!(result.is_err());
            assert_eq!(status_of(requests), Some(LeaveStatus::Pending));
            assert_eq!(server.hits(GET, "/api/leave-requests"), 2);
            let shown = toasts.toasts().get_untracked();
            assert_eq!(shown[0].kind, ToastKind::Error);
            assert_eq!(shown[0].message, "Request was already processed");
        })
        .await;
    }

    #[tokio::test]
    async fn confirmed_update_is_reconciled_by_reload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(200).json_body(envelope(200, json!([row("PENDING")])));
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/leave-requests/l1/status");
            then.status(201).json_body(envelope(201, json!(null)));
        });

        with_runtime_async(|| async move {
            let repo = repository(&server);
            let requests = approval_resource(repo.clone());
            requests.fetch(()).await;

            server.mock(|when, then| {
                when.method(GET).path("/api/leave-requests");
                then.status(200).json_body(envelope(200, json!([row("REJECTED")])));
            });
            decide(repo, requests, ToastStore::new(), "l1".into(), LeaveStatus::Rejected)
                .await
                .unwrap();
            assert_eq!(status_of(requests), Some(LeaveStatus::Rejected));
        })
        .await;
    }

    #[tokio::test]
    async fn confirmed_update_survives_failed_reload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave-requests");
            then.status(200)
                .json_body(envelope(200, json!([row("PENDING")])))
                .times(1);
        });
        server.mock(|when, then| {
            when.method(PATCH).path("/api/leave-requests/l1/status");
            then.status(201).json_body(envelope(201, json!(null)));
        });

        with_runtime_async(|| async move {
            let repo = repository(&server);
            let requests = approval_resource(repo.clone());
            requests.fetch(()).await;

            decide(repo, requests, ToastStore::new(), "l1".into(), LeaveStatus::Approved)
                .await
                .unwrap();
            assert_eq!(status_of(requests), Some(LeaveStatus::Approved));
            assert!(requests.error().get_untracked().is_some());
        })
        .await;
    }

    #[test]
    fn changing_status_filter_returns_to_first_page() {
        with_runtime(|| {
            let vm = AdminLeaveViewModel {
                requests: approval_resource(LeaveApprovalRepository::new_with_client(Rc::new(
                    ApiClient::new_with_base_url("http://unused.test/api"),
                ))),
                status_filter: create_rw_signal(None),
                table: TableState::new(10),
                decide_action: create_action(|_: &(String, LeaveStatus)| async { Ok(()) }),
            };
            vm.table.set_page(3);
            vm.set_status_filter(Some(LeaveStatus::Pending));
            assert_eq!(vm.table.page().get_untracked(), 1);
            assert_eq!(vm.status_filter.get_untracked(), Some(LeaveStatus::Pending));
        });
    }

    #[test]
    fn twenty_five_requests_page_by_ten() {
        with_runtime(|| {
            let rows: Vec<LeaveRequest> = (1..=25)
                .map(|n| {
                    serde_json::from_value(json!({
                        "id": format!("l{}", n),
                        "leave_type": "ANNUAL",
                        "start_date": "2024-06-03",
                        "end_date": "2024-06-03",
                        "status": "PENDING"
                    }))
                    .unwrap()
                })
                .collect();
            let table = TableState::new(10);
            let source = create_rw_signal(rows);
            let page = table.visible(source.into());

            let ids = |p: &crate::utils::pagination::Page<LeaveRequest>| {
                p.items.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
            };
            let first = page.get_untracked();
            assert_eq!(ids(&first), (1..=10).map(|n| format!("l{}", n)).collect::<Vec<_>>());

            table.set_page(3);
            let last = page.get_untracked();
            assert_eq!(ids(&last), (21..=25).map(|n| format!("l{}", n)).collect::<Vec<_>>());
            assert!(!last.has_next());
        });
    }
}
