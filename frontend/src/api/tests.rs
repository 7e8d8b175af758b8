#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use crate::state::session::{SessionStore, SESSION_FLAG_KEY};
use crate::utils::storage::{KeyValueStore, MemoryStorage};
use serde_json::json;
use std::rc::Rc;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn employee_json(id: &str, first: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": first,
        "last_name": "Example",
        "email": format!("{}@example.com", first.to_lowercase()),
        "department": "Engineering",
        "position": "Developer",
        "role": "EMPLOYEE",
        "hired_on": "2024-04-01"
    })
}

fn leave_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employee_id": "e1",
        "employee_name": "Alice Example",
        "leave_type": "ANNUAL",
        "start_date": "2025-03-01",
        "end_date": "2025-03-02",
        "reason": "Trip",
        "status": status,
        "created_at": "2025-02-01T09:00:00Z"
    })
}

#[tokio::test]
async fn current_user_is_read_from_data_envelope() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200)
            .json_body(envelope(200, json!({ "role": "ADMIN", "email": "boss@example.com" })));
    });

    let user = client(&server).fetch_current_user().await.unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.email, "boss@example.com");
}

#[tokio::test]
async fn list_payload_under_date_key_is_normalized() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({
            "code": 200,
            "date": [employee_json("e1", "Alice"), employee_json("e2", "Bob")]
        }));
    });

    let employees = client(&server).list_employees().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[1].full_name(), "Bob Example");
}

#[tokio::test]
async fn missing_list_payload_is_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/leave-requests/me");
        then.status(200).json_body(json!({ "code": 200 }));
    });

    let requests = client(&server).my_leave_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn envelope_failure_code_carries_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/employees");
        then.status(200)
            .json_body(rejection(409, "Email already registered"));
    });

    let err = client(&server)
        .create_employee(&CreateEmployee {
            first_name: "Carol".into(),
            last_name: "Example".into(),
            email: "carol@example.com".into(),
            password: "secret-password".into(),
            department: None,
            position: None,
            role: Role::Employee,
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("fallback"), "Email already registered");
}

#[tokio::test]
async fn create_expects_201_not_200() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/leave-requests");
        then.status(200).json_body(json!({ "code": 200 }));
    });

    let err = client(&server)
        .create_leave_request(&CreateLeaveRequest {
            leave_type: "ANNUAL".into(),
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            reason: "Trip".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { code: 200, .. }));
}

#[tokio::test]
async fn status_update_accepts_201() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PATCH).path("/api/leave-requests/l1/status");
        then.status(200)
            .json_body(envelope(201, leave_json("l1", "APPROVED")));
    });

    client(&server)
        .update_leave_status("l1", LeaveStatus::Approved)
        .await
        .unwrap();
    assert_eq!(server.hits(PATCH, "/api/leave-requests/l1/status"), 1);
}

#[tokio::test]
async fn http_error_with_envelope_is_rejection() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employees/e9");
        then.status(404).json_body(rejection(404, "Employee not found"));
    });

    let err = client(&server).delete_employee("e9").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            code: 404,
            message: Some("Employee not found".into())
        }
    );
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    let server = MockServer::start_async().await;
    // No routes registered: the mock answers like a dead host.
    let err = client(&server).all_attendance().await.unwrap_err();
    assert_eq!(err.code(), "NETWORK_ERROR");
}

#[tokio::test]
async fn unauthorized_response_expires_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance/me");
        then.status(401).json_body(rejection(401, "Unauthorized"));
    });

    let runtime = leptos::create_runtime();
    let storage = Rc::new(MemoryStorage::default());
    let session = SessionStore::new(storage.clone());
    session.login();
    let api = client(&server).with_session(session);

    let err = api.my_attendance().await.unwrap_err();
    assert!(err.is_auth_expired());
    assert!(!session.is_authenticated());
    assert_eq!(storage.get(SESSION_FLAG_KEY), None);
    runtime.dispose();
}

#[tokio::test]
async fn forbidden_response_expires_session() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(403).json_body(json!({}));
    });

    let runtime = leptos::create_runtime();
    let session = SessionStore::new(Rc::new(MemoryStorage::default()));
    session.login();
    let err = client(&server)
        .with_session(session)
        .list_employees()
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::AuthExpired { status: 403 });
    assert!(!session.is_authenticated());
    runtime.dispose();
}

#[tokio::test]
async fn bad_credentials_on_login_do_not_count_as_expiry() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401).json_body(rejection(401, "Invalid email or password"));
    });

    let err = client(&server)
        .login(&LoginRequest {
            email: "a@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.user_message("fallback"), "Invalid email or password");
}

#[tokio::test]
async fn report_export_returns_raw_bytes() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/attendance/export");
        then.status(200).body("employee,days\nAlice,20\n");
    });

    let range = ReportRange {
        from: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        to: chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    };
    let bytes = client(&server)
        .export_attendance_report(range)
        .await
        .unwrap();
    assert_eq!(bytes, b"employee,days\nAlice,20\n".to_vec());
}

#[tokio::test]
async fn report_export_failure_surfaces_envelope_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/reports/attendance/export");
        then.status(400).json_body(rejection(400, "Range too large"));
    });

    let range = ReportRange {
        from: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        to: chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    };
    let err = client(&server)
        .export_attendance_report(range)
        .await
        .unwrap_err();
    assert_eq!(err.user_message("fallback"), "Range too large");
}
