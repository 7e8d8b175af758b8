use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failure of any API interaction, including client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Rejected { code: i64, message: Option<String> },
    #[error("Your session has expired. Please sign in again.")]
    AuthExpired { status: u16 },
    #[error("{0}")]
    Validation(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn rejected(code: i64, message: Option<String>) -> Self {
        Self::Rejected {
            code,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR",
            ApiError::Rejected { .. } => "REJECTED",
            ApiError::AuthExpired { .. } => "AUTH_EXPIRED",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Decode(_) => "DECODE_ERROR",
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired { .. })
    }

    /// Message for toasts: the server's own text when it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Rejected { message: None, .. }
            | ApiError::Network(_)
            | ApiError::Decode(_) => fallback.to_string(),
            ApiError::AuthExpired { .. } | ApiError::Validation(_) => self.to_string(),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

/// Response wrapper used by every endpoint. Some endpoints send the payload under
/// `date` instead of `data`; both land in `data`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default", alias = "date")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCode {
    Read,
    Created,
}

impl SuccessCode {
    pub fn value(self) -> i64 {
        match self {
            SuccessCode::Read => 200,
            SuccessCode::Created => 201,
        }
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self, expected: SuccessCode) -> Result<Option<T>, ApiError> {
        if self.code == expected.value() {
            Ok(self.data)
        } else {
            Err(ApiError::rejected(self.code, self.message))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Employee,
    Unresolved,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "EMPLOYEE" => Role::Employee,
            _ => Role::Unresolved,
        }
    }

    /// Wire spelling, also accepted back by [`Role::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Employee => "EMPLOYEE",
            Role::Unresolved => "UNRESOLVED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Employee => "Employee",
            Role::Unresolved => "Unknown",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Role::parse).unwrap_or(Role::Unresolved))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    #[serde(default = "unresolved_role")]
    pub role: Role,
    #[serde(default)]
    pub email: String,
}

fn unresolved_role() -> Role {
    Role::Unresolved
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Shortest password the server accepts for new accounts and password changes.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default = "unresolved_role")]
    pub role: Role,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateEmployee {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub worked_hours: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    pub const FILTERABLE: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Unknown => "Unknown",
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
            LeaveStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        Self::FILTERABLE
            .into_iter()
            .find(|status| status.as_param().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LeaveRequest {
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateLeaveRequest {
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateLeaveStatus {
    pub status: LeaveStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceReportRow {
    pub employee_id: String,
    pub employee_name: String,
    #[serde(default)]
    pub days_present: u32,
    #[serde(default)]
    pub days_on_leave: u32,
    #[serde(default)]
    pub total_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRange {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("from", self.from.format("%Y-%m-%d").to_string()),
            ("to", self.to.format("%Y-%m-%d").to_string()),
        ]
    }
}
