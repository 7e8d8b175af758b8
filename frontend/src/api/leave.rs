use reqwest::Method;
use serde_json::Value;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateLeaveRequest, LeaveRequest, LeaveStatus, SuccessCode, UpdateLeaveStatus},
};

impl ApiClient {
    pub async fn my_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_list("/leave-requests/me", &[]).await
    }

    pub async fn all_leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get_list("/leave-requests", &[]).await
    }

    pub async fn create_leave_request(&self, payload: &CreateLeaveRequest) -> Result<(), ApiError> {
        self.send_json::<_, Value>(Method::POST, "/leave-requests", payload, SuccessCode::Created)
            .await
            .map(|_| ())
    }

    /// Status changes are acknowledged with 201, like creates.
    pub async fn update_leave_status(&self, id: &str, status: LeaveStatus) -> Result<(), ApiError> {
        let path = format!("/leave-requests/{}/status", encode_segment(id));
        self.send_json::<_, Value>(
            Method::PATCH,
            &path,
            &UpdateLeaveStatus { status },
            SuccessCode::Created,
        )
        .await
        .map(|_| ())
    }
}
