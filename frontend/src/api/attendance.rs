use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, SuccessCode},
};

impl ApiClient {
    pub async fn check_in(&self) -> Result<Option<AttendanceRecord>, ApiError> {
        self.send_json(
            Method::POST,
            "/attendance/check-in",
            &serde_json::json!({}),
            SuccessCode::Created,
        )
        .await
    }

    pub async fn check_out(&self) -> Result<Option<AttendanceRecord>, ApiError> {
        self.send_json(
            Method::POST,
            "/attendance/check-out",
            &serde_json::json!({}),
            SuccessCode::Created,
        )
        .await
    }

    pub async fn my_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_list("/attendance/me", &[]).await
    }

    pub async fn all_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.get_list("/attendance", &[]).await
    }
}
