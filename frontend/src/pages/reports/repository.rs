use crate::api::{ApiClient, ApiError, AttendanceReportRow, ReportRange};
use std::rc::Rc;

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn summary(&self, range: ReportRange) -> Result<Vec<AttendanceReportRow>, ApiError> {
        self.client.attendance_report(range).await
    }

    pub async fn export_csv(&self, range: ReportRange) -> Result<Vec<u8>, ApiError> {
        self.client.export_attendance_report(range).await
    }
}
