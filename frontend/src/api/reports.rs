use super::{
    client::ApiClient,
    types::{ApiError, AttendanceReportRow, ReportRange},
};

impl ApiClient {
    pub async fn attendance_report(
        &self,
        range: ReportRange,
    ) -> Result<Vec<AttendanceReportRow>, ApiError> {
        self.get_list("/reports/attendance", &range.query()).await
    }

    pub async fn export_attendance_report(&self, range: ReportRange) -> Result<Vec<u8>, ApiError> {
        self.download("/reports/attendance/export", &range.query())
            .await
    }
}
