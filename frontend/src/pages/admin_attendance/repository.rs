use crate::api::{ApiClient, ApiError, AttendanceRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceOverviewRepository {
    client: Rc<ApiClient>,
}

impl AttendanceOverviewRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.all_attendance().await
    }
}
