use crate::api::{ApiClient, ApiError, Employee, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardRepository {
    client: Rc<ApiClient>,
}

impl AdminDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn leave_requests(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.all_leave_requests().await
    }
}
