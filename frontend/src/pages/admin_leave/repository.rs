use crate::api::{ApiClient, ApiError, LeaveRequest, LeaveStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveApprovalRepository {
    client: Rc<ApiClient>,
}

impl LeaveApprovalRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.all_leave_requests().await
    }

    pub async fn set_status(&self, id: &str, status: LeaveStatus) -> Result<(), ApiError> {
        self.client.update_leave_status(id, status).await
    }
}
