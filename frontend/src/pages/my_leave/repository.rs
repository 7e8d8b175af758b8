use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct MyLeaveRepository {
    client: Rc<ApiClient>,
}

impl MyLeaveRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.client.my_leave_requests().await
    }

    pub async fn create(&self, payload: CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.create_leave_request(&payload).await
    }
}
