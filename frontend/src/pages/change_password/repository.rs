use crate::api::{ApiClient, ApiError, ChangePasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct PasswordRepository {
    client: Rc<ApiClient>,
}

impl PasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn change(&self, request: ChangePasswordRequest) -> Result<(), ApiError> {
        self.client.change_password(&request).await
    }
}
