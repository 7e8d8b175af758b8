use crate::api::{ApiClient, ApiError, CreateEmployee, Employee, UpdateEmployee};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_employees().await
    }

    pub async fn create(&self, payload: CreateEmployee) -> Result<(), ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update(&self, id: String, payload: UpdateEmployee) -> Result<(), ApiError> {
        self.client.update_employee(&id, &payload).await
    }

    pub async fn delete(&self, id: String) -> Result<(), ApiError> {
        self.client.delete_employee(&id).await
    }
}
