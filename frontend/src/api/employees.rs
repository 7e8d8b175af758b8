use reqwest::Method;
use serde_json::Value;

use super::{
    client::{encode_segment, ApiClient},
    types::{ApiError, CreateEmployee, Employee, SuccessCode, UpdateEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_list("/employees", &[]).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<(), ApiError> {
        self.send_json::<_, Value>(Method::POST, "/employees", payload, SuccessCode::Created)
            .await
            .map(|_| ())
    }

    pub async fn update_employee(&self, id: &str, payload: &UpdateEmployee) -> Result<(), ApiError> {
        let path = format!("/employees/{}", encode_segment(id));
        self.send_json::<_, Value>(Method::PUT, &path, payload, SuccessCode::Read)
            .await
            .map(|_| ())
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/employees/{}", encode_segment(id));
        self.request::<Value>(Method::DELETE, &path, &[], None, SuccessCode::Read)
            .await
            .map(|_| ())
    }
}
