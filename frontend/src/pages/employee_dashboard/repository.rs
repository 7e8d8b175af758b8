use crate::api::{ApiClient, ApiError, AttendanceRecord};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    CheckIn,
    CheckOut,
}

impl ClockAction {
    pub fn success_message(self) -> &'static str {
        match self {
            ClockAction::CheckIn => "Checked in",
            ClockAction::CheckOut => "Checked out",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            ClockAction::CheckIn => "Could not check in",
            ClockAction::CheckOut => "Could not check out",
        }
    }
}

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn my_records(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.client.my_attendance().await
    }

    pub async fn clock(&self, action: ClockAction) -> Result<(), ApiError> {
        match action {
            ClockAction::CheckIn => self.client.check_in().await,
            ClockAction::CheckOut => self.client.check_out().await,
        }
        .map(|_| ())
    }
}
