use super::repository::AdminDashboardRepository;
use crate::{
    api::{ApiClient, Employee, LeaveRequest, LeaveStatus, Role},
    state::resource::RemoteResource,
};
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub employees: usize,
    pub admins: usize,
    pub pending_leave: usize,
    pub approved_leave: usize,
}

pub fn summarize(employees: &[Employee], leave: &[LeaveRequest]) -> DashboardCounts {
    let count_status = |status: LeaveStatus| leave.iter().filter(|r| r.status == status).count();
    DashboardCounts {
        employees: employees.len(),
        admins: employees.iter().filter(|e| e.role == Role::Admin).count(),
        pending_leave: count_status(LeaveStatus::Pending),
        approved_leave: count_status(LeaveStatus::Approved),
    }
}

#[derive(Clone, Copy)]
pub struct AdminDashboardViewModel {
    pub employees: RemoteResource<(), Vec<Employee>>,
    pub leave: RemoteResource<(), Vec<LeaveRequest>>,
}

impl AdminDashboardViewModel {
    pub fn new(repository: AdminDashboardRepository) -> Self {
        let repo = repository.clone();
        let employees = RemoteResource::new(move |_: ()| {
            let repo = repo.clone();
            async move { repo.employees().await }
        });
        let leave = RemoteResource::new(move |_: ()| {
            let repo = repository.clone();
            async move { repo.leave_requests().await }
        });
        Self { employees, leave }
    }

    pub fn load(&self) {
        self.employees.load(());
        self.leave.load(());
    }

    pub fn counts(&self) -> Signal<DashboardCounts> {
        let employees = self.employees.state();
        let leave = self.leave.state();
        Signal::derive(move || {
            employees.with(|e| {
                leave.with(|l| {
                    summarize(
                        e.data.as_deref().unwrap_or_default(),
                        l.data.as_deref().unwrap_or_default(),
                    )
                })
            })
        })
    }

    pub fn loading(&self) -> Signal<bool> {
        let employees = self.employees.loading();
        let leave = self.leave.loading();
        Signal::derive(move || employees.get() || leave.get())
    }
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let vm = AdminDashboardViewModel::new(AdminDashboardRepository::new_with_client(Rc::new(api)));
    vm.load();
    vm
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(role: Role) -> Employee {
        Employee {
            id: "e".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@example.com".into(),
            department: None,
            position: None,
            role,
            hired_on: None,
        }
    }

    fn leave(status: LeaveStatus) -> LeaveRequest {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        LeaveRequest {
            id: "l".into(),
            employee_id: None,
            employee_name: None,
            leave_type: "ANNUAL".into(),
            start_date: day,
            end_date: day,
            reason: None,
            status,
            created_at: None,
        }
    }

    #[test]
    fn counts_employees_and_leave_by_status() {
        let counts = summarize(
            &[employee(Role::Admin), employee(Role::Employee), employee(Role::Employee)],
            &[
                leave(LeaveStatus::Pending),
                leave(LeaveStatus::Pending),
                leave(LeaveStatus::Approved),
                leave(LeaveStatus::Rejected),
            ],
        );
        assert_eq!(
            counts,
            DashboardCounts {
                employees: 3,
                admins: 1,
                pending_leave: 2,
                approved_leave: 1,
            }
        );
    }

    #[test]
    fn nothing_loaded_counts_zero() {
        assert_eq!(summarize(&[], &[]), DashboardCounts::default());
    }
}
