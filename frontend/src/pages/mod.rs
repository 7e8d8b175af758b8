pub mod admin_attendance;
pub mod admin_dashboard;
pub mod admin_employees;
pub mod admin_leave;
pub mod change_password;
pub mod employee_dashboard;
pub mod login;
pub mod my_leave;
pub mod not_found;
pub mod reports;

pub use admin_attendance::AdminAttendancePage;
pub use admin_dashboard::AdminDashboardPage;
pub use admin_employees::AdminEmployeesPage;
pub use admin_leave::AdminLeavePage;
pub use change_password::ChangePasswordPage;
pub use employee_dashboard::EmployeeDashboardPage;
pub use login::LoginPage;
pub use my_leave::MyLeavePage;
pub use not_found::NotFoundPage;
pub use reports::ReportsPage;
