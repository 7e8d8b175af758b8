pub mod attendance_table;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
pub mod leave_table;
pub mod pagination;
pub mod status_chip;
pub mod toast;
