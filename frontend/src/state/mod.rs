pub mod resource;
pub mod role;
pub mod session;
pub mod table;
pub mod toast;
