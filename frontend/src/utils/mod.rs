pub mod browser;
pub mod download;
pub mod pagination;
pub mod search;
pub mod storage;
pub mod time;
