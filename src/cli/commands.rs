pub mod batch;
pub mod config;
pub mod formats;
pub mod init;
pub mod report;
