pub mod config;
pub mod init;
pub mod matrix;
pub mod pivot;
pub mod retry;
pub mod status;
pub mod tracker;
