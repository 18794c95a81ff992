pub mod filter;
pub mod pivot;
pub mod retry;
pub mod status;
pub mod tracker;
pub mod workday;
