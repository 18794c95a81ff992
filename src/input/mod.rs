pub mod matrix;
pub mod retry;
pub mod rows;
pub mod status;
pub mod whitelist;
