pub mod aggregate;
pub mod event;
pub mod pivot_table;
pub mod shift;
