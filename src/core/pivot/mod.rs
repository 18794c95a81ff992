pub mod accumulator;
pub mod densify;
pub mod merge;
pub mod sort;

pub use accumulator::{Accumulator, PivotOptions};
pub use merge::merge_all;
