//! Cell-wise summation of independently built accumulators.
//!
//! The merge is associative and commutative: a run may cover anywhere from
//! one sheet to the whole workbook, and the order sources are processed in
//! must never change the merged totals.

use crate::core::pivot::Accumulator;

pub fn merge_all<I>(sources: I) -> Accumulator
where
    I: IntoIterator<Item = Accumulator>,
{
    let mut merged = Accumulator::new();
    for acc in sources {
        merged.absorb(acc);
    }
    merged
}
