//! LEFT/RIGHT retry distribution over vision result rows. Each row carries
//! a raw attempt count; the first attempt is not a retry, so a count of n
//! means max(n - 1, 0) retries.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Case-insensitive. Any other direction value is not an error, the
    /// row simply does not take part in the distribution.
    pub fn parse(s: &str) -> Option<Direction> {
        if s.eq_ignore_ascii_case("left") {
            Some(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// One histogram bucket: how many rows needed exactly `retries` retries,
/// per direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryRow {
    pub retries: u32,
    pub left: u64,
    pub right: u64,
}

impl RetryRow {
    pub fn total(&self) -> u64 {
        self.left + self.right
    }
}

/// Per-direction retry histogram, merged across any number of sources.
#[derive(Debug, Clone, Default)]
pub struct RetryDistribution {
    left: BTreeMap<u32, u64>,
    right: BTreeMap<u32, u64>,
}

impl RetryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, dir: Direction, attempts: i64) {
        let retries = attempts.saturating_sub(1).max(0) as u32;
        let map = match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *map.entry(retries).or_insert(0) += 1;
    }

    pub fn absorb(&mut self, other: RetryDistribution) {
        for (k, v) in other.left {
            *self.left.entry(k).or_insert(0) += v;
        }
        for (k, v) in other.right {
            *self.right.entry(k).or_insert(0) += v;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    pub fn left_total(&self) -> u64 {
        self.left.values().sum()
    }

    pub fn right_total(&self) -> u64 {
        self.right.values().sum()
    }

    /// Largest retry count observed in either direction.
    pub fn max_retries(&self) -> u32 {
        let l = self.left.keys().next_back().copied().unwrap_or(0);
        let r = self.right.keys().next_back().copied().unwrap_or(0);
        l.max(r)
    }

    /// Dense buckets from 0 up to the largest observed retry count; never
    /// skips a bucket even when neither direction hit it.
    pub fn rows(&self) -> Vec<RetryRow> {
        if self.is_empty() {
            return Vec::new();
        }

        (0..=self.max_retries())
            .map(|k| RetryRow {
                retries: k,
                left: self.left.get(&k).copied().unwrap_or(0),
                right: self.right.get(&k).copied().unwrap_or(0),
            })
            .collect()
    }
}
