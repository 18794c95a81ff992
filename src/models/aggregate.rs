use serde::Serialize;

/// Cell value of a pivot: occurrence count plus accumulated minutes.
/// In count mode the minutes stay at zero and only the count is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Aggregate {
    pub count: u64,
    pub minutes: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregateMode {
    /// Each event contributes +1.
    #[default]
    Count,
    /// Each event contributes +1 and its resolved duration in minutes.
    Duration,
}

impl Aggregate {
    pub fn absorb(&mut self, other: &Aggregate) {
        self.count += other.count;
        self.minutes += other.minutes;
    }

    pub fn is_zero(&self) -> bool {
        self.count == 0 && self.minutes == 0.0
    }

    /// The scalar used for totals, sorting and serialization.
    pub fn value(&self, mode: AggregateMode) -> f64 {
        match mode {
            AggregateMode::Count => self.count as f64,
            AggregateMode::Duration => self.minutes,
        }
    }
}
