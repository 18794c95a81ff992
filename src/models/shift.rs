//! Shift windows and the three-toggle shift filter.
//! Day 06:00-13:59:59, Swing 14:00-21:59:59, Night 22:00-05:59:59.

use chrono::NaiveTime;

pub const DAY_START: NaiveTime = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
pub const SWING_START: NaiveTime = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
pub const NIGHT_START: NaiveTime = NaiveTime::from_hms_opt(22, 0, 0).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Day,
    Swing,
    Night,
}

impl Shift {
    /// Classify a time of day. Every time maps to exactly one shift.
    pub fn of(t: NaiveTime) -> Shift {
        if t < DAY_START {
            Shift::Night
        } else if t < SWING_START {
            Shift::Day
        } else if t < NIGHT_START {
            Shift::Swing
        } else {
            Shift::Night
        }
    }

    pub fn contains(self, t: NaiveTime) -> bool {
        match self {
            Shift::Day => t >= DAY_START && t < SWING_START,
            Shift::Swing => t >= SWING_START && t < NIGHT_START,
            // Night wraps midnight, the only window needing OR
            Shift::Night => t >= NIGHT_START || t < DAY_START,
        }
    }

}

/// Three independent toggles. All-on and all-off both mean "pass every
/// time": all-off is a safety fallback, not an exclude-everything filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftFilter {
    pub day: bool,
    pub swing: bool,
    pub night: bool,
}

impl Default for ShiftFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl ShiftFilter {
    pub fn all() -> Self {
        Self {
            day: true,
            swing: true,
            night: true,
        }
    }

    pub fn new(day: bool, swing: bool, night: bool) -> Self {
        Self { day, swing, night }
    }

    pub fn is_pass_all(&self) -> bool {
        (self.day && self.swing && self.night) || (!self.day && !self.swing && !self.night)
    }

    pub fn includes(&self, t: NaiveTime) -> bool {
        if self.is_pass_all() {
            return true;
        }

        (self.day && Shift::Day.contains(t))
            || (self.swing && Shift::Swing.contains(t))
            || (self.night && Shift::Night.contains(t))
    }

    /// Names of the enabled shifts, for info lines. Pass-all reports all three.
    pub fn labels(&self) -> Vec<&'static str> {
        if self.is_pass_all() {
            return vec!["Day", "Swing", "Night"];
        }

        let mut out = Vec::new();
        if self.day {
            out.push("Day");
        }
        if self.swing {
            out.push("Swing");
        }
        if self.night {
            out.push("Night");
        }
        out
    }
}
