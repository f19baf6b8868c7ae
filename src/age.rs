//! age.rs
//!
//! Human-readable elapsed time in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono has no year/month/day diff, so the breakdown is done by stepping
//! whole calendar months forward from the reference date. Month arithmetic
//! clamps to the last day of shorter months (Jan 31 + 1 month = Feb 28/29),
//! which keeps the day remainder non-negative across:
//!   • month-length differences
//!   • leap years
//!   • year boundaries

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// Marker appended on the exact anniversary of the reference date.
pub const ANNIVERSARY_MARKER: &str = " 🎂";

/// Calendar-aware distance between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Age {
    /// Breaks down the time elapsed from `reference` to `today`.
    ///
    /// Returns `None` when `today` is before `reference`.
    pub fn between(reference: NaiveDate, today: NaiveDate) -> Option<Self> {
        if today < reference {
            return None;
        }

        let mut total_months = (today.year() - reference.year()) * 12 + today.month() as i32
            - reference.month() as i32;
        let mut anchor = add_months(reference, total_months)?;

        // Not a full month yet: step back one.
        if anchor > today {
            total_months -= 1;
            anchor = add_months(reference, total_months)?;
        }

        let total_months = u32::try_from(total_months).ok()?;
        let days = u32::try_from((today - anchor).num_days()).ok()?;

        Some(Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
        })
    }

    pub fn is_anniversary(&self) -> bool {
        self.months == 0 && self.days == 0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )?;

        if self.is_anniversary() {
            f.write_str(ANNIVERSARY_MARKER)?;
        }

        Ok(())
    }
}

/// Unit suffix: singular only for exactly one.
pub fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(u32::try_from(months).ok()?))
}
