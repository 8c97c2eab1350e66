//! Day-of-week handling.
//!
//! Days are numbered the way the farming schedule is published:
//! Sunday = 0 through Saturday = 6. The current day always comes from the
//! local clock, not from the server's timezone.

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical lowercase weekday names, indexed by [`Day::index`].
pub const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// A day of the week, Sunday = 0 … Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(u8);

impl Day {
    pub const SUNDAY: Day = Day(0);
    pub const MONDAY: Day = Day(1);
    pub const TUESDAY: Day = Day(2);
    pub const WEDNESDAY: Day = Day(3);
    pub const THURSDAY: Day = Day(4);
    pub const FRIDAY: Day = Day(5);
    pub const SATURDAY: Day = Day(6);

    /// Build a day from its index. Returns `None` outside 0..=6.
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 7).then_some(Day(index))
    }

    /// The day of week on the local system clock.
    pub fn today_local() -> Self {
        Self::from(Local::now().weekday())
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Canonical lowercase name, e.g. `"sunday"`.
    pub fn name(self) -> &'static str {
        DAY_NAMES[self.0 as usize]
    }

    /// Parse a weekday name, ignoring case and surrounding whitespace.
    pub fn parse_name(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        DAY_NAMES
            .iter()
            .position(|candidate| *candidate == wanted)
            .map(|i| Day(i as u8))
    }

    /// All seven days, Sunday first.
    pub fn all() -> impl Iterator<Item = Day> {
        (0..7).map(Day)
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day(weekday.num_days_from_sunday() as u8)
    }
}

impl TryFrom<u8> for Day {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::from_index(value).ok_or_else(|| format!("day index out of range: {value}"))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical lowercase name for a day index, if it is in range.
pub fn day_name(index: u8) -> Option<&'static str> {
    Day::from_index(index).map(Day::name)
}
