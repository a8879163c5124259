use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::{CalendarOrdinal, CalendarSystem};
use crate::error::{WeekError, WeekResult};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Day of week of a day counted from 1970-01-01, which was a Thursday.
pub(crate) fn weekday_from_days(days: i32) -> Weekday {
    WEEKDAYS[(days + 3).rem_euclid(7) as usize]
}

/// A date in a specific calendar system, without time of day.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDate {
    days: i32,
    year: i32,
    month: u8,
    day: u8,
    calendar: CalendarOrdinal,
}

impl LocalDate {
    pub fn new(year: i32, month: u8, day: u8, calendar: &CalendarSystem) -> WeekResult<LocalDate> {
        calendar.validate_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(WeekError::out_of_range("month", month, 1, 12));
        }
        let days_in_month = calendar.days_in_month(year, month);
        if day < 1 || day > days_in_month {
            return Err(WeekError::out_of_range("day", day, 1, days_in_month));
        }
        Ok(LocalDate {
            days: calendar.days_since_epoch(year, month, day),
            year,
            month,
            day,
            calendar: calendar.ordinal(),
        })
    }

    pub fn iso(year: i32, month: u8, day: u8) -> WeekResult<LocalDate> {
        LocalDate::new(year, month, day, CalendarSystem::iso())
    }

    pub fn from_days_since_epoch(days: i32, calendar: &CalendarSystem) -> WeekResult<LocalDate> {
        if days < calendar.min_days() || days > calendar.max_days() {
            return Err(WeekError::out_of_range("days", days, calendar.min_days(), calendar.max_days()));
        }
        let (year, month, day) = calendar.ymd_from_days(days);
        Ok(LocalDate {
            days,
            year,
            month,
            day,
            calendar: calendar.ordinal(),
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn calendar(&self) -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(self.calendar)
    }

    pub fn days_since_epoch(&self) -> i32 {
        self.days
    }

    pub fn day_of_week(&self) -> Weekday {
        weekday_from_days(self.days)
    }

    pub fn plus_days(&self, days: i32) -> WeekResult<LocalDate> {
        let target = self.days.checked_add(days).ok_or_else(|| {
            WeekError::out_of_range("days", i64::from(self.days) + i64::from(days), i32::MIN, i32::MAX)
        })?;
        LocalDate::from_days_since_epoch(target, self.calendar())
    }

    /// The same day viewed in another calendar system.
    pub fn with_calendar(&self, calendar: &CalendarSystem) -> WeekResult<LocalDate> {
        LocalDate::from_days_since_epoch(self.days, calendar)
    }

    /// Converts to a chrono date. Non-ISO dates are converted by the day they denote.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = CalendarSystem::iso().ymd_from_days(self.days);
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
    }
}

impl TryFrom<NaiveDate> for LocalDate {
    type Error = WeekError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        LocalDate::iso(value.year(), value.month() as u8, value.day() as u8)
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.days.cmp(&other.days).then(self.calendar.cmp(&other.calendar))
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for LocalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)?;
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        }
        match self.calendar {
            CalendarOrdinal::Iso => Ok(()),
            _ => write!(f, " ({})", self.calendar()),
        }
    }
}

impl Debug for LocalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
