use std::fmt::{Display, Formatter};

use crate::calendar::LocalDate;
use crate::error::{WeekError, WeekResult};

/// A closed interval of dates in one calendar system; both ends are included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: LocalDate,
    end: LocalDate,
}

impl DateInterval {
    pub fn new(start: LocalDate, end: LocalDate) -> WeekResult<DateInterval> {
        if start.calendar() != end.calendar() {
            return Err(WeekError::CalendarMismatch(start.calendar().id(), end.calendar().id()));
        }
        if end < start {
            return Err(WeekError::InvalidInterval { start, end });
        }
        Ok(DateInterval { start, end })
    }

    pub fn start(&self) -> LocalDate {
        self.start
    }

    pub fn end(&self) -> LocalDate {
        self.end
    }

    /// Number of days in the interval, counting both ends.
    pub fn len(&self) -> usize {
        (self.end.days_since_epoch() - self.start.days_since_epoch()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, date: &LocalDate) -> bool {
        date.calendar() == self.start.calendar() && self.start <= *date && *date <= self.end
    }

    pub fn iter(&self) -> impl Iterator<Item = LocalDate> + '_ {
        (0..self.len() as i32).filter_map(move |offset| self.start.plus_days(offset).ok())
    }
}

impl Display for DateInterval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
