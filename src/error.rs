use chrono::Weekday;
use thiserror::Error;

use crate::calendar::LocalDate;

/// Errors raised while building or working with weeks, dates and rules.
#[derive(Error, Debug)]
pub enum WeekError {
    #[error("{param} {value} is out of range: expected {min}..={max}")]
    OutOfRange {
        param: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{day} does not fall within week {week_of_week_year} of week-year {week_year}")]
    DayNotInWeek {
        week_year: i32,
        week_of_week_year: i32,
        day: Weekday,
    },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("weeks can only be compared when they share the same week-year rule and calendar system")]
    IncomparableWeeks,

    #[error("argument must be a Week")]
    WrongType,

    #[error("interval end {end} is before its start {start}")]
    InvalidInterval { start: LocalDate, end: LocalDate },

    #[error("dates in different calendar systems: {0} and {1}")]
    CalendarMismatch(&'static str, &'static str),

    #[error("unknown calendar system: {0}")]
    UnknownCalendar(String),

    #[error("minimum days in first week must be 1..=7, got {0}")]
    InvalidMinDays(u8),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl WeekError {
    pub(crate) fn out_of_range(
        param: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> WeekError {
        WeekError::OutOfRange {
            param,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// True for range failures, the kind `Week::to_date_interval` treats as "day not in this week".
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, WeekError::OutOfRange { .. } | WeekError::DayNotInWeek { .. })
    }
}

pub type WeekResult<T> = Result<T, WeekError>;
