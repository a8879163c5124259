//! Week-year/week-of-week-year values.
//!
//! A [`Week`] pairs a week-year with a week number inside it. How week-years carve up the
//! calendar is decided by a [`WeekYearRule`]; the ISO-8601 rule ([`ISO_RULE`]) is the default,
//! and [`SimpleWeekYearRule`] covers other first-day-of-week / minimum-days combinations.
//!
//! ```
//! use chrono::Weekday;
//! use week_year::{LocalDate, Week};
//!
//! let week = Week::iso(2015, 1)?;
//! assert_eq!(week.on_day_of_week(Weekday::Mon)?, LocalDate::iso(2014, 12, 29)?);
//! assert_eq!(week.to_date_interval().end(), LocalDate::iso(2015, 1, 4)?);
//! # Ok::<(), week_year::WeekError>(())
//! ```

#[macro_use]
pub mod log;
pub mod app_config;
pub mod calendar;
pub mod error;
pub mod rule;
pub mod week;

pub use app_config::Settings;
pub use calendar::{CalendarOrdinal, CalendarSystem, DateInterval, LocalDate};
pub use error::{WeekError, WeekResult};
pub use rule::{CalendarWeekRule, SimpleWeekYearRule, WeekYearRule, ISO_RULE};
pub use week::{Week, WeekBuilder};
