use std::any::Any;
use std::fmt::Debug;
use std::hash::Hasher;

use chrono::Weekday;

use crate::calendar::{CalendarSystem, LocalDate};
use crate::error::WeekResult;

pub mod simple;

pub use simple::{CalendarWeekRule, SimpleWeekYearRule, ISO_RULE};

/// Defines how week-years partition a calendar: where each week-year starts, how many weeks it
/// has, and which date a (week-year, week, day) triple denotes.
///
/// Rules are compared by value, not by identity: two separately built rules with the same
/// configuration must report [`WeekYearRule::rule_eq`] as true and feed the same data to
/// [`WeekYearRule::rule_hash`].
pub trait WeekYearRule: Debug + Send + Sync {
    /// Number of weeks in `week_year`, failing if the rule cannot represent that week-year in
    /// `calendar`.
    fn weeks_in_week_year(&self, week_year: i32, calendar: &CalendarSystem) -> WeekResult<i32>;

    /// Date of `day_of_week` in the given week, failing when the week has no such day.
    fn local_date(
        &self,
        week_year: i32,
        week_of_week_year: i32,
        day_of_week: Weekday,
        calendar: &CalendarSystem,
    ) -> WeekResult<LocalDate>;

    fn week_year(&self, date: &LocalDate) -> i32;

    fn week_of_week_year(&self, date: &LocalDate) -> i32;

    fn as_any(&self) -> &dyn Any;

    fn rule_eq(&self, other: &dyn WeekYearRule) -> bool;

    fn rule_hash(&self, state: &mut dyn Hasher);
}

impl<'a> PartialEq for dyn WeekYearRule + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.rule_eq(other)
    }
}

impl<'a> Eq for dyn WeekYearRule + 'a {}
