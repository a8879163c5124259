use std::any::Any;
use std::hash::{Hash, Hasher};

use chrono::Weekday;
use serde::Deserialize;

use crate::calendar::date::weekday_from_days;
use crate::calendar::{CalendarSystem, LocalDate};
use crate::error::{WeekError, WeekResult};
use crate::rule::WeekYearRule;

/// The ISO-8601 rule: weeks start on Monday, week 1 is the first week with at least four days
/// in the new year.
pub static ISO_RULE: SimpleWeekYearRule = SimpleWeekYearRule {
    min_days_in_first_week: 4,
    first_day_of_week: Weekday::Mon,
    irregular_weeks: false,
};

/// Week numbering schemes of the "calendar week rule" family. Rules built from these never let
/// a week-year run into the next calendar year, so the weeks around the year boundary are
/// truncated instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum CalendarWeekRule {
    FirstDay,
    FirstFullWeek,
    FirstFourDayWeek,
}

impl CalendarWeekRule {
    fn min_days_in_first_week(self) -> u8 {
        match self {
            CalendarWeekRule::FirstDay => 1,
            CalendarWeekRule::FirstFourDayWeek => 4,
            CalendarWeekRule::FirstFullWeek => 7,
        }
    }
}

/// Rule parameterized by the first day of the week and the minimum number of days of the new
/// calendar year that week 1 must contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimpleWeekYearRule {
    min_days_in_first_week: u8,
    first_day_of_week: Weekday,
    irregular_weeks: bool,
}

impl SimpleWeekYearRule {
    pub fn new(min_days_in_first_week: u8, first_day_of_week: Weekday, irregular_weeks: bool) -> WeekResult<Self> {
        if !(1..=7).contains(&min_days_in_first_week) {
            return Err(WeekError::InvalidMinDays(min_days_in_first_week));
        }
        Ok(SimpleWeekYearRule {
            min_days_in_first_week,
            first_day_of_week,
            irregular_weeks,
        })
    }

    pub fn iso() -> Self {
        ISO_RULE
    }

    /// A regular rule: every week has seven days and week-years may spill into neighbouring
    /// calendar years.
    pub fn for_min_days_in_first_week(min_days_in_first_week: u8, first_day_of_week: Weekday) -> WeekResult<Self> {
        SimpleWeekYearRule::new(min_days_in_first_week, first_day_of_week, false)
    }

    pub fn from_calendar_week_rule(rule: CalendarWeekRule, first_day_of_week: Weekday) -> Self {
        SimpleWeekYearRule {
            min_days_in_first_week: rule.min_days_in_first_week(),
            first_day_of_week,
            irregular_weeks: true,
        }
    }

    pub fn min_days_in_first_week(&self) -> u8 {
        self.min_days_in_first_week
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn irregular_weeks(&self) -> bool {
        self.irregular_weeks
    }

    /// 0 when `day` is the first day of the week, up to 6 for the last.
    fn days_into_week(&self, day: Weekday) -> i32 {
        (day.num_days_from_monday() as i32 - self.first_day_of_week.num_days_from_monday() as i32).rem_euclid(7)
    }

    /// Days since epoch of the first day of week 1 of `week_year`. For irregular rules this can
    /// precede the calendar year; those leading days are then rejected by `local_date`.
    fn week_year_start(&self, calendar: &CalendarSystem, week_year: i32) -> i32 {
        let start_of_calendar_year = calendar.start_of_year_in_days(week_year);
        let days_into_week = self.days_into_week(weekday_from_days(start_of_calendar_year));
        let start_of_week = start_of_calendar_year - days_into_week;
        if 7 - days_into_week >= i32::from(self.min_days_in_first_week) {
            start_of_week
        } else {
            start_of_week + 7
        }
    }

    /// Week-years are limited to the calendar's own years. The edge days of the calendar that
    /// belong to the week-year just outside it therefore have no `Week`: most of that
    /// week-year's weeks would lie entirely outside the calendar.
    fn validate_week_year(&self, week_year: i32, calendar: &CalendarSystem) -> WeekResult<()> {
        if week_year < calendar.min_year() || week_year > calendar.max_year() {
            return Err(WeekError::out_of_range(
                "week_year",
                week_year,
                calendar.min_year(),
                calendar.max_year(),
            ));
        }
        Ok(())
    }
}

impl Default for SimpleWeekYearRule {
    fn default() -> Self {
        ISO_RULE
    }
}

impl WeekYearRule for SimpleWeekYearRule {
    fn weeks_in_week_year(&self, week_year: i32, calendar: &CalendarSystem) -> WeekResult<i32> {
        self.validate_week_year(week_year, calendar)?;
        let start_of_week_year = self.week_year_start(calendar, week_year);
        // Positive when the week-year starts in December of the previous year.
        let extra_days_at_start = calendar.start_of_year_in_days(week_year) - start_of_week_year;
        // Regular rules may borrow up to min_days - 1 days of the next year; irregular rules
        // round a partial last week up.
        let extra_days_at_end = if self.irregular_weeks {
            6
        } else {
            i32::from(self.min_days_in_first_week) - 1
        };
        Ok((calendar.days_in_year(week_year) + extra_days_at_start + extra_days_at_end) / 7)
    }

    fn local_date(
        &self,
        week_year: i32,
        week_of_week_year: i32,
        day_of_week: Weekday,
        calendar: &CalendarSystem,
    ) -> WeekResult<LocalDate> {
        let max_weeks = self.weeks_in_week_year(week_year, calendar)?;
        if week_of_week_year < 1 || week_of_week_year > max_weeks {
            return Err(WeekError::out_of_range("week_of_week_year", week_of_week_year, 1, max_weeks));
        }
        let not_in_week = || WeekError::DayNotInWeek {
            week_year,
            week_of_week_year,
            day: day_of_week,
        };
        let days = self.week_year_start(calendar, week_year)
            + (week_of_week_year - 1) * 7
            + self.days_into_week(day_of_week);
        if days < calendar.min_days() || days > calendar.max_days() {
            return Err(not_in_week());
        }
        let date = LocalDate::from_days_since_epoch(days, calendar)?;
        // Short weeks at either end of an irregular week-year lack some days.
        if self.irregular_weeks && self.week_year(&date) != week_year {
            return Err(not_in_week());
        }
        Ok(date)
    }

    fn week_year(&self, date: &LocalDate) -> i32 {
        let calendar = date.calendar();
        let calendar_year = date.year();
        let days = date.days_since_epoch();
        if days < self.week_year_start(calendar, calendar_year) {
            return calendar_year - 1;
        }
        // Irregular rules never assign a date to the next calendar year's week-year.
        if self.irregular_weeks {
            return calendar_year;
        }
        if days < self.week_year_start(calendar, calendar_year + 1) {
            calendar_year
        } else {
            calendar_year + 1
        }
    }

    fn week_of_week_year(&self, date: &LocalDate) -> i32 {
        let start = self.week_year_start(date.calendar(), self.week_year(date));
        (date.days_since_epoch() - start) / 7 + 1
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn rule_eq(&self, other: &dyn WeekYearRule) -> bool {
        other
            .as_any()
            .downcast_ref::<SimpleWeekYearRule>()
            .map_or(false, |other| self == other)
    }

    fn rule_hash(&self, state: &mut dyn Hasher) {
        let mut state = state;
        self.hash(&mut state);
    }
}
