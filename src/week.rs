use std::any::Any;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use chrono::Weekday;

use crate::calendar::{CalendarOrdinal, CalendarSystem, DateInterval, LocalDate};
use crate::error::{WeekError, WeekResult};
use crate::rule::{WeekYearRule, ISO_RULE};

const DAYS_OF_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A week-year and week-of-week-year pair, numbered by a [`WeekYearRule`] in a calendar system.
///
/// Values are validated on construction and immutable afterwards. The rule is borrowed, not
/// owned, and compared by value; the calendar is kept as its ordinal.
///
/// `Week` implements neither `PartialOrd` nor `Ord`: weeks numbered by different rules or
/// calendars cannot be ordered, so use [`Week::compare`] and the `is_*` methods, which report
/// that case as [`WeekError::IncomparableWeeks`].
#[derive(Clone, Copy, Debug)]
pub struct Week<'r> {
    week_year: i32,
    week_of_week_year: i32,
    rule: &'r dyn WeekYearRule,
    calendar: CalendarOrdinal,
}

impl Week<'static> {
    /// A week under the ISO rule in the ISO calendar.
    pub fn iso(week_year: i32, week_of_week_year: i32) -> WeekResult<Week<'static>> {
        Week::new(week_year, week_of_week_year, &ISO_RULE, CalendarSystem::iso())
    }
}

impl<'r> Week<'r> {
    pub fn new(
        week_year: i32,
        week_of_week_year: i32,
        rule: &'r dyn WeekYearRule,
        calendar: &CalendarSystem,
    ) -> WeekResult<Week<'r>> {
        let weeks = rule.weeks_in_week_year(week_year, calendar)?;
        if week_of_week_year < 1 || week_of_week_year > weeks {
            return Err(WeekError::out_of_range("week_of_week_year", week_of_week_year, 1, weeks));
        }
        Ok(Week {
            week_year,
            week_of_week_year,
            rule,
            calendar: calendar.ordinal(),
        })
    }

    /// A week in the ISO calendar under `rule`.
    pub fn with_rule(week_year: i32, week_of_week_year: i32, rule: &'r dyn WeekYearRule) -> WeekResult<Week<'r>> {
        Week::new(week_year, week_of_week_year, rule, CalendarSystem::iso())
    }

    pub fn builder() -> WeekBuilder<'r> {
        WeekBuilder::default()
    }

    /// The week `date` falls in, numbered by `rule` in the date's own calendar.
    pub fn containing(date: &LocalDate, rule: &'r dyn WeekYearRule) -> WeekResult<Week<'r>> {
        Week::new(rule.week_year(date), rule.week_of_week_year(date), rule, date.calendar())
    }

    pub fn week_year(&self) -> i32 {
        self.week_year
    }

    pub fn week_of_week_year(&self) -> i32 {
        self.week_of_week_year
    }

    pub fn rule(&self) -> &'r dyn WeekYearRule {
        self.rule
    }

    pub fn calendar(&self) -> &'static CalendarSystem {
        CalendarSystem::for_ordinal(self.calendar)
    }

    /// The date of `day` in this week. Fails with the rule's out-of-range error when the week
    /// is cut short at a week-year boundary and lacks that day.
    pub fn on_day_of_week(&self, day: Weekday) -> WeekResult<LocalDate> {
        self.rule
            .local_date(self.week_year, self.week_of_week_year, day, self.calendar())
    }

    /// Every date in this week, from its first to its last existing day.
    ///
    /// Each day of the week is looked up in turn and days the rule rejects as out of range are
    /// skipped, which is how truncated boundary weeks come out shorter than seven days.
    pub fn to_date_interval(&self) -> DateInterval {
        let mut dates: Vec<LocalDate> = DAYS_OF_WEEK
            .iter()
            .filter_map(|&day| match self.on_day_of_week(day) {
                Ok(date) => Some(date),
                Err(err) if err.is_out_of_range() => None,
                Err(err) => panic!("week-year rule failed to resolve {} of {}: {}", day, self, err),
            })
            .collect();
        dates.sort();
        let start = *dates
            .first()
            .unwrap_or_else(|| panic!("week-year rule reported {} but resolves none of its days", self));
        let end = *dates.last().unwrap_or(&start);
        DateInterval::new(start, end).expect("sorted dates of one calendar always form an interval")
    }

    /// Three-way comparison, defined only between weeks with equal rules and the same calendar.
    pub fn compare(&self, other: &Week<'_>) -> WeekResult<Ordering> {
        self.check_comparable(other)?;
        Ok(self.compare_trusted(other))
    }

    /// Comparison against an arbitrary value: `None` sorts first, anything but a `Week` is an
    /// error.
    pub fn compare_dyn(&self, other: Option<&dyn Any>) -> WeekResult<Ordering> {
        match other {
            None => Ok(Ordering::Greater),
            Some(other) => match other.downcast_ref::<Week<'static>>() {
                Some(other) => self.compare(other),
                None => Err(WeekError::WrongType),
            },
        }
    }

    pub fn is_before(&self, other: &Week<'_>) -> WeekResult<bool> {
        self.check_comparable(other)?;
        Ok(self.compare_trusted(other) == Ordering::Less)
    }

    pub fn is_on_or_before(&self, other: &Week<'_>) -> WeekResult<bool> {
        self.check_comparable(other)?;
        Ok(self.compare_trusted(other) != Ordering::Greater)
    }

    pub fn is_after(&self, other: &Week<'_>) -> WeekResult<bool> {
        self.check_comparable(other)?;
        Ok(self.compare_trusted(other) == Ordering::Greater)
    }

    pub fn is_on_or_after(&self, other: &Week<'_>) -> WeekResult<bool> {
        self.check_comparable(other)?;
        Ok(self.compare_trusted(other) != Ordering::Less)
    }

    /// Equality against an arbitrary value; false for `None` and for anything but a `Week`.
    pub fn equals_dyn(&self, other: Option<&dyn Any>) -> bool {
        other
            .and_then(|other| other.downcast_ref::<Week<'static>>())
            .map_or(false, |other| self == other)
    }

    fn check_comparable(&self, other: &Week<'_>) -> WeekResult<()> {
        if self.calendar != other.calendar || !self.rule.rule_eq(other.rule) {
            return Err(WeekError::IncomparableWeeks);
        }
        Ok(())
    }

    // Callers must have run check_comparable.
    fn compare_trusted(&self, other: &Week<'_>) -> Ordering {
        self.week_year
            .cmp(&other.week_year)
            .then(self.week_of_week_year.cmp(&other.week_of_week_year))
    }
}

impl<'a, 'b> PartialEq<Week<'b>> for Week<'a> {
    fn eq(&self, other: &Week<'b>) -> bool {
        self.week_year == other.week_year
            && self.week_of_week_year == other.week_of_week_year
            && self.calendar == other.calendar
            && self.rule.rule_eq(other.rule)
    }
}

impl Eq for Week<'_> {}

impl Hash for Week<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.week_year.hash(state);
        self.week_of_week_year.hash(state);
        self.rule.rule_hash(state);
        self.calendar.hash(state);
    }
}

impl Display for Week<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.week_year, self.week_of_week_year)?;
        match self.calendar {
            CalendarOrdinal::Iso => Ok(()),
            _ => write!(f, " ({})", self.calendar()),
        }
    }
}

/// Builds a [`Week`] from parts that may not all be known up front. Unlike [`Week::new`], a
/// missing rule or calendar is reported as [`WeekError::MissingArgument`].
#[derive(Debug, Default)]
pub struct WeekBuilder<'r> {
    week_year: i32,
    week_of_week_year: i32,
    rule: Option<&'r dyn WeekYearRule>,
    calendar: Option<CalendarOrdinal>,
}

impl<'r> WeekBuilder<'r> {
    pub fn week_year(mut self, week_year: i32) -> Self {
        self.week_year = week_year;
        self
    }

    pub fn week_of_week_year(mut self, week_of_week_year: i32) -> Self {
        self.week_of_week_year = week_of_week_year;
        self
    }

    pub fn rule(mut self, rule: &'r dyn WeekYearRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn calendar(mut self, calendar: &CalendarSystem) -> Self {
        self.calendar = Some(calendar.ordinal());
        self
    }

    pub fn build(self) -> WeekResult<Week<'r>> {
        let rule = self.rule.ok_or(WeekError::MissingArgument("rule"))?;
        let calendar = self.calendar.ok_or(WeekError::MissingArgument("calendar"))?;
        Week::new(
            self.week_year,
            self.week_of_week_year,
            rule,
            CalendarSystem::for_ordinal(calendar),
        )
    }
}
