use std::cmp::Ordering;

use chrono::Weekday;
use proptest::prelude::*;

use week_year::{CalendarSystem, CalendarWeekRule, LocalDate, SimpleWeekYearRule, Week, WeekError, WeekYearRule};

const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(DAYS.to_vec())
}

fn calendar() -> impl Strategy<Value = &'static CalendarSystem> {
    prop::sample::select(CalendarSystem::all().iter().collect::<Vec<_>>())
}

fn rule() -> impl Strategy<Value = SimpleWeekYearRule> {
    (1u8..=7, weekday(), any::<bool>())
        .prop_map(|(min_days, first_day, irregular)| SimpleWeekYearRule::new(min_days, first_day, irregular).unwrap())
}

proptest! {
    #[test]
    fn days_map_back_to_their_week(
        rule in rule(),
        calendar in calendar(),
        week_year in -9000i32..9000,
        week in 1i32..=53,
        day in weekday(),
    ) {
        let weeks = rule.weeks_in_week_year(week_year, calendar).unwrap();
        prop_assume!(week <= weeks);
        let value = Week::new(week_year, week, &rule, calendar).unwrap();
        if let Ok(date) = value.on_day_of_week(day) {
            prop_assert_eq!(date.day_of_week(), day);
            prop_assert_eq!(date.calendar(), calendar);
            prop_assert_eq!(rule.week_year(&date), week_year);
            prop_assert_eq!(rule.week_of_week_year(&date), week);
            prop_assert_eq!(Week::containing(&date, &rule).unwrap(), value);
        }
    }

    #[test]
    fn regular_weeks_have_every_day(
        min_days in 1u8..=7,
        first_day in weekday(),
        calendar in calendar(),
        week_year in -9000i32..9000,
        week in 1i32..=53,
    ) {
        let rule = SimpleWeekYearRule::for_min_days_in_first_week(min_days, first_day).unwrap();
        prop_assume!(week <= rule.weeks_in_week_year(week_year, calendar).unwrap());
        let interval = Week::new(week_year, week, &rule, calendar).unwrap().to_date_interval();
        prop_assert_eq!(interval.len(), 7);
        prop_assert_eq!(interval.start().day_of_week(), first_day);
    }

    #[test]
    fn interval_covers_exactly_the_resolvable_days(
        rule in rule(),
        week_year in -9000i32..9000,
        week in 1i32..=53,
    ) {
        let calendar = CalendarSystem::iso();
        prop_assume!(week <= rule.weeks_in_week_year(week_year, calendar).unwrap());
        let value = Week::new(week_year, week, &rule, calendar).unwrap();
        let interval = value.to_date_interval();
        let resolvable = DAYS.iter().filter(|&&day| value.on_day_of_week(day).is_ok()).count();
        prop_assert_eq!(interval.len(), resolvable);
        for date in interval.iter() {
            prop_assert_eq!(value.on_day_of_week(date.day_of_week()).unwrap(), date);
        }
    }

    #[test]
    fn week_count_matches_last_valid_week(
        rule in rule(),
        week_year in -9000i32..9000,
    ) {
        let calendar = CalendarSystem::iso();
        let weeks = rule.weeks_in_week_year(week_year, calendar).unwrap();
        prop_assert!((52..=54).contains(&weeks));
        prop_assert!(Week::new(week_year, weeks, &rule, calendar).is_ok());
        let err = Week::new(week_year, weeks + 1, &rule, calendar).unwrap_err();
        prop_assert!(err.is_out_of_range());
    }

    #[test]
    fn comparison_is_lexicographic(
        a in (-9000i32..9000, 1i32..=52),
        b in (-9000i32..9000, 1i32..=52),
    ) {
        let first = Week::iso(a.0, a.1).unwrap();
        let second = Week::iso(b.0, b.1).unwrap();
        let expected = a.cmp(&b);
        prop_assert_eq!(first.compare(&second).unwrap(), expected);
        prop_assert_eq!(second.compare(&first).unwrap(), expected.reverse());
        prop_assert_eq!(first.is_before(&second).unwrap(), expected == Ordering::Less);
        prop_assert_eq!(first.is_on_or_after(&second).unwrap(), expected != Ordering::Less);
        prop_assert_eq!(first == second, expected == Ordering::Equal);
    }
}

#[test]
fn iso_boundaries() {
    assert!(Week::iso(-9998, 1).is_ok());
    assert!(Week::iso(9999, 52).is_ok());
    assert!(Week::iso(-9999, 1).is_err());
    assert!(Week::iso(10000, 1).is_err());

    // The calendar ends on Friday 9999-12-31, in the middle of the last week.
    let interval = Week::iso(9999, 52).unwrap().to_date_interval();
    assert_eq!(interval.start(), LocalDate::iso(9999, 12, 27).unwrap());
    assert_eq!(interval.end(), LocalDate::iso(9999, 12, 31).unwrap());
}

#[test]
fn calendar_edge_week_years() {
    for calendar in CalendarSystem::all() {
        for min_days in 1u8..=7 {
            for first_day in DAYS {
                for irregular in [false, true] {
                    let rule = SimpleWeekYearRule::new(min_days, first_day, irregular).unwrap();
                    for week_year in [calendar.min_year() - 1, calendar.max_year() + 1] {
                        let err = rule.weeks_in_week_year(week_year, calendar).unwrap_err();
                        assert!(err.is_out_of_range(), "{:?} {} in {}", rule, week_year, calendar);
                        for week in 1..=54 {
                            assert!(Week::new(week_year, week, &rule, calendar).is_err());
                        }
                    }
                    for week_year in [calendar.min_year(), calendar.max_year()] {
                        let weeks = rule.weeks_in_week_year(week_year, calendar).unwrap();
                        for week in 1..=weeks {
                            let value = Week::new(week_year, week, &rule, calendar).unwrap();
                            let resolvable = DAYS.iter().filter(|&&day| value.on_day_of_week(day).is_ok()).count();
                            assert!(resolvable >= 1, "{:?}: {} in {} has no days", rule, value, calendar);
                            assert_eq!(value.to_date_interval().len(), resolvable);
                        }
                        assert!(Week::new(week_year, weeks + 1, &rule, calendar).is_err());
                    }
                }
            }
        }
    }
}

#[test]
fn dates_past_the_last_week_year_have_no_week() {
    let rule = SimpleWeekYearRule::for_min_days_in_first_week(1, Weekday::Mon).unwrap();
    let calendar = CalendarSystem::iso();
    // Monday 9999-12-27 opens week 1 of 10000 under this rule.
    let err = Week::new(10000, 2, &rule, calendar).unwrap_err();
    assert!(matches!(err, WeekError::OutOfRange { param: "week_year", .. }), "{}", err);
    let last_day = LocalDate::iso(9999, 12, 31).unwrap();
    assert_eq!(rule.week_year(&last_day), 10000);
    assert!(Week::containing(&last_day, &rule).unwrap_err().is_out_of_range());

    let last_week = Week::new(9999, 52, &rule, calendar).unwrap().to_date_interval();
    assert_eq!(last_week.start(), LocalDate::iso(9999, 12, 20).unwrap());
    assert_eq!(last_week.len(), 7);
}

#[test]
fn rules_built_separately_compare_equal() {
    let first = SimpleWeekYearRule::from_calendar_week_rule(CalendarWeekRule::FirstFourDayWeek, Weekday::Mon);
    let second = SimpleWeekYearRule::new(4, Weekday::Mon, true).unwrap();
    let a = Week::with_rule(2014, 53, &first).unwrap();
    let b = Week::with_rule(2014, 53, &second).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.compare(&b).unwrap(), Ordering::Equal);
}

#[test]
fn weeks_under_different_rules_cannot_be_ordered() {
    let sunday_first = SimpleWeekYearRule::for_min_days_in_first_week(1, Weekday::Sun).unwrap();
    let us = Week::with_rule(2020, 10, &sunday_first).unwrap();
    let iso = Week::iso(2020, 10).unwrap();
    assert_ne!(us, iso);
    assert!(matches!(us.compare(&iso), Err(WeekError::IncomparableWeeks)));
    assert!(matches!(iso.is_on_or_before(&us), Err(WeekError::IncomparableWeeks)));
}

#[test]
fn week_operations_leave_the_log_alone() {
    let truncated_rule = SimpleWeekYearRule::from_calendar_week_rule(CalendarWeekRule::FirstFourDayWeek, Weekday::Mon);
    let sunday_first = SimpleWeekYearRule::for_min_days_in_first_week(1, Weekday::Sun).unwrap();

    assert!(Week::iso(2000, 53).is_err());
    let truncated = Week::with_rule(2014, 53, &truncated_rule).unwrap();
    assert_eq!(truncated.to_date_interval().len(), 3);
    assert!(truncated.on_day_of_week(Weekday::Sun).is_err());
    let us = Week::with_rule(2020, 10, &sunday_first).unwrap();
    assert!(us.compare(&Week::iso(2020, 10).unwrap()).is_err());

    // Nothing else in this test binary writes to the log.
    assert!(week_year::log::recent(usize::MAX).is_empty());
}
