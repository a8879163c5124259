use chrono::Weekday;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::calendar::CalendarSystem;
use crate::error::{WeekError, WeekResult};
use crate::rule::{CalendarWeekRule, SimpleWeekYearRule};

/// Default week numbering, read from `week-year.{toml|yaml|json}` and `WEEK_YEAR_*` variables.
///
/// `week_rule` selects one of the calendar week rules and, when set, takes precedence over
/// `min_days_in_first_week` and `irregular_weeks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub calendar: String,
    pub first_day_of_week: Weekday,
    pub min_days_in_first_week: u8,
    pub irregular_weeks: bool,
    pub week_rule: Option<CalendarWeekRule>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            calendar: CalendarSystem::iso().id().to_string(),
            first_day_of_week: Weekday::Mon,
            min_days_in_first_week: 4,
            irregular_weeks: false,
            week_rule: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path` (required) or from `./week-year.*` (optional), then lets the
    /// environment override them.
    pub fn load(path: Option<&str>) -> WeekResult<Settings> {
        let config = Config::builder()
            .add_source(File::with_name(path.unwrap_or("week-year")).required(path.is_some()))
            // Eg.. `WEEK_YEAR_CALENDAR=Julian week-year 2015 1`
            .add_source(Environment::with_prefix("WEEK_YEAR"))
            .build()?;
        Settings::try_from(config)
    }

    pub fn rule(&self) -> WeekResult<SimpleWeekYearRule> {
        match self.week_rule {
            Some(week_rule) => Ok(SimpleWeekYearRule::from_calendar_week_rule(week_rule, self.first_day_of_week)),
            None => SimpleWeekYearRule::new(self.min_days_in_first_week, self.first_day_of_week, self.irregular_weeks),
        }
    }

    pub fn calendar(&self) -> WeekResult<&'static CalendarSystem> {
        CalendarSystem::for_id(&self.calendar)
    }
}

impl TryFrom<Config> for Settings {
    type Error = WeekError;

    fn try_from(cfg: Config) -> Result<Self, Self::Error> {
        let settings: Settings = cfg.try_deserialize()?;
        // Surface bad values here rather than on first use.
        settings.rule()?;
        settings.calendar()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> WeekResult<Settings> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Settings::try_from(config)
    }

    #[test]
    fn test_defaults_are_iso() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.rule().unwrap(), SimpleWeekYearRule::iso());
        assert_eq!(settings.calendar().unwrap(), CalendarSystem::iso());
    }

    #[test]
    fn test_reads_rule_and_calendar() {
        let settings = from_toml(
            r#"
            calendar = "julian"
            first_day_of_week = "Sun"
            min_days_in_first_week = 1
            "#,
        )
        .unwrap();
        assert_eq!(settings.calendar().unwrap(), CalendarSystem::julian());
        assert_eq!(
            settings.rule().unwrap(),
            SimpleWeekYearRule::for_min_days_in_first_week(1, Weekday::Sun).unwrap()
        );
    }

    #[test]
    fn test_week_rule_takes_precedence() {
        let settings = from_toml(r#"week_rule = "FirstFourDayWeek""#).unwrap();
        let rule = settings.rule().unwrap();
        assert!(rule.irregular_weeks());
        assert_eq!(rule.min_days_in_first_week(), 4);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(from_toml(r#"calendar = "Coptic""#), Err(WeekError::UnknownCalendar(_))));
        assert!(matches!(from_toml("min_days_in_first_week = 9"), Err(WeekError::InvalidMinDays(9))));
        assert!(matches!(from_toml("irregular_weeks = \"sometimes\""), Err(WeekError::Config(_))));
    }
}
