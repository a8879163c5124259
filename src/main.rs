use std::error::Error;
use std::sync::RwLock;

use argh::FromArgs;
use chrono::Weekday;
use lazy_static::lazy_static;
use serde_json::json;

use week_year::{Settings, Week};

lazy_static! {
    // Add in `./week-year.{toml|yaml|json}` and settings from the environment (prefix WEEK_YEAR)
    pub static ref SETTINGS: RwLock<Settings> = RwLock::new(Settings::load(None).unwrap_or_else(|err| {
        week_year::log!("ignoring configuration: {}", err);
        Settings::default()
    }));
}

/// Print the dates covered by a week, or the date of one of its days.
#[derive(Debug, FromArgs)]
struct Cli {
    /// week-year, e.g. 2015
    #[argh(positional)]
    week_year: i32,

    /// week of the week-year, starting at 1
    #[argh(positional)]
    week: i32,

    /// only print this day of the week (Mon..Sun)
    #[argh(option, from_str_fn(parse_weekday))]
    day: Option<Weekday>,

    /// calendar system: ISO, Gregorian or Julian
    #[argh(option)]
    calendar: Option<String>,

    /// days of the new year that week 1 must contain (1-7)
    #[argh(option)]
    min_days: Option<u8>,

    /// first day of the week (Mon..Sun)
    #[argh(option, from_str_fn(parse_weekday))]
    first_day: Option<Weekday>,

    /// cut weeks short at calendar year boundaries
    #[argh(switch)]
    irregular: bool,

    /// configuration file to use instead of ./week-year.*
    #[argh(option)]
    config: Option<String>,

    /// print JSON instead of text
    #[argh(switch)]
    json: bool,

    /// print diagnostics to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value
        .parse::<Weekday>()
        .map_err(|_| format!("not a day of the week: {}", value))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: Cli = argh::from_env();
    let result = run(&cli);
    if cli.verbose {
        for entry in week_year::log::recent(32) {
            eprintln!("{}", entry);
        }
    }
    result
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &cli.config {
        *SETTINGS.write().map_err(|_| "settings lock poisoned")? = Settings::load(Some(path))?;
    }
    let settings = apply_overrides(SETTINGS.read().map_err(|_| "settings lock poisoned")?.clone(), cli);
    let rule = settings.rule()?;
    let calendar = settings.calendar()?;
    week_year::log!("resolving with {:?} in the {} calendar", rule, calendar);
    let week = Week::new(cli.week_year, cli.week, &rule, calendar)?;

    match cli.day {
        Some(day) => {
            let date = week.on_day_of_week(day)?;
            if cli.json {
                println!("{}", json!({ "week": week.to_string(), "day": day.to_string(), "date": date.to_string() }));
            } else {
                println!("{}", date);
            }
        }
        None => {
            let interval = week.to_date_interval();
            if interval.len() < 7 {
                week_year::log!("{} is cut to {} days", week, interval.len());
            }
            if cli.json {
                let value = json!({
                    "week": week.to_string(),
                    "start": interval.start().to_string(),
                    "end": interval.end().to_string(),
                    "days": interval.len(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}: {} - {} ({} days)", week, interval.start(), interval.end(), interval.len());
            }
        }
    }
    Ok(())
}

fn apply_overrides(mut settings: Settings, cli: &Cli) -> Settings {
    if let Some(calendar) = &cli.calendar {
        settings.calendar = calendar.clone();
    }
    if let Some(first_day) = cli.first_day {
        settings.first_day_of_week = first_day;
    }
    if cli.min_days.is_some() || cli.irregular {
        settings.week_rule = None;
    }
    if let Some(min_days) = cli.min_days {
        settings.min_days_in_first_week = min_days;
    }
    if cli.irregular {
        settings.irregular_weeks = true;
    }
    settings
}
