use std::fmt::{Display, Formatter};

use crate::error::{WeekError, WeekResult};

/// Days from 0000-03-01 to 1970-01-01 (ISO), for each leap-year scheme.
const GREGORIAN_SHIFT: i32 = 719_468;
const JULIAN_SHIFT: i32 = 719_470;

/// Compact identity of a calendar system. This is what values store instead of a full handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CalendarOrdinal {
    Iso = 0,
    Gregorian = 1,
    Julian = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LeapRule {
    Gregorian,
    Julian,
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CalendarSystem {
    ordinal: CalendarOrdinal,
    id: &'static str,
    min_year: i32,
    max_year: i32,
}

static CALENDARS: [CalendarSystem; 3] = [
    CalendarSystem { ordinal: CalendarOrdinal::Iso, id: "ISO", min_year: -9998, max_year: 9999 },
    CalendarSystem { ordinal: CalendarOrdinal::Gregorian, id: "Gregorian", min_year: -9998, max_year: 9999 },
    CalendarSystem { ordinal: CalendarOrdinal::Julian, id: "Julian", min_year: -9997, max_year: 9998 },
];

impl CalendarSystem {
    /// The default calendar: proleptic Gregorian with ISO identity.
    pub fn iso() -> &'static CalendarSystem {
        &CALENDARS[CalendarOrdinal::Iso as usize]
    }

    /// Same arithmetic as ISO, but a distinct calendar identity.
    pub fn gregorian() -> &'static CalendarSystem {
        &CALENDARS[CalendarOrdinal::Gregorian as usize]
    }

    pub fn julian() -> &'static CalendarSystem {
        &CALENDARS[CalendarOrdinal::Julian as usize]
    }

    pub fn all() -> &'static [CalendarSystem] {
        &CALENDARS
    }

    pub fn for_ordinal(ordinal: CalendarOrdinal) -> &'static CalendarSystem {
        &CALENDARS[ordinal as usize]
    }

    /// Looks a calendar up by its id, ignoring ASCII case.
    pub fn for_id(id: &str) -> WeekResult<&'static CalendarSystem> {
        CALENDARS
            .iter()
            .find(|calendar| calendar.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| WeekError::UnknownCalendar(id.to_string()))
    }

    pub fn ordinal(&self) -> CalendarOrdinal {
        self.ordinal
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    fn leap_rule(&self) -> LeapRule {
        match self.ordinal {
            CalendarOrdinal::Iso | CalendarOrdinal::Gregorian => LeapRule::Gregorian,
            CalendarOrdinal::Julian => LeapRule::Julian,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        match self.leap_rule() {
            LeapRule::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
            LeapRule::Julian => year.rem_euclid(4) == 0,
        }
    }

    pub fn days_in_year(&self, year: i32) -> i32 {
        if self.is_leap_year(year) { 366 } else { 365 }
    }

    pub fn days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Days since 1970-01-01 (ISO) of the given year/month/day.
    ///
    /// The arithmetic is total: callers validate the components against the calendar's range.
    pub fn days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        let (month, day) = (i32::from(month), i32::from(day));
        // March-based years put the leap day at the end of the year.
        let year = if month <= 2 { year - 1 } else { year };
        let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
        match self.leap_rule() {
            LeapRule::Gregorian => {
                let era = year.div_euclid(400);
                let year_of_era = year.rem_euclid(400);
                let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
                era * 146_097 + day_of_era - GREGORIAN_SHIFT
            }
            LeapRule::Julian => {
                let era = year.div_euclid(4);
                let year_of_era = year.rem_euclid(4);
                era * 1461 + year_of_era * 365 + day_of_year - JULIAN_SHIFT
            }
        }
    }

    /// Inverse of [`CalendarSystem::days_since_epoch`].
    pub fn ymd_from_days(&self, days: i32) -> (i32, u8, u8) {
        let (year, day_of_year) = match self.leap_rule() {
            LeapRule::Gregorian => {
                let shifted = days + GREGORIAN_SHIFT;
                let era = shifted.div_euclid(146_097);
                let day_of_era = shifted.rem_euclid(146_097);
                let year_of_era =
                    (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
                let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
                (era * 400 + year_of_era, day_of_year)
            }
            LeapRule::Julian => {
                let shifted = days + JULIAN_SHIFT;
                let era = shifted.div_euclid(1461);
                let day_of_era = shifted.rem_euclid(1461);
                let year_of_era = (day_of_era - day_of_era / 1460) / 365;
                (era * 4 + year_of_era, day_of_era - 365 * year_of_era)
            }
        };
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
        let year = if month <= 2 { year + 1 } else { year };
        (year, month as u8, day as u8)
    }

    /// Days since epoch of January 1st of `year`. Also valid just outside the calendar's range,
    /// which week-year rules need at the edges.
    pub fn start_of_year_in_days(&self, year: i32) -> i32 {
        self.days_since_epoch(year, 1, 1)
    }

    /// First day (since epoch) the calendar supports.
    pub fn min_days(&self) -> i32 {
        self.start_of_year_in_days(self.min_year)
    }

    /// Last day (since epoch) the calendar supports.
    pub fn max_days(&self) -> i32 {
        self.days_since_epoch(self.max_year, 12, 31)
    }

    pub fn validate_year(&self, year: i32) -> WeekResult<()> {
        if year < self.min_year || year > self.max_year {
            return Err(WeekError::out_of_range("year", year, self.min_year, self.max_year));
        }
        Ok(())
    }
}

impl Display for CalendarSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id)
    }
}
