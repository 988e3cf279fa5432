//! New York City collection-holiday rules.
//!
//! The days the city suspends curbside collection:
//! * New Year's Day (Jan 1; if Sat → Fri, if Sun → Mon)
//! * Martin Luther King Day (3rd Mon in Jan)
//! * Abraham Lincoln's Birthday (Feb 12; if Sat → Fri, if Sun → Mon)
//! * Presidents' Day (3rd Mon in Feb)
//! * Memorial Day (last Mon in May)
//! * Independence Day (Jul 4; if Sat → Fri, if Sun → Mon)
//! * Labor Day (1st Mon in Sep)
//! * Indigenous Peoples' Day (2nd Mon in Oct)
//! * Election Day (1st Tue on/after Nov 2)
//! * Veterans Day (Nov 11; if Sat → Fri, if Sun → Mon; the Nov 11/Nov 10
//!   observance is cancelled when Election Day fell earlier the same week)
//! * Thanksgiving Day (4th Thu in Nov)
//! * Christmas Day (Dec 25; if Sat → Fri, if Sun → Mon)
//!
//! A fixed-date holiday that lands on a weekend keeps matching its calendar
//! date; the shifted Friday/Monday observance matches in addition to it.

use crate::date::Date;
use crate::holiday::{HolidayRule, HolidaySchedule};
use crate::month::Month;
use crate::weekday::Weekday;

/// The New York City collection schedule: all twelve rules, in evaluation
/// order.
pub static NEW_YORK_COLLECTION: HolidaySchedule =
    HolidaySchedule::new("New York (Collection)", &RULES);

static RULES: [&dyn HolidayRule; 12] = [
    &NewYearsDay,
    &MartinLutherKingDay,
    &LincolnsBirthday,
    &PresidentsDay,
    &MemorialDay,
    &IndependenceDay,
    &LaborDay,
    &IndigenousPeoplesDay,
    &ElectionDay,
    &VeteransDay,
    &ThanksgivingDay,
    &ChristmasDay,
];

/// New Year's Day — January 1.
///
/// The Dec 31 branch needs no year linkage: Dec 31 on a Friday always
/// precedes a Saturday Jan 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewYearsDay;

impl HolidayRule for NewYearsDay {
    fn name(&self) -> &'static str {
        "New Years Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        let d = date.day_of_month();
        let w = date.weekday();
        match date.month() {
            Month::January => d == 1 || (d == 2 && w == Weekday::Monday),
            Month::December => d == 31 && w == Weekday::Friday,
            _ => false,
        }
    }
}

/// Martin Luther King Day — third Monday of January.
#[derive(Debug, Clone, Copy, Default)]
pub struct MartinLutherKingDay;

impl HolidayRule for MartinLutherKingDay {
    fn name(&self) -> &'static str {
        "Martin Luther King Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::January
            && date.weekday() == Weekday::Monday
            && (15..=21).contains(&date.day_of_month())
    }
}

/// Abraham Lincoln's Birthday — February 12.
#[derive(Debug, Clone, Copy, Default)]
pub struct LincolnsBirthday;

impl HolidayRule for LincolnsBirthday {
    fn name(&self) -> &'static str {
        "Abraham Lincoln's Birthday"
    }

    fn observed_on(&self, date: Date) -> bool {
        if date.month() != Month::February {
            return false;
        }
        let d = date.day_of_month();
        let w = date.weekday();
        d == 12 || (d == 11 && w == Weekday::Friday) || (d == 13 && w == Weekday::Monday)
    }
}

/// Presidents' Day — third Monday of February.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresidentsDay;

impl HolidayRule for PresidentsDay {
    fn name(&self) -> &'static str {
        "Presidents' Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::February
            && date.weekday() == Weekday::Monday
            && (15..=21).contains(&date.day_of_month())
    }
}

/// Memorial Day — last Monday of May.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorialDay;

impl HolidayRule for MemorialDay {
    fn name(&self) -> &'static str {
        "Memorial Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::May
            && date.weekday() == Weekday::Monday
            && date.day_of_month() >= 25
    }
}

/// Independence Day — July 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndependenceDay;

impl HolidayRule for IndependenceDay {
    fn name(&self) -> &'static str {
        "Independence Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        if date.month() != Month::July {
            return false;
        }
        let d = date.day_of_month();
        let w = date.weekday();
        d == 4 || (d == 3 && w == Weekday::Friday) || (d == 5 && w == Weekday::Monday)
    }
}

/// Labor Day — first Monday of September.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaborDay;

impl HolidayRule for LaborDay {
    fn name(&self) -> &'static str {
        "Labor Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::September
            && date.weekday() == Weekday::Monday
            && date.day_of_month() <= 7
    }
}

/// Indigenous Peoples' Day — second Monday of October.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndigenousPeoplesDay;

impl HolidayRule for IndigenousPeoplesDay {
    fn name(&self) -> &'static str {
        "Indigenous Peoples' Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::October
            && date.weekday() == Weekday::Monday
            && (8..=14).contains(&date.day_of_month())
    }
}

/// Election Day — the first Tuesday on or after November 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectionDay;

impl HolidayRule for ElectionDay {
    fn name(&self) -> &'static str {
        "Election Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::November
            && date.weekday() == Weekday::Tuesday
            && (2..=8).contains(&date.day_of_month())
    }
}

/// Veterans Day — November 11.
///
/// The Nov 11 / Friday-Nov-10 observance is cancelled outright when Election
/// Day already fell earlier in the same week; the Monday-Nov-12 observance is
/// never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct VeteransDay;

impl HolidayRule for VeteransDay {
    fn name(&self) -> &'static str {
        "Veterans Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        if date.month() != Month::November {
            return false;
        }
        let d = date.day_of_month();
        let w = date.weekday();
        if (d == 11 || (d == 10 && w == Weekday::Friday))
            && !election_day_earlier_in_week(date)
        {
            return true;
        }
        d == 12 && w == Weekday::Monday
    }
}

/// Thanksgiving Day — fourth Thursday of November.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThanksgivingDay;

impl HolidayRule for ThanksgivingDay {
    fn name(&self) -> &'static str {
        "Thanksgiving Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        date.month() == Month::November
            && date.weekday() == Weekday::Thursday
            && (22..=28).contains(&date.day_of_month())
    }
}

/// Christmas Day — December 25.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChristmasDay;

impl HolidayRule for ChristmasDay {
    fn name(&self) -> &'static str {
        "Christmas Day"
    }

    fn observed_on(&self, date: Date) -> bool {
        if date.month() != Month::December {
            return false;
        }
        let d = date.day_of_month();
        let w = date.weekday();
        d == 25 || (d == 24 && w == Weekday::Friday) || (d == 26 && w == Weekday::Monday)
    }
}

/// Return `true` if Election Day fell on an earlier day of the week
/// containing `date` (weeks start on Monday).
///
/// Scans one day at a time from `date` back to, but not including, the most
/// recent Monday.
pub fn election_day_earlier_in_week(date: Date) -> bool {
    (1..=i32::from(date.weekday().days_from_monday()))
        .any(|days_ago| ElectionDay.observed_on(date - days_ago))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_eve_friday_observance() {
        // Jan 1, 2011 is a Saturday; observed Friday Dec 31, 2010
        assert!(NewYearsDay.observed_on(date(2010, 12, 31)));
        // Dec 31, 2016 is a Saturday; not an observance
        assert!(!NewYearsDay.observed_on(date(2016, 12, 31)));
    }

    #[test]
    fn election_week_scan() {
        // Election Day 2017 was Tuesday Nov 7
        assert!(ElectionDay.observed_on(date(2017, 11, 7)));
        assert!(election_day_earlier_in_week(date(2017, 11, 10)));
        assert!(election_day_earlier_in_week(date(2017, 11, 8)));
        // The scan looks at strictly earlier days only
        assert!(!election_day_earlier_in_week(date(2017, 11, 7)));
        // Monday starts the week; nothing earlier to find
        assert!(!election_day_earlier_in_week(date(2017, 11, 6)));
        // Election Day 2021 (Nov 2) was the week before Veterans Day
        assert!(!election_day_earlier_in_week(date(2021, 11, 11)));
    }

    #[test]
    fn veterans_day_suppressed_in_election_week() {
        // Nov 10, 2017 (Friday before a Saturday Nov 11): pickup ran because
        // Election Day fell that Tuesday
        assert!(!VeteransDay.observed_on(date(2017, 11, 10)));
        assert!(!VeteransDay.observed_on(date(2017, 11, 11)));
        // Nov 11, 2018 was a Sunday in election week; Monday Nov 12 is
        // observed regardless
        assert!(!VeteransDay.observed_on(date(2018, 11, 11)));
        assert!(VeteransDay.observed_on(date(2018, 11, 12)));
    }

    #[test]
    fn monday_window_rules() {
        // MLK Day 2021: Jan 18
        assert!(MartinLutherKingDay.observed_on(date(2021, 1, 18)));
        assert!(!MartinLutherKingDay.observed_on(date(2021, 1, 11))); // 2nd Monday
        // Memorial Day 2021: May 31
        assert!(MemorialDay.observed_on(date(2021, 5, 31)));
        assert!(!MemorialDay.observed_on(date(2021, 5, 24)));
    }

    #[test]
    fn schedule_dispatches_by_name() {
        assert_eq!(
            NEW_YORK_COLLECTION.holiday_name(date(2021, 9, 6)),
            Some("Labor Day")
        );
        assert_eq!(NEW_YORK_COLLECTION.holiday_name(date(2021, 3, 29)), None);
        assert_eq!(NEW_YORK_COLLECTION.name(), "New York (Collection)");
    }
}
